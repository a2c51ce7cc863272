#![cfg(test)]

use std::io::{self, Write};

use glam::DVec3;

use crate::{
    add_cartesian_coordinates,
    body_presets::{JUPITER, MARS, MERCURY, NEPTUNE, SATURN, THE_MOON, THE_SUN, URANUS, VENUS},
    deg, get_eccentric_anomaly, planet_ecliptic_coordinates, rad,
    render::{
        day_caption, BodyStyle, Color, DrawCommand, FrameRenderer, ReGisCanvas, RecordingCanvas,
        VectorCanvas,
    },
    rev, solve_eccentric_anomaly, sun_ecliptic_coordinates, Body, ConfigError,
    EclipticCoordinates, OrbitalElements, PerifocalState, RenderError, SecularElement,
    Simulation, SimulationConfig, SkySnapshot, EARTH_RADII_PER_ASTRONOMICAL_UNIT,
    ECCENTRIC_ANOMALY_TOLERANCE, NUMERIC_MAX_ITERS,
};


use assertions::*;
use polling::*;
use seeders::*;

const RANDOM_TRIALS: usize = 4096;

const ALL_PRESETS: [OrbitalElements; 9] = [
    THE_SUN, THE_MOON, MERCURY, VENUS, MARS, JUPITER, SATURN, URANUS, NEPTUNE,
];

fn kepler_residual(eccentricity: f64, mean_anomaly: f64, eccentric_anomaly: f64) -> f64 {
    eccentric_anomaly - deg(eccentricity * rad(eccentric_anomaly).sin()) - mean_anomaly
}

#[test]
fn rev_known_values() {
    let tests = [
        ("zero", 0.0, 0.0),
        ("in range", 123.5, 123.5),
        ("full turn", 360.0, 0.0),
        ("just over", 370.0, 10.0),
        ("many turns", 3.0 * 360.0 + 45.0, 45.0),
        ("negative", -90.0, 270.0),
        ("negative turn", -360.0, 0.0),
        ("many negative turns", -5.0 * 360.0 - 30.0, 330.0),
    ];

    for (what, input, expected) in tests {
        assert_almost_eq(rev(input), expected, what);
    }
}

#[test]
fn rev_range_and_periodicity() {
    for _ in 0..RANDOM_TRIALS {
        let x = rand::random_range(-1e7..1e7);
        let reduced = rev(x);

        assert!(
            (0.0..360.0).contains(&reduced),
            "rev({x}) = {reduced} is outside [0, 360)"
        );
        assert_angle_close(rev(x + 360.0), reduced, 1e-6, "rev periodicity");
    }
}

#[test]
fn rev_tiny_negative() {
    let reduced = rev(-1e-20);
    assert!((0.0..360.0).contains(&reduced), "rev(-1e-20) = {reduced}");
}

#[test]
fn solver_circular_is_identity() {
    for m in [0.0, 45.0, 180.0, 270.5, 359.999] {
        let solution = solve_eccentric_anomaly(0.0, m);

        assert!(solution.converged);
        assert_eq!(solution.iterations, 0);
        assert_eq!(solution.degrees, m);
    }
}

#[test]
fn solver_satisfies_keplers_equation_grid() {
    const ECCENTRICITY_STEPS: usize = 50;
    const ANOMALY_STEPS: usize = 720;

    for i in 0..=ECCENTRICITY_STEPS {
        let e = 0.25 * i as f64 / ECCENTRICITY_STEPS as f64;

        for j in 0..ANOMALY_STEPS {
            let m = 360.0 * j as f64 / ANOMALY_STEPS as f64;
            let solution = solve_eccentric_anomaly(e, m);

            assert!(solution.converged, "e = {e}, M = {m}: {solution:?}");
            assert!(solution.iterations <= NUMERIC_MAX_ITERS);

            let residual = kepler_residual(e, m, solution.degrees);
            assert!(
                residual.abs() < 1e-4,
                "e = {e}, M = {m}: residual of {residual} degrees"
            );
        }
    }
}

#[test]
fn solver_satisfies_keplers_equation_random() {
    for _ in 0..RANDOM_TRIALS {
        let e = random_eccentricity();
        let m = random_mean_anomaly();
        let ecc = get_eccentric_anomaly(e, m);

        assert_close(
            kepler_residual(e, m, ecc),
            0.0,
            ECCENTRIC_ANOMALY_TOLERANCE,
            &format!("Kepler residual at e = {e}, M = {m}"),
        );
    }
}

#[test]
fn solver_terminates_for_high_eccentricity() {
    for _ in 0..RANDOM_TRIALS {
        let e = rand::random_range(0.9..0.999);
        let m = random_mean_anomaly();
        let solution = solve_eccentric_anomaly(e, m);

        assert!(solution.iterations <= NUMERIC_MAX_ITERS);
        assert!(solution.degrees.is_finite(), "e = {e}, M = {m}");
        assert!(solution.residual.is_finite(), "e = {e}, M = {m}");
    }
}

#[test]
fn solver_reports_its_residual() {
    let solution = solve_eccentric_anomaly(0.2, 100.0);

    assert_almost_eq(
        solution.residual,
        -kepler_residual(0.2, 100.0, solution.degrees),
        "reported residual",
    );
}

#[test]
fn secular_element_propagation() {
    let element = SecularElement::new(282.9404, 4.70935e-5);

    assert_eq!(element.at_day(0.0), 282.9404);
    assert_almost_eq(element.at_day(10_000.0), 283.411335, "after 10000 days");
    assert_eq!(SecularElement::constant(5.0).at_day(1e9), 5.0);
}

#[test]
fn propagated_mean_anomaly_is_reduced() {
    for _ in 0..RANDOM_TRIALS {
        let elements = random_elliptic();
        let day = random_day();
        let propagated = elements.at_day(day);

        assert!((0.0..360.0).contains(&propagated.mean_anomaly));
        assert_eq!(propagated.day, day);
        assert_eq!(
            propagated.long_asc_node,
            elements.long_asc_node.at_day(day)
        );
    }
}

#[test]
fn circular_orbit_radius_is_semi_major_axis() {
    for _ in 0..RANDOM_TRIALS {
        let elements = random_circular();
        let day = random_day();
        let propagated = elements.at_day(day);
        let state = PerifocalState::from_elements(&propagated);

        assert_eq!(state.radius, propagated.semi_major_axis);
        assert_eq!(
            planet_ecliptic_coordinates(&elements, day).au,
            propagated.semi_major_axis
        );
        assert_angle_close(
            state.true_anomaly,
            state.mean_anomaly,
            1e-9,
            "true anomaly of circular orbit",
        );
    }
}

#[test]
fn circular_true_anomaly_is_mean_anomaly() {
    for _ in 0..RANDOM_TRIALS {
        let elements = random_circular();
        let day = random_day();

        assert_angle_close(
            elements.get_true_anomaly_at_day(day),
            elements.get_mean_anomaly_at_day(day),
            1e-6,
            "true vs mean anomaly of a circular orbit",
        );
    }
}

#[test]
fn eccentric_anomaly_at_day_uses_solver() {
    for elements in ALL_PRESETS {
        for day in [-1e4, 0.0, 7865.0, 3e4] {
            let propagated = elements.at_day(day);

            assert_eq!(
                elements.get_eccentric_anomaly_at_day(day),
                solve_eccentric_anomaly(propagated.eccentricity, propagated.mean_anomaly),
                "{} on day {day}",
                elements.name
            );
        }
    }
}

#[test]
fn perifocal_radius_matches_position() {
    for _ in 0..RANDOM_TRIALS {
        let elements = random_elliptic();
        let state = PerifocalState::from_elements(&elements.at_day(random_day()));

        assert_close(
            state.radius,
            state.position.length(),
            1e-9 * state.radius.max(1.0),
            "perifocal radius",
        );
    }
}

#[test]
fn projection_preserves_radius() {
    for _ in 0..RANDOM_TRIALS {
        let elements = random_elliptic();
        let coords = planet_ecliptic_coordinates(&elements, random_day());

        assert_close(
            coords.distance(),
            coords.au,
            1e-9 * coords.au.max(1.0),
            "ecliptic distance vs orbital radius",
        );
    }
}

#[test]
fn projection_latitude_bounded_by_inclination() {
    for elements in ALL_PRESETS {
        for coords in poll_days(&elements, -5000.0, 400) {
            let inclination = elements.inclination.at_day(coords.day);

            assert!(
                coords.latitude().abs() <= inclination + 1e-9,
                "{} latitude {} exceeds inclination {inclination} on day {}",
                elements.name,
                coords.latitude(),
                coords.day
            );
        }
    }
}

#[test]
fn uninclined_orbit_stays_in_ecliptic() {
    let mut elements = random_elliptic();
    elements.inclination = SecularElement::constant(0.0);

    for coords in poll_days(&elements, 0.0, 100) {
        assert_eq!(coords.z(), 0.0);
    }
}

#[test]
fn sun_shapes_agree() {
    for _ in 0..RANDOM_TRIALS {
        let day = random_day();
        let special = sun_ecliptic_coordinates(day);
        let general = planet_ecliptic_coordinates(&THE_SUN, day);

        assert_eq!(special.au, general.au);
        assert_eq!(special.day, general.day);
        assert_almost_eq_vec3(special.position, general.position, "Sun position");
    }
}

#[test]
fn sun_at_epoch() {
    let sun = sun_ecliptic_coordinates(0.0);
    let state = PerifocalState::from_elements(&THE_SUN.at_day(0.0));

    assert_close(sun.au, 0.9833, 5e-4, "Sun distance at epoch");
    assert_eq!(sun.day, 0.0);
    assert_eq!(sun.z(), 0.0);

    // Position angle is the true anomaly measured from perihelion
    assert_angle_close(
        sun.longitude(),
        state.true_anomaly + THE_SUN.arg_pe.epoch,
        1e-9,
        "Sun longitude vs v + w",
    );
    // ...which stays within the equation of center of the mean longitude
    assert_angle_close(
        sun.longitude(),
        THE_SUN.arg_pe.epoch + THE_SUN.mean_anomaly.epoch,
        2.0,
        "Sun longitude vs mean longitude",
    );
}

#[test]
fn sun_in_mid_july() {
    // Day 7865 is 2021 Jul 13 0h UT
    let sun = sun_ecliptic_coordinates(7865.0);

    assert_close(sun.longitude(), 110.85, 0.2, "Sun longitude on 2021 Jul 13");
    assert_close(sun.au, 1.0166, 1e-3, "Sun distance on 2021 Jul 13");
}

#[test]
fn sun_year() {
    const DAYS: usize = 365;

    let mean_anomalies = poll_mean_anomalies(&THE_SUN, 0.0, DAYS);

    let mut wraps = 0;
    for pair in mean_anomalies.windows(2) {
        let step = pair[1] - pair[0];
        if step < 0.0 {
            wraps += 1;
            assert_almost_eq(step + 360.0, THE_SUN.mean_anomaly.rate, "wrapped step");
        } else {
            assert_almost_eq(step, THE_SUN.mean_anomaly.rate, "mean anomaly step");
        }
    }
    assert_eq!(wraps, 1, "mean anomaly should wrap once a year");

    let radii: Vec<f64> = (0..DAYS)
        .map(|day| sun_ecliptic_coordinates(day as f64).au)
        .collect();

    let periapsis = THE_SUN.get_periapsis_at_day(0.0);
    let apoapsis = THE_SUN.get_apoapsis_at_day(0.0);

    for &r in &radii {
        assert!(
            r >= periapsis - 1e-6 && r <= apoapsis + 1e-6,
            "Sun distance {r} outside [{periapsis}, {apoapsis}]"
        );
    }

    let min = radii.iter().copied().fold(f64::INFINITY, f64::min);
    let max = radii.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    assert_close(min, 0.98329, 1e-4, "Sun perihelion distance");
    assert_close(max, 1.01671, 1e-4, "Sun aphelion distance");
    assert_eq!(count_local_minima(&radii), 1);
    assert_eq!(count_local_maxima(&radii), 1);
}

#[test]
fn moon_at_epoch() {
    let a = THE_MOON.semi_major_axis.epoch;
    assert_close(a, 60.2666 / EARTH_RADII_PER_ASTRONOMICAL_UNIT, 1e-15, "Moon a");
    assert_close(a * 1e3, 2.5695, 1e-3, "Moon a, in thousandths of an AU");

    let moon = Body::Moon.ecliptic_coordinates_at(0.0);

    assert!(moon.au >= THE_MOON.get_periapsis_at_day(0.0));
    assert!(moon.au <= THE_MOON.get_apoapsis_at_day(0.0));
    assert_close(moon.au * 1e3, 2.569, 0.15, "Moon distance at epoch");
}

#[test]
fn moon_distance_independent_of_render_scale() {
    let mut config = SimulationConfig {
        start_day: 0.0,
        ..Default::default()
    };
    let first = Simulation::new(config.clone()).unwrap().snapshot();

    config.moon_scale_factor = 1.0;
    config.scale_factor = 1.0;
    let second = Simulation::new(config).unwrap().snapshot();

    assert_eq!(first.moon, second.moon);
}

#[test]
fn planets_stay_within_apsides() {
    for body in Body::PLANETS {
        let elements = body.elements();

        for coords in poll_days(elements, 0.0, 2000) {
            assert!(
                coords.au >= elements.get_periapsis_at_day(coords.day) - 1e-9
                    && coords.au <= elements.get_apoapsis_at_day(coords.day) + 1e-9,
                "{body} at {} AU on day {}",
                coords.au,
                coords.day
            );
        }
    }
}

#[test]
fn orbital_periods() {
    assert_close(THE_SUN.get_orbital_period(), 365.2596, 1e-3, "anomalistic year");
    assert_close(MARS.get_orbital_period(), 686.98, 1e-1, "Mars year");
    assert_close(THE_MOON.get_orbital_period(), 27.5546, 1e-3, "anomalistic month");
}

#[test]
fn extreme_days_stay_finite() {
    for day in [-1e7, -365.25e3, 1e-9, 365.25e3, 1e7] {
        for elements in ALL_PRESETS {
            let coords = planet_ecliptic_coordinates(&elements, day);
            assert!(
                coords.position.is_finite() && coords.au.is_finite(),
                "{} on day {day}: {coords:?}",
                elements.name
            );
        }
    }
}

#[test]
fn compositor_is_additive() {
    for _ in 0..RANDOM_TRIALS {
        let day = random_day();
        let planet_only = planet_ecliptic_coordinates(&random_elliptic(), day);
        let sun = sun_ecliptic_coordinates(day);

        let mut composite = planet_only;
        add_cartesian_coordinates(&mut composite, &sun);

        assert_eq!(composite.x(), planet_only.x() + sun.x());
        assert_eq!(composite.y(), planet_only.y() + sun.y());
        assert_eq!(composite.au, planet_only.au);
        assert_eq!(composite.day, planet_only.day);

        let mut via_operator = planet_only;
        via_operator += &sun;
        assert_eq!(via_operator, composite);
    }
}

#[test]
fn compositor_keeps_own_radius_and_day() {
    let mut planet = EclipticCoordinates::new(DVec3::new(1.0, -2.0, 0.25), 2.2, 12.0);
    let sun = EclipticCoordinates::new(DVec3::new(0.5, 0.5, 0.0), 1.0, 99.0);

    planet += sun;

    assert_eq!(planet.position, DVec3::new(1.5, -1.5, 0.25));
    assert_eq!(planet.au, 2.2);
    assert_eq!(planet.day, 12.0);
}

#[test]
fn coordinate_angles() {
    let coords = EclipticCoordinates::new(DVec3::new(0.0, -1.0, 1.0), 1.0, 0.0);

    assert_almost_eq(coords.longitude(), 270.0, "longitude");
    assert_almost_eq(coords.latitude(), 45.0, "latitude");
    assert_almost_eq(coords.distance(), 2.0_f64.sqrt(), "distance");
}

#[test]
fn body_registry() {
    assert_eq!(Body::ALL.len(), 9);

    for (body, preset) in Body::ALL.into_iter().zip(ALL_PRESETS) {
        assert_eq!(*body.elements(), preset);
        assert_eq!(body.name(), preset.name);
        assert_eq!(body.to_string(), preset.name);
        assert_eq!(body.name().parse::<Body>(), Ok(body));
        assert_eq!(body.name().to_uppercase().parse::<Body>(), Ok(body));
    }

    assert!(!Body::Sun.is_planet());
    assert!(!Body::Moon.is_planet());
    assert!(Body::PLANETS.iter().all(|body| body.is_planet()));

    let err = "Pluto".parse::<Body>().unwrap_err();
    assert_eq!(err.name, "Pluto");
    assert_eq!(
        err.to_string(),
        "There is no body named 'Pluto' in the model."
    );
    let _: &dyn std::error::Error = &err;
}

#[test]
fn preset_eccentricities_in_solver_range() {
    for elements in ALL_PRESETS {
        for day in [-100_000.0, 0.0, 100_000.0] {
            let e = elements.eccentricity.at_day(day);
            assert!((0.0..=0.25).contains(&e), "{} e = {e}", elements.name);
        }
    }
}

#[test]
fn snapshot_composes_planets_with_sun() {
    let day = 7865.0;
    let snapshot = SkySnapshot::at_day(day);

    assert_eq!(snapshot.day, day);
    assert_eq!(snapshot.sun, sun_ecliptic_coordinates(day));
    assert_eq!(snapshot.moon, Body::Moon.ecliptic_coordinates_at(day));
    assert_eq!(snapshot.planets.len(), Body::PLANETS.len());

    for (body, coords) in &snapshot.planets {
        let heliocentric = body.ecliptic_coordinates_at(day);

        assert_eq!(coords.x(), heliocentric.x() + snapshot.sun.x());
        assert_eq!(coords.y(), heliocentric.y() + snapshot.sun.y());
        assert_eq!(coords.au, heliocentric.au);
        assert_eq!(snapshot.get(*body), Some(coords));
    }

    assert_eq!(snapshot.get(Body::Sun), Some(&snapshot.sun));
    assert_eq!(snapshot.get(Body::Moon), Some(&snapshot.moon));
}

#[test]
fn config_validation() {
    assert_eq!(SimulationConfig::default().validate(), Ok(()));

    let tests = [
        (
            SimulationConfig {
                start_day: f64::NAN,
                ..Default::default()
            },
            "start_day",
        ),
        (
            SimulationConfig {
                scale_factor: -1.0,
                ..Default::default()
            },
            "scale_factor",
        ),
        (
            SimulationConfig {
                moon_scale_factor: f64::INFINITY,
                ..Default::default()
            },
            "moon_scale_factor",
        ),
    ];

    for (config, field) in tests {
        match config.validate() {
            Err(ConfigError::NonFinite { field: f, .. })
            | Err(ConfigError::NonPositive { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected an error for {field}, got {other:?}"),
        }
    }

    let empty = SimulationConfig {
        width: 0,
        ..Default::default()
    };
    assert_eq!(
        empty.validate(),
        Err(ConfigError::EmptyViewport {
            width: 0,
            height: 480
        })
    );
    assert!(Simulation::new(empty).is_err());
}

#[test]
fn config_end_day() {
    let config = SimulationConfig::default();
    assert_eq!(config.end_day(), 7865.0 + 730.0);
}

#[test]
fn simulation_ticks() {
    let mut simulation = Simulation::new(SimulationConfig::default()).unwrap();
    assert_eq!(simulation.day(), 7865.0);

    simulation.tick();
    assert_eq!(simulation.day(), 7866.0);

    simulation.warp(364);
    assert_eq!(simulation.day(), 7865.0 + 365.0);
    assert_eq!(simulation.snapshot().day, simulation.day());
}

#[test]
fn simulation_run_renders_every_frame() {
    let config = SimulationConfig {
        frame_count: 30,
        ..Default::default()
    };
    let mut simulation = Simulation::new(config).unwrap();
    let mut canvas = RecordingCanvas::new();

    simulation.run(&mut canvas).unwrap();

    assert_eq!(canvas.frame_count(), 30);
    assert_eq!(simulation.frames_rendered(), 30);
    assert_eq!(simulation.day(), 7865.0 + 30.0);

    let frames = canvas.frames();
    assert_eq!(frames.len(), 30);

    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(
            frame[0],
            DrawCommand::BeginFrame {
                width: 768,
                height: 480
            }
        );
        assert_eq!(
            frame[frame.len() - 2],
            DrawCommand::Text(format!("Day {}", 7865 + i))
        );
    }
}

#[test]
fn fractional_day_step_does_not_drift() {
    let config = SimulationConfig {
        start_day: 0.0,
        day_step: 0.1,
        frame_count: 4,
        ..Default::default()
    };
    let mut simulation = Simulation::new(config.clone()).unwrap();
    let mut canvas = RecordingCanvas::new();

    simulation.run(&mut canvas).unwrap();

    let captions: Vec<_> = canvas
        .frames()
        .iter()
        .map(|frame| frame[frame.len() - 2].clone())
        .collect();
    assert_eq!(
        captions,
        ["Day 0", "Day 0.1", "Day 0.2", "Day 0.3"].map(|c| DrawCommand::Text(c.to_string()))
    );

    let mut ticked = Simulation::new(config.clone()).unwrap();
    for _ in 0..730 {
        ticked.tick();
    }
    assert_eq!(ticked.day(), 730.0 * 0.1);
    assert_close(ticked.day(), 73.0, 1e-12, "day after 730 ticks of 0.1");

    let mut warped = Simulation::new(config).unwrap();
    warped.warp(730);
    assert_eq!(warped.day(), ticked.day());
}

#[test]
fn day_captions() {
    let tests = [
        (7865.0, "Day 7865"),
        (0.0, "Day 0"),
        (0.30000000000000004, "Day 0.3"),
        (12.5, "Day 12.5"),
        (1.005e3, "Day 1005"),
        (-3.25, "Day -3.25"),
        (-0.001, "Day 0"),
    ];

    for (day, expected) in tests {
        assert_eq!(day_caption(day), expected, "caption for day {day}");
    }
}

#[test]
fn frame_layout() {
    let config = SimulationConfig::default();
    let renderer = FrameRenderer::new(&config);
    let snapshot = SkySnapshot::at_day(config.start_day);
    let mut canvas = RecordingCanvas::new();

    renderer.render(&mut canvas, &snapshot).unwrap();

    let sun = renderer.to_screen(&snapshot.sun, 48.0);
    let moon = renderer.to_screen(&snapshot.moon, 4800.0);

    let expected_start = [
        DrawCommand::BeginFrame {
            width: 768,
            height: 480,
        },
        DrawCommand::MoveTo { x: 384, y: 240 },
        DrawCommand::SetColor(Color::Blue),
        DrawCommand::FilledCircle(8),
        DrawCommand::SetColor(Color::Yellow),
        DrawCommand::Circle((snapshot.sun.au * 48.0) as u16),
        DrawCommand::MoveTo { x: sun.0, y: sun.1 },
        DrawCommand::FilledCircle(20),
        DrawCommand::MoveTo { x: 384, y: 240 },
        DrawCommand::SetColor(Color::White),
        DrawCommand::Circle((snapshot.moon.au * 4800.0) as u16),
        DrawCommand::MoveTo {
            x: moon.0,
            y: moon.1,
        },
        DrawCommand::FilledCircle(3),
    ];
    assert_eq!(canvas.commands[..expected_start.len()], expected_start);

    // five planets, five commands each, then the caption
    assert_eq!(
        canvas.commands.len(),
        expected_start.len() + 5 * 5 + 3 + 1
    );

    let saturn = snapshot.get(Body::Saturn).unwrap();
    let saturn_screen = renderer.to_screen(saturn, 48.0);
    assert!(canvas.commands.contains(&DrawCommand::SetColor(Color::Green)));
    assert!(canvas.commands.contains(&DrawCommand::MoveTo {
        x: saturn_screen.0,
        y: saturn_screen.1
    }));
    assert!(canvas
        .commands
        .contains(&DrawCommand::Circle((saturn.au * 48.0) as u16)));
}

#[test]
fn frame_labels() {
    let config = SimulationConfig {
        label_bodies: true,
        ..Default::default()
    };
    let renderer = FrameRenderer::new(&config);
    let mut canvas = RecordingCanvas::new();

    renderer
        .render(&mut canvas, &SkySnapshot::at_day(0.0))
        .unwrap();

    for name in ["Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn"] {
        assert!(
            canvas
                .commands
                .contains(&DrawCommand::Text(name.to_string())),
            "missing label for {name}"
        );
    }
    assert!(!canvas
        .commands
        .contains(&DrawCommand::Text("Uranus".to_string())));
}

#[test]
fn custom_planet_set() {
    let config = SimulationConfig {
        label_bodies: true,
        ..Default::default()
    };
    let planets = vec![
        BodyStyle {
            body: Body::Mars,
            color: Color::Red,
            size: 6,
        },
        BodyStyle {
            body: Body::Uranus,
            color: Color::Magenta,
            size: 10,
        },
    ];
    let renderer = FrameRenderer::with_planets(&config, planets.clone());
    assert_eq!(renderer.planets(), &planets[..]);

    let mut canvas = RecordingCanvas::new();
    renderer
        .render(&mut canvas, &SkySnapshot::at_day(0.0))
        .unwrap();

    let texts: Vec<_> = canvas
        .commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, ["Sun", "Moon", "Mars", "Uranus", "Day 0"]);
    assert!(canvas.commands.contains(&DrawCommand::SetColor(Color::Magenta)));
    assert!(!canvas.commands.contains(&DrawCommand::SetColor(Color::Cyan)));
}

#[test]
fn screen_mapping_truncates_towards_zero() {
    let renderer = FrameRenderer::new(&SimulationConfig::default());

    let ahead = EclipticCoordinates::new(DVec3::new(0.99, -0.99, 0.5), 1.0, 0.0);
    assert_eq!(renderer.to_screen(&ahead, 48.0), (384 + 47, 240 - 47));
    assert_eq!(FrameRenderer::orbit_radius(0.99, 48.0), 47);
    assert_eq!(FrameRenderer::orbit_radius(1e9, 48.0), u16::MAX);
}

#[test]
fn recording_canvas_rejects_commands_outside_frames() {
    let mut canvas = RecordingCanvas::new();

    assert!(matches!(
        canvas.move_to(1, 2),
        Err(RenderError::FrameState { .. })
    ));

    canvas.begin_frame(10, 10).unwrap();
    assert!(canvas.begin_frame(10, 10).is_err());
    canvas.end_frame().unwrap();
    assert!(canvas.end_frame().is_err());
}

#[test]
fn regis_frame_output() {
    let mut canvas = ReGisCanvas::new(Vec::new());

    canvas.begin_frame(768, 480).unwrap();
    canvas.move_to(384, 240).unwrap();
    canvas.set_color(Color::Blue).unwrap();
    canvas.filled_circle(8).unwrap();
    canvas.set_color(Color::Yellow).unwrap();
    canvas.circle(47).unwrap();
    canvas.move_to(-3, 500).unwrap();
    canvas.text("Day 7865").unwrap();

    // Nothing is written until the frame ends
    assert!(canvas.get_ref().is_empty());

    canvas.end_frame().unwrap();

    let output = String::from_utf8(canvas.into_inner()).unwrap();
    assert_eq!(
        output,
        "\x1bPpS(A[0,0][767,479])S(E)\
        P[384,240]W(I(B))F(C[+8])W(I(Y))C[+47]P[-3,500]T'Day 7865'\
        \x1b\\"
    );
}

#[test]
fn regis_quotes_text() {
    let mut canvas = ReGisCanvas::new(Vec::new());

    canvas.begin_frame(2, 2).unwrap();
    canvas.text("it's").unwrap();
    canvas.end_frame().unwrap();

    let output = String::from_utf8(canvas.into_inner()).unwrap();
    assert!(output.contains("T'it''s'"), "{output:?}");
}

#[test]
fn regis_rejects_commands_outside_frames() {
    let mut canvas = ReGisCanvas::new(Vec::new());

    assert!(matches!(
        canvas.circle(3),
        Err(RenderError::FrameState { .. })
    ));
    assert!(canvas.end_frame().is_err());
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "display unplugged"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_is_fatal() {
    let config = SimulationConfig {
        frame_count: 10,
        ..Default::default()
    };
    let mut simulation = Simulation::new(config).unwrap();
    let mut canvas = ReGisCanvas::new(BrokenSink);

    let err = simulation.run(&mut canvas).unwrap_err();

    assert!(matches!(err, RenderError::Sink { .. }), "{err:?}");
    assert_eq!(simulation.frames_rendered(), 0);
    assert_eq!(simulation.day(), 7865.0);
}
