use glam::{DVec2, DVec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    body_presets::THE_SUN, deg, rad, solve_eccentric_anomaly, EccentricAnomaly,
    EclipticCoordinates, OrbitalElements, PropagatedElements,
};

/// The state of a body within its own orbital plane.
///
/// The perifocal frame has its x axis pointing at perihelion and its
/// y axis 90 degrees further along the direction of motion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerifocalState {
    /// The mean anomaly, in degrees within `[0, 360)`.
    pub mean_anomaly: f64,

    /// The eccentric anomaly and how it was solved for.
    pub eccentric_anomaly: EccentricAnomaly,

    /// The true anomaly, in degrees within `(-180, 180]`.
    pub true_anomaly: f64,

    /// The distance from the focus, in AU.
    pub radius: f64,

    /// The position in the perifocal frame, in AU.
    pub position: DVec2,
}

impl PerifocalState {
    /// Solves for the position of a body within its orbital plane,
    /// given its elements propagated to some day.
    pub fn from_elements(elements: &PropagatedElements) -> Self {
        let a = elements.semi_major_axis;
        let e = elements.eccentricity;

        let eccentric_anomaly = solve_eccentric_anomaly(e, elements.mean_anomaly);

        if !eccentric_anomaly.converged {
            tracing::warn!(
                mean_anomaly = elements.mean_anomaly,
                eccentricity = e,
                residual = eccentric_anomaly.residual,
                "eccentric anomaly did not converge, using best estimate"
            );
        }

        let (sin_e, cos_e) = rad(eccentric_anomaly.degrees).sin_cos();

        let position = DVec2::new(a * (cos_e - e), a * ((1.0 - e * e).sqrt() * sin_e));

        Self {
            mean_anomaly: elements.mean_anomaly,
            eccentric_anomaly,
            true_anomaly: deg(position.y.atan2(position.x)),
            // same as the length of `position`, but exact for circular orbits
            radius: a * (1.0 - e * cos_e),
            position,
        }
    }
}

/// Gets the position of the Sun relative to the Earth on a given day.
///
/// The Sun's apparent orbit lies in the ecliptic by definition, so its
/// inclination and ascending node are both zero, and turning the
/// perifocal position into ecliptic coordinates is a single rotation by
/// the argument of perihelion.
///
/// # Example
/// ```
/// use planet_motion::sun_ecliptic_coordinates;
///
/// let sun = sun_ecliptic_coordinates(0.0);
///
/// assert_eq!(sun.day, 0.0);
/// assert_eq!(sun.position.z, 0.0);
/// assert!((sun.au - 0.9833).abs() < 1e-3);
/// ```
pub fn sun_ecliptic_coordinates(day: f64) -> EclipticCoordinates {
    let elements = THE_SUN.at_day(day);
    let state = PerifocalState::from_elements(&elements);

    let (sin_lon, cos_lon) = rad(state.true_anomaly + elements.arg_pe).sin_cos();

    EclipticCoordinates {
        position: DVec3::new(state.radius * cos_lon, state.radius * sin_lon, 0.0),
        au: state.radius,
        day,
    }
}

/// Gets the position of a body relative to the focus of its orbit on a
/// given day.
///
/// For the planets, that focus is the Sun; for the Moon, it's the Earth.
/// The perifocal position is rotated by the argument of perihelion, tilted
/// by the inclination and then rotated by the longitude of the ascending
/// node.
///
/// # Example
/// ```
/// use planet_motion::{body_presets::MARS, planet_ecliptic_coordinates};
///
/// let mars = planet_ecliptic_coordinates(&MARS, 100.0);
///
/// assert!(mars.au > 1.38 && mars.au < 1.67);
/// ```
pub fn planet_ecliptic_coordinates(planet: &OrbitalElements, day: f64) -> EclipticCoordinates {
    let elements = planet.at_day(day);
    let state = PerifocalState::from_elements(&elements);

    let (sin_n, cos_n) = rad(elements.long_asc_node).sin_cos();
    let (sin_vw, cos_vw) = rad(state.true_anomaly + elements.arg_pe).sin_cos();
    let (sin_i, cos_i) = rad(elements.inclination).sin_cos();
    let r = state.radius;

    EclipticCoordinates {
        position: DVec3::new(
            r * (cos_n * cos_vw - sin_n * sin_vw * cos_i),
            r * (sin_n * cos_vw + cos_n * sin_vw * cos_i),
            r * (sin_vw * sin_i),
        ),
        au: r,
        day,
    }
}
