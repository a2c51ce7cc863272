use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    add_cartesian_coordinates,
    render::{FrameRenderer, VectorCanvas},
    sun_ecliptic_coordinates, Body, ConfigError, EclipticCoordinates, RenderError,
    SimulationConfig,
};

/// The positions of every body on one day, as seen from the Earth.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkySnapshot {
    /// The day the positions were computed for.
    pub day: f64,

    /// The Sun, relative to the Earth.
    pub sun: EclipticCoordinates,

    /// The Moon, relative to the Earth.
    pub moon: EclipticCoordinates,

    /// Every planet, relative to the Earth, innermost first.
    ///
    /// Each planet keeps its own heliocentric orbital radius in
    /// [`au`][EclipticCoordinates::au].
    pub planets: Vec<(Body, EclipticCoordinates)>,
}

impl SkySnapshot {
    /// Computes the positions of every body on a given day.
    pub fn at_day(day: f64) -> Self {
        let sun = sun_ecliptic_coordinates(day);
        let moon = Body::Moon.ecliptic_coordinates_at(day);

        let planets = Body::PLANETS
            .into_iter()
            .map(|body| {
                let mut coords = body.ecliptic_coordinates_at(day);
                add_cartesian_coordinates(&mut coords, &sun);
                (body, coords)
            })
            .collect();

        Self {
            day,
            sun,
            moon,
            planets,
        }
    }

    /// Gets the Earth-relative coordinates of a body.
    pub fn get(&self, body: Body) -> Option<&EclipticCoordinates> {
        match body {
            Body::Sun => Some(&self.sun),
            Body::Moon => Some(&self.moon),
            _ => self
                .planets
                .iter()
                .find(|(b, _)| *b == body)
                .map(|(_, coords)| coords),
        }
    }
}

/// Struct that drives the simulation, one day per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    config: SimulationConfig,

    /// Ticks taken since the start day.
    ticks: u32,

    /// How many frames have been rendered.
    frames_rendered: u32,
}

impl Simulation {
    /// Creates a simulation that starts at the configured day.
    pub fn new(config: SimulationConfig) -> Result<Simulation, ConfigError> {
        config.validate()?;

        Ok(Simulation {
            ticks: 0,
            frames_rendered: 0,
            config,
        })
    }

    /// Gets the configuration of this simulation.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Gets the current simulated day.
    ///
    /// Computed from the tick count, never accumulated.
    pub fn day(&self) -> f64 {
        self.config.start_day + f64::from(self.ticks) * self.config.day_step
    }

    /// Gets how many frames have been rendered so far.
    pub fn frames_rendered(&self) -> u32 {
        self.frames_rendered
    }

    /// Advances the simulation by a tick.
    pub fn tick(&mut self) {
        self.warp(1);
    }

    /// Advances the simulation by multiple ticks.
    pub fn warp(&mut self, ticks: u32) {
        self.ticks = self.ticks.saturating_add(ticks);
    }

    /// Computes where everything is on the current day.
    pub fn snapshot(&self) -> SkySnapshot {
        SkySnapshot::at_day(self.day())
    }

    /// Renders the configured number of frames, ticking after each one.
    ///
    /// The first error stops the run, and is returned.
    pub fn run(&mut self, canvas: &mut impl VectorCanvas) -> Result<(), RenderError> {
        let renderer = FrameRenderer::new(&self.config);

        tracing::info!(
            start_day = self.day(),
            frames = self.config.frame_count,
            end_day = self.config.end_day(),
            "starting simulation"
        );

        for _ in 0..self.config.frame_count {
            let snapshot = self.snapshot();

            tracing::debug!(
                day = snapshot.day,
                sun_au = snapshot.sun.au,
                sun_longitude = snapshot.sun.longitude(),
                "rendering frame"
            );

            renderer.render(canvas, &snapshot)?;
            self.frames_rendered += 1;
            self.tick();
        }

        tracing::info!(
            frames = self.frames_rendered,
            day = self.day(),
            "simulation finished"
        );

        Ok(())
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Simulation at day {}, {} of {} frames rendered",
            self.day(),
            self.frames_rendered,
            self.config.frame_count
        )
    }
}
