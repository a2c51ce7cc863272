//! # Planet Motion
//! This library crate computes approximate positions of the Sun, the Moon and
//! the planets from simplified Keplerian orbital elements, and renders them as
//! a sequence of vector-graphics frames.
//!
//! Every body is described by six orbital elements, each with a secular rate
//! of change per day. To get a position for a given day, the elements are
//! propagated to that day, Kepler's equation is solved for the eccentric
//! anomaly, and the resulting point in the orbital plane is rotated into
//! ecliptic coordinates.
//!
//! This is not a precise ephemeris. There is no perturbation theory and no
//! relativistic correction, so expect errors of a fraction of a degree for
//! the inner planets and more for the outer ones.
//!
//! ## Getting started
//! This crate provides a handful of main items:
//! - [`OrbitalElements`]: The orbital elements of a body, along with their
//!   rates of change per day.
//! - [`Body`]: An identifier for one of the modelled bodies. Each one maps
//!   onto a constant [`OrbitalElements`] record from [`body_presets`].
//! - [`EclipticCoordinates`]: A position in the ecliptic plane, along with
//!   the orbital radius and the day it was computed for.
//! - [`Simulation`]: The day-by-day driver which computes a [`SkySnapshot`]
//!   for each frame and hands it to a [`render::FrameRenderer`].
//!
//! ## Example
//!
//! ```rust
//! use planet_motion::{sun_ecliptic_coordinates, Body};
//!
//! # fn main() {
//! let sun = sun_ecliptic_coordinates(0.0);
//! assert!((sun.au - 0.9833).abs() < 1e-3);
//!
//! let mut mars = Body::Mars.ecliptic_coordinates_at(0.0);
//! mars += &sun;
//! println!("Mars is {} AU away from Earth", mars.distance());
//! # }
//! ```

#![warn(missing_docs)]

mod body;
pub mod body_presets;
mod config;
mod coordinates;
mod elements;
mod error;
mod projector;
pub mod render;
mod simulation;
mod solvers;

use std::f64::consts::PI;

pub use body::{Body, UnknownBodyError};
pub use config::SimulationConfig;
pub use coordinates::{add_cartesian_coordinates, EclipticCoordinates};
pub use elements::{OrbitalElements, PropagatedElements, SecularElement};
pub use error::{ConfigError, RenderError};
pub use projector::{planet_ecliptic_coordinates, sun_ecliptic_coordinates, PerifocalState};
pub use simulation::{Simulation, SkySnapshot};
pub use solvers::{get_eccentric_anomaly, solve_eccentric_anomaly, EccentricAnomaly};

/// The length of one astronomical unit, in meters.
pub const METERS_PER_ASTRONOMICAL_UNIT: f64 = 1.4959787e11;

/// The equatorial radius of the Earth, in meters.
pub const METERS_PER_EARTH_EQUATORIAL_RADIUS: f64 = 6378160.0;

/// How many Earth equatorial radii fit in one astronomical unit.
///
/// The Moon's mean distance is tabulated in Earth radii, and this is
/// used to convert it into astronomical units.
pub const EARTH_RADII_PER_ASTRONOMICAL_UNIT: f64 =
    METERS_PER_ASTRONOMICAL_UNIT / METERS_PER_EARTH_EQUATORIAL_RADIUS;

/// The tolerance, in degrees, on the Kepler's equation residual.
///
/// The eccentric anomaly solver stops iterating once the mean anomaly
/// it reproduces is within this many degrees of the one it was given.
pub const ECCENTRIC_ANOMALY_TOLERANCE: f64 = 1e-5;

/// The maximum number of iterations for the eccentric anomaly solver.
///
/// This is used to guarantee termination. If the solver hasn't reached
/// [`ECCENTRIC_ANOMALY_TOLERANCE`] by then, the best estimate is returned.
pub const NUMERIC_MAX_ITERS: u32 = 10;

/// Degrees in a radian.
const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// Reduces an angle in degrees into the range `[0, 360)`.
///
/// Works for any finite input, including negative angles and angles
/// that span many revolutions.
///
/// # Example
/// ```
/// use planet_motion::rev;
///
/// assert_eq!(rev(370.0), 10.0);
/// assert_eq!(rev(-90.0), 270.0);
/// assert_eq!(rev(720.0), 0.0);
/// ```
pub fn rev(x: f64) -> f64 {
    let reduced = x - 360.0 * (x / 360.0).floor();

    // Tiny negative inputs can round up to exactly 360
    if reduced >= 360.0 {
        reduced - 360.0
    } else {
        reduced
    }
}

/// Converts an angle in degrees into radians.
#[inline]
pub fn rad(degrees: f64) -> f64 {
    degrees / DEGREES_PER_RADIAN
}

/// Converts an angle in radians into degrees.
#[inline]
pub fn deg(radians: f64) -> f64 {
    radians * DEGREES_PER_RADIAN
}

/// Kepler's equation, solved for zero, with every angle in degrees.
///
/// `E - (180/pi) e sin(E) - M`
#[inline]
fn keplers_equation(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - deg(eccentricity * rad(eccentric_anomaly).sin()) - mean_anomaly
}

/// The derivative of [`keplers_equation`] with respect to the
/// eccentric anomaly, dimensionless.
#[inline]
fn keplers_equation_derivative(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    1.0 - eccentricity * rad(eccentric_anomaly).cos()
}

#[cfg(test)]
mod tests;
