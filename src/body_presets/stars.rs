//! This module contains presets for stars.
//!
//! "A star is a luminous spheroid of plasma held together by self-gravity."  
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Star)

use crate::{OrbitalElements, SecularElement};

/// The Sun, as seen orbiting the Earth.
///
/// Its orbit lies in the ecliptic, so the inclination and the longitude
/// of the ascending node are both zero. The semi-major axis is exactly
/// one astronomical unit.
pub const THE_SUN: OrbitalElements = OrbitalElements {
    name: "Sun",
    long_asc_node: SecularElement::constant(0.0),
    inclination: SecularElement::constant(0.0),
    arg_pe: SecularElement::new(282.9404, 4.70935e-5),
    semi_major_axis: SecularElement::constant(1.0),
    eccentricity: SecularElement::new(0.016709, -1.151e-9),
    mean_anomaly: SecularElement::new(356.0470, 0.9856002585),
    radius: 695500.0 / 6378.0,
};
