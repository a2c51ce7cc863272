//! This module contains presets for the planets.
//!
//! Each planet's elements describe its heliocentric orbit. The Earth is
//! absent since its orbit is the mirror image of [the Sun's][super::THE_SUN].

use crate::{OrbitalElements, SecularElement};

/// Mercury, the innermost planet.
pub const MERCURY: OrbitalElements = OrbitalElements {
    name: "Mercury",
    long_asc_node: SecularElement::new(48.3313, 3.24587e-5),
    inclination: SecularElement::new(7.0047, 5.0e-8),
    arg_pe: SecularElement::new(29.1241, 1.01444e-5),
    semi_major_axis: SecularElement::constant(0.387098),
    eccentricity: SecularElement::new(0.205635, 5.59e-10),
    mean_anomaly: SecularElement::new(168.6562, 4.0923344368),
    radius: 2440.0 / 6378.0,
};

/// Venus.
pub const VENUS: OrbitalElements = OrbitalElements {
    name: "Venus",
    long_asc_node: SecularElement::new(76.6799, 2.46590e-5),
    inclination: SecularElement::new(3.3946, 2.75e-8),
    arg_pe: SecularElement::new(54.8910, 1.38374e-5),
    semi_major_axis: SecularElement::constant(0.723330),
    eccentricity: SecularElement::new(0.006773, -1.302e-9),
    mean_anomaly: SecularElement::new(48.0052, 1.6021302244),
    radius: 6052.0 / 6378.0,
};

/// Mars.
pub const MARS: OrbitalElements = OrbitalElements {
    name: "Mars",
    long_asc_node: SecularElement::new(49.5574, 2.11081e-5),
    inclination: SecularElement::new(1.8497, -1.78e-8),
    arg_pe: SecularElement::new(286.5016, 2.92961e-5),
    semi_major_axis: SecularElement::constant(1.523688),
    eccentricity: SecularElement::new(0.093405, 2.516e-9),
    mean_anomaly: SecularElement::new(18.6021, 0.5240207766),
    radius: 3390.0 / 6378.0,
};

/// Jupiter, the largest planet.
pub const JUPITER: OrbitalElements = OrbitalElements {
    name: "Jupiter",
    long_asc_node: SecularElement::new(100.4542, 2.76854e-5),
    inclination: SecularElement::new(1.3030, -1.557e-7),
    arg_pe: SecularElement::new(273.8777, 1.64505e-5),
    semi_major_axis: SecularElement::constant(5.20256),
    eccentricity: SecularElement::new(0.048498, 4.469e-9),
    mean_anomaly: SecularElement::new(19.8950, 0.0830853001),
    radius: 69911.0 / 6378.0,
};

/// Saturn.
pub const SATURN: OrbitalElements = OrbitalElements {
    name: "Saturn",
    long_asc_node: SecularElement::new(113.6634, 2.3898e-5),
    inclination: SecularElement::new(2.4886, -1.081e-7),
    arg_pe: SecularElement::new(339.3939, 2.97661e-5),
    semi_major_axis: SecularElement::constant(9.55475),
    eccentricity: SecularElement::new(0.055546, -9.499e-9),
    mean_anomaly: SecularElement::new(316.9670, 0.0334442282),
    radius: 58232.0 / 6378.0,
};

/// Uranus.
pub const URANUS: OrbitalElements = OrbitalElements {
    name: "Uranus",
    long_asc_node: SecularElement::new(74.0005, 1.3978e-5),
    inclination: SecularElement::new(0.7733, 1.9e-8),
    arg_pe: SecularElement::new(96.6612, 3.0565e-5),
    semi_major_axis: SecularElement::new(19.18171, -1.55e-8),
    eccentricity: SecularElement::new(0.047318, 7.45e-9),
    mean_anomaly: SecularElement::new(142.5905, 0.011725806),
    radius: 25362.0 / 6378.0,
};

/// Neptune, the outermost planet.
pub const NEPTUNE: OrbitalElements = OrbitalElements {
    name: "Neptune",
    long_asc_node: SecularElement::new(131.7806, 3.0173e-5),
    inclination: SecularElement::new(1.7700, -2.55e-7),
    arg_pe: SecularElement::new(272.8461, -6.027e-6),
    semi_major_axis: SecularElement::new(30.05826, 3.313e-8),
    eccentricity: SecularElement::new(0.008606, 2.15e-9),
    mean_anomaly: SecularElement::new(260.2471, 0.005995147),
    radius: 24622.0 / 6378.0,
};
