//! This module contains presets for natural satellites.

use crate::{OrbitalElements, SecularElement, EARTH_RADII_PER_ASTRONOMICAL_UNIT};

/// The Moon, orbiting the Earth.
///
/// Its mean distance is 60.2666 Earth radii, converted into astronomical
/// units, which is about 0.00257 AU.
pub const THE_MOON: OrbitalElements = OrbitalElements {
    name: "Moon",
    long_asc_node: SecularElement::new(125.1228, -0.0529538083),
    inclination: SecularElement::constant(5.1454),
    arg_pe: SecularElement::new(318.0634, 0.1643573223),
    semi_major_axis: SecularElement::constant(60.2666 / EARTH_RADII_PER_ASTRONOMICAL_UNIT),
    eccentricity: SecularElement::constant(0.054900),
    mean_anomaly: SecularElement::new(115.3654, 13.0649929509),
    radius: 1738.0 / 6378.0,
};
