use core::ops::AddAssign;

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{deg, rev};

/// A position in ecliptic Cartesian coordinates.
///
/// The x axis points towards the vernal equinox, the y axis lies in the
/// ecliptic plane 90 degrees further along, and the z axis points to the
/// north ecliptic pole. All distances are in astronomical units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipticCoordinates {
    /// The position, in astronomical units.
    pub position: DVec3,

    /// The body's distance from the focus of its own orbit, in AU.
    ///
    /// This is the orbital radius of the body the coordinates were
    /// computed for, and is left alone when coordinates are combined.
    pub au: f64,

    /// The day these coordinates were computed for.
    pub day: f64,
}

impl EclipticCoordinates {
    /// Creates a new set of coordinates.
    pub fn new(position: DVec3, au: f64, day: f64) -> Self {
        Self { position, au, day }
    }

    /// The x coordinate, in AU.
    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// The y coordinate, in AU.
    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// The z coordinate, in AU.
    #[inline]
    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// The distance from the origin, in AU.
    ///
    /// For coordinates that haven't been combined with anything,
    /// this is the same as [`au`][Self::au].
    pub fn distance(&self) -> f64 {
        self.position.length()
    }

    /// The ecliptic longitude, in degrees within `[0, 360)`.
    pub fn longitude(&self) -> f64 {
        rev(deg(self.position.y.atan2(self.position.x)))
    }

    /// The ecliptic latitude, in degrees within `[-90, 90]`.
    pub fn latitude(&self) -> f64 {
        deg(self
            .position
            .z
            .atan2(self.position.x.hypot(self.position.y)))
    }
}

/// Moves `base` by the position in `addend`.
///
/// This is how a planet's position relative to the Sun is turned into a
/// position relative to the Earth: add the Sun's position relative to the
/// Earth. Only the position changes; `base` keeps its own orbital radius
/// and day.
///
/// # Example
/// ```
/// use glam::DVec3;
/// use planet_motion::{add_cartesian_coordinates, EclipticCoordinates};
///
/// let mut planet = EclipticCoordinates::new(DVec3::new(1.0, 2.0, 0.5), 2.3, 10.0);
/// let sun = EclipticCoordinates::new(DVec3::new(-0.5, 0.25, 0.0), 1.0, 10.0);
///
/// add_cartesian_coordinates(&mut planet, &sun);
///
/// assert_eq!(planet.position, DVec3::new(0.5, 2.25, 0.5));
/// assert_eq!(planet.au, 2.3);
/// ```
pub fn add_cartesian_coordinates(base: &mut EclipticCoordinates, addend: &EclipticCoordinates) {
    base.position += addend.position;
}

impl AddAssign<&EclipticCoordinates> for EclipticCoordinates {
    fn add_assign(&mut self, rhs: &EclipticCoordinates) {
        add_cartesian_coordinates(self, rhs);
    }
}

impl AddAssign for EclipticCoordinates {
    fn add_assign(&mut self, rhs: EclipticCoordinates) {
        add_cartesian_coordinates(self, &rhs);
    }
}
