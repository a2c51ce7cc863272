#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    rev, solvers::solve_eccentric_anomaly, EccentricAnomaly, PerifocalState,
};

/// An orbital element that drifts linearly with time.
///
/// The value at a given day is `epoch + rate * day`, where the day is
/// counted from the epoch the elements were tabulated at.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SecularElement {
    /// The value of the element at the epoch (day zero).
    pub epoch: f64,

    /// The rate of change of the element, per day.
    pub rate: f64,
}

impl SecularElement {
    /// Creates a new secular element from its value at the epoch
    /// and its rate of change per day.
    pub const fn new(epoch: f64, rate: f64) -> Self {
        Self { epoch, rate }
    }

    /// Creates an element that doesn't change with time.
    pub const fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Gets the value of the element at a given day.
    ///
    /// # Example
    /// ```
    /// use planet_motion::SecularElement;
    ///
    /// let element = SecularElement::new(10.0, 0.5);
    ///
    /// assert_eq!(element.at_day(0.0), 10.0);
    /// assert_eq!(element.at_day(4.0), 12.0);
    /// assert_eq!(element.at_day(-4.0), 8.0);
    /// ```
    #[inline]
    pub fn at_day(&self, day: f64) -> f64 {
        self.epoch + self.rate * day
    }
}

/// A struct representing the orbital elements of a body.
///
/// Angles are in degrees, rates in degrees per day and distances in
/// astronomical units. The Sun's elements describe its apparent orbit
/// around the Earth; every planet's elements describe its orbit around
/// the Sun; the Moon's elements describe its orbit around the Earth.
///
/// See [`body_presets`][crate::body_presets] for the bodies in this model.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OrbitalElements {
    /// The name of the body, e.g. "Mars".
    pub name: &'static str,

    /// The longitude of the ascending node, in degrees.
    pub long_asc_node: SecularElement,

    /// The inclination to the ecliptic, in degrees.
    pub inclination: SecularElement,

    /// The argument of perihelion, in degrees.
    pub arg_pe: SecularElement,

    /// The semi-major axis, or mean distance, in astronomical units.
    pub semi_major_axis: SecularElement,

    /// The eccentricity.
    /// 0 is a circle, between 0 and 1 is an ellipse.
    pub eccentricity: SecularElement,

    /// The mean anomaly, in degrees.
    /// It is zero at perihelion and increases uniformly with time;
    /// its rate is the mean motion, or 360 divided by the period.
    pub mean_anomaly: SecularElement,

    /// The radius of the body, in Earth radii.
    pub radius: f64,
}

/// The orbital elements of a body, propagated to a given day.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropagatedElements {
    /// The day these elements are valid for.
    pub day: f64,
    /// The longitude of the ascending node, in degrees.
    pub long_asc_node: f64,
    /// The inclination to the ecliptic, in degrees.
    pub inclination: f64,
    /// The argument of perihelion, in degrees.
    pub arg_pe: f64,
    /// The semi-major axis, in astronomical units.
    pub semi_major_axis: f64,
    /// The eccentricity.
    pub eccentricity: f64,
    /// The mean anomaly, in degrees, reduced into `[0, 360)`.
    pub mean_anomaly: f64,
}

impl OrbitalElements {
    /// Propagates every element to a given day.
    ///
    /// The mean anomaly is reduced into `[0, 360)` with [`rev`]; the
    /// other angles are left as they come, since they only ever go
    /// through trigonometric functions.
    pub fn at_day(&self, day: f64) -> PropagatedElements {
        PropagatedElements {
            day,
            long_asc_node: self.long_asc_node.at_day(day),
            inclination: self.inclination.at_day(day),
            arg_pe: self.arg_pe.at_day(day),
            semi_major_axis: self.semi_major_axis.at_day(day),
            eccentricity: self.eccentricity.at_day(day),
            mean_anomaly: rev(self.mean_anomaly.at_day(day)),
        }
    }

    /// Gets the mean anomaly at a given day, in degrees within `[0, 360)`.
    pub fn get_mean_anomaly_at_day(&self, day: f64) -> f64 {
        rev(self.mean_anomaly.at_day(day))
    }

    /// Gets the eccentric anomaly at a given day, in degrees.
    ///
    /// # Performance
    /// This function uses numerical methods to approach the value.
    pub fn get_eccentric_anomaly_at_day(&self, day: f64) -> EccentricAnomaly {
        solve_eccentric_anomaly(
            self.eccentricity.at_day(day),
            self.get_mean_anomaly_at_day(day),
        )
    }

    /// Gets the true anomaly at a given day, in degrees.
    pub fn get_true_anomaly_at_day(&self, day: f64) -> f64 {
        PerifocalState::from_elements(&self.at_day(day)).true_anomaly
    }

    /// Gets the perihelion distance, `a(1 - e)`, at a given day.
    pub fn get_periapsis_at_day(&self, day: f64) -> f64 {
        self.semi_major_axis.at_day(day) * (1.0 - self.eccentricity.at_day(day))
    }

    /// Gets the aphelion distance, `a(1 + e)`, at a given day.
    pub fn get_apoapsis_at_day(&self, day: f64) -> f64 {
        self.semi_major_axis.at_day(day) * (1.0 + self.eccentricity.at_day(day))
    }

    /// Gets the orbital period, in days, from the mean motion.
    ///
    /// Returns infinity for a body whose mean anomaly never changes.
    pub fn get_orbital_period(&self) -> f64 {
        360.0 / self.mean_anomaly.rate
    }
}
