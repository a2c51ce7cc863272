#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    deg, keplers_equation, keplers_equation_derivative, rad, ECCENTRIC_ANOMALY_TOLERANCE,
    NUMERIC_MAX_ITERS,
};

/// The outcome of solving Kepler's equation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EccentricAnomaly {
    /// The eccentric anomaly, in degrees.
    /// This is not reduced into `[0, 360)`.
    pub degrees: f64,

    /// The last Kepler's equation residual, in degrees.
    pub residual: f64,

    /// How many corrections were applied to the initial guess.
    pub iterations: u32,

    /// Whether the residual got within [`ECCENTRIC_ANOMALY_TOLERANCE`].
    ///
    /// When this is false, the solver gave up after [`NUMERIC_MAX_ITERS`]
    /// corrections and `degrees` holds its best estimate.
    pub converged: bool,
}

/// Solves Kepler's equation for the eccentric anomaly of an elliptic orbit.
///
/// Both anomalies are in degrees. The eccentricity is expected to be
/// within `[0, 1)`; the bodies in this crate all stay below 0.25.
///
/// Starting from `E = M + (180/pi) e sin(M)`, each iteration computes
/// the residual `dM = M - (E - (180/pi) e sin(E))` and corrects
/// `E += dM / (1 - e cos(E))`, until `|dM|` falls below
/// [`ECCENTRIC_ANOMALY_TOLERANCE`] or [`NUMERIC_MAX_ITERS`] corrections
/// have been made.
///
/// # Example
/// ```
/// use planet_motion::solve_eccentric_anomaly;
///
/// let solution = solve_eccentric_anomaly(0.0, 123.0);
///
/// assert!(solution.converged);
/// assert_eq!(solution.degrees, 123.0);
/// ```
pub fn solve_eccentric_anomaly(eccentricity: f64, mean_anomaly: f64) -> EccentricAnomaly {
    let mut eccentric_anomaly = mean_anomaly + deg(eccentricity * rad(mean_anomaly).sin());

    let mut iterations = 0;

    while iterations < NUMERIC_MAX_ITERS {
        let residual = -keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity);

        if residual.abs() < ECCENTRIC_ANOMALY_TOLERANCE {
            return EccentricAnomaly {
                degrees: eccentric_anomaly,
                residual,
                iterations,
                converged: true,
            };
        }

        let derivative = keplers_equation_derivative(eccentric_anomaly, eccentricity);

        if !derivative.is_finite() || derivative.abs() < 1e-30 {
            // dangerously close to div-by-zero, break out
            break;
        }

        eccentric_anomaly += residual / derivative;
        iterations += 1;
    }

    let residual = -keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity);

    EccentricAnomaly {
        degrees: eccentric_anomaly,
        residual,
        iterations,
        converged: residual.abs() < ECCENTRIC_ANOMALY_TOLERANCE,
    }
}

/// Gets the eccentric anomaly, in degrees, for a given eccentricity
/// and mean anomaly in degrees.
///
/// This is [`solve_eccentric_anomaly`] without the convergence details.
pub fn get_eccentric_anomaly(eccentricity: f64, mean_anomaly: f64) -> f64 {
    solve_eccentric_anomaly(eccentricity, mean_anomaly).degrees
}
