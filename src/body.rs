use core::{fmt, str::FromStr};

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    body_presets::{JUPITER, MARS, MERCURY, NEPTUNE, SATURN, THE_MOON, THE_SUN, URANUS, VENUS},
    planet_ecliptic_coordinates, sun_ecliptic_coordinates, EclipticCoordinates, OrbitalElements,
};

/// An identifier for a celestial body in the model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    /// The Sun, as seen from the Earth.
    Sun,
    /// The Moon, as seen from the Earth.
    Moon,
    #[allow(missing_docs)]
    Mercury,
    #[allow(missing_docs)]
    Venus,
    #[allow(missing_docs)]
    Mars,
    #[allow(missing_docs)]
    Jupiter,
    #[allow(missing_docs)]
    Saturn,
    #[allow(missing_docs)]
    Uranus,
    #[allow(missing_docs)]
    Neptune,
}

impl Body {
    /// Every body in the model, innermost orbit first.
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// The planets, i.e. every body that orbits the Sun.
    pub const PLANETS: [Body; 7] = [
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Gets the orbital elements of this body.
    pub const fn elements(self) -> &'static OrbitalElements {
        match self {
            Body::Sun => &THE_SUN,
            Body::Moon => &THE_MOON,
            Body::Mercury => &MERCURY,
            Body::Venus => &VENUS,
            Body::Mars => &MARS,
            Body::Jupiter => &JUPITER,
            Body::Saturn => &SATURN,
            Body::Uranus => &URANUS,
            Body::Neptune => &NEPTUNE,
        }
    }

    /// Gets the name of this body.
    pub const fn name(self) -> &'static str {
        self.elements().name
    }

    /// Whether this body orbits the Sun.
    pub const fn is_planet(self) -> bool {
        !matches!(self, Body::Sun | Body::Moon)
    }

    /// Gets this body's position relative to the focus of its orbit.
    ///
    /// For the Sun and the Moon, that is the Earth. For every planet,
    /// it's the Sun; add the Sun's coordinates to get the position
    /// relative to the Earth.
    pub fn ecliptic_coordinates_at(self, day: f64) -> EclipticCoordinates {
        match self {
            Body::Sun => sun_ecliptic_coordinates(day),
            _ => planet_ecliptic_coordinates(self.elements(), day),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when a body name isn't recognized.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("There is no body named '{name}' in the model.")]
pub struct UnknownBodyError {
    /// The name that didn't match any body.
    pub name: String,
}

impl FromStr for Body {
    type Err = UnknownBodyError;

    /// Parses a body from its name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownBodyError {
                name: s.to_string(),
            })
    }
}
