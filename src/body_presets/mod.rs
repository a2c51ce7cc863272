//! This module contains the orbital elements of every body in the model.
//!
//! The elements are tabulated for an epoch of 2000 Jan 0.0 UT, with each
//! element drifting linearly by its rate per day. Days are counted from
//! that epoch, so day 0 is 1999 Dec 31 0h UT.
//!
//! The Sun's elements describe its apparent orbit around the Earth, and
//! the Moon's describe its orbit around the Earth. Every other body here
//! orbits the Sun.

mod moons;
mod planets;
mod stars;

pub use moons::THE_MOON;
pub use planets::{JUPITER, MARS, MERCURY, NEPTUNE, SATURN, URANUS, VENUS};
pub use stars::THE_SUN;
