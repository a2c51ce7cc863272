#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The parameters of a simulation run.
///
/// The defaults render two years of daily frames starting from day
/// 7865 (2021 Jul 13) on a 768x480 display.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// The first simulated day, counted from the elements' epoch.
    pub start_day: f64,

    /// How many frames to render.
    pub frame_count: u32,

    /// How many days pass between two frames.
    pub day_step: f64,

    /// How many pixels one astronomical unit spans.
    pub scale_factor: f64,

    /// How many pixels one astronomical unit spans when drawing the Moon.
    ///
    /// The Moon's orbit is tiny next to the planets', so it gets
    /// its own, much larger, scale.
    pub moon_scale_factor: f64,

    /// The width of the display, in pixels.
    pub width: u16,

    /// The height of the display, in pixels.
    pub height: u16,

    /// Whether to write each body's name next to it.
    pub label_bodies: bool,
}

impl SimulationConfig {
    /// The default first day.
    pub const DEFAULT_START_DAY: f64 = 7865.0;

    /// The default number of frames; two years of days, rounded up.
    pub const DEFAULT_FRAME_COUNT: u32 = 731;

    /// Checks that every parameter is usable.
    ///
    /// # Example
    /// ```
    /// use planet_motion::{ConfigError, SimulationConfig};
    ///
    /// assert_eq!(SimulationConfig::default().validate(), Ok(()));
    ///
    /// let config = SimulationConfig {
    ///     day_step: 0.0,
    ///     ..Default::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(ConfigError::NonPositive { field: "day_step", value: 0.0 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_day.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "start_day",
                value: self.start_day,
            });
        }

        let positive = [
            ("day_step", self.day_step),
            ("scale_factor", self.scale_factor),
            ("moon_scale_factor", self.moon_scale_factor),
        ];

        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }

    /// The last day that will be rendered.
    pub fn end_day(&self) -> f64 {
        self.start_day + self.day_step * f64::from(self.frame_count.saturating_sub(1))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_day: Self::DEFAULT_START_DAY,
            frame_count: Self::DEFAULT_FRAME_COUNT,
            day_step: 1.0,
            scale_factor: 48.0,
            moon_scale_factor: 4800.0,
            width: 768,
            height: 480,
            label_bodies: false,
        }
    }
}
