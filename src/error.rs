use std::io;

use thiserror::Error;

/// An error from the rendering layer.
///
/// Any of these is fatal to a run: a frame that can't be emitted
/// means the output device is gone.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output sink refused a write or a flush.
    #[error("Failed to emit frame to output sink: {source}")]
    Sink {
        #[from]
        #[allow(missing_docs)]
        source: io::Error,
    },

    /// A draw command was issued outside of a frame, or a frame was
    /// begun twice.
    #[error("Invalid frame state: {message}")]
    FrameState {
        #[allow(missing_docs)]
        message: String,
    },
}

impl RenderError {
    /// Creates a [`RenderError::FrameState`] error.
    pub fn frame_state(message: impl Into<String>) -> Self {
        Self::FrameState {
            message: message.into(),
        }
    }
}

/// An error from validating a [`SimulationConfig`][crate::SimulationConfig].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A parameter is NaN or infinite.
    #[error("Configuration value '{field}' must be finite, got {value}")]
    NonFinite {
        #[allow(missing_docs)]
        field: &'static str,
        #[allow(missing_docs)]
        value: f64,
    },

    /// A parameter that must be strictly positive isn't.
    #[error("Configuration value '{field}' must be positive, got {value}")]
    NonPositive {
        #[allow(missing_docs)]
        field: &'static str,
        #[allow(missing_docs)]
        value: f64,
    },

    /// The viewport has no pixels.
    #[error("Viewport must be at least 1x1 pixels, got {width}x{height}")]
    EmptyViewport {
        #[allow(missing_docs)]
        width: u16,
        #[allow(missing_docs)]
        height: u16,
    },
}
