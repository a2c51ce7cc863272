//! This module turns computed positions into vector-graphics frames.
//!
//! The drawing surface is abstracted by the [`VectorCanvas`] trait. Two
//! canvases are provided: [`ReGisCanvas`], which writes ReGIS to any
//! [`std::io::Write`], and [`RecordingCanvas`], which keeps the commands
//! in memory.

mod canvas;
mod frame;
mod regis;

pub use canvas::{Color, DrawCommand, RecordingCanvas, VectorCanvas};
pub use frame::{
    day_caption, BodyStyle, FrameRenderer, EARTH_COLOR, EARTH_SIZE, MOON_STYLE, PLANET_STYLES,
    SUN_STYLE,
};
pub use regis::ReGisCanvas;
