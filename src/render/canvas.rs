use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::RenderError;

/// The colors a vector display can draw with.
///
/// These are the eight ReGIS intensities.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum Color {
    Dark,
    Blue,
    Red,
    Magenta,
    Green,
    Cyan,
    Yellow,
    White,
}

impl Color {
    /// The single-letter code for this color.
    pub const fn code(self) -> char {
        match self {
            Color::Dark => 'D',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Magenta => 'M',
            Color::Green => 'G',
            Color::Cyan => 'C',
            Color::Yellow => 'Y',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An immediate-mode 2D vector drawing surface.
///
/// Drawing happens at a cursor: [`move_to`][Self::move_to] places it, and
/// circles and text are drawn around or at it. Every frame is bracketed by
/// [`begin_frame`][Self::begin_frame] and [`end_frame`][Self::end_frame].
///
/// Pixel coordinates start at the top-left corner and grow right and down.
pub trait VectorCanvas {
    /// Opens a new, blank frame of the given size.
    fn begin_frame(&mut self, width: u16, height: u16) -> Result<(), RenderError>;

    /// Sets the color used by subsequent draw commands.
    fn set_color(&mut self, color: Color) -> Result<(), RenderError>;

    /// Moves the cursor to an absolute pixel position.
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), RenderError>;

    /// Draws a circle outline centered on the cursor.
    fn circle(&mut self, radius: u16) -> Result<(), RenderError>;

    /// Draws a filled circle centered on the cursor.
    fn filled_circle(&mut self, radius: u16) -> Result<(), RenderError>;

    /// Draws a short string starting at the cursor.
    fn text(&mut self, text: &str) -> Result<(), RenderError>;

    /// Emits the frame to the output and closes it.
    fn end_frame(&mut self) -> Result<(), RenderError>;
}

/// A single command issued to a [`VectorCanvas`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum DrawCommand {
    BeginFrame { width: u16, height: u16 },
    SetColor(Color),
    MoveTo { x: i32, y: i32 },
    Circle(u16),
    FilledCircle(u16),
    Text(String),
    EndFrame,
}

/// A canvas that records every command it receives.
///
/// Useful for inspecting what a frame would draw without a display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingCanvas {
    /// The commands received so far, oldest first.
    pub commands: Vec<DrawCommand>,
    in_frame: bool,
}

impl RecordingCanvas {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the frames that were ended.
    pub fn frame_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| **command == DrawCommand::EndFrame)
            .count()
    }

    /// Splits the recording into frames, each starting at its
    /// [`DrawCommand::BeginFrame`].
    pub fn frames(&self) -> Vec<&[DrawCommand]> {
        let mut frames = Vec::new();
        let mut start = None;

        for (i, command) in self.commands.iter().enumerate() {
            match command {
                DrawCommand::BeginFrame { .. } => start = Some(i),
                DrawCommand::EndFrame => {
                    if let Some(s) = start.take() {
                        frames.push(&self.commands[s..=i]);
                    }
                }
                _ => {}
            }
        }

        frames
    }

    fn draw(&mut self, command: DrawCommand) -> Result<(), RenderError> {
        if !self.in_frame {
            return Err(RenderError::frame_state(format!(
                "{command:?} issued outside of a frame"
            )));
        }
        self.commands.push(command);
        Ok(())
    }
}

impl VectorCanvas for RecordingCanvas {
    fn begin_frame(&mut self, width: u16, height: u16) -> Result<(), RenderError> {
        if self.in_frame {
            return Err(RenderError::frame_state("frame begun twice"));
        }
        self.in_frame = true;
        self.commands.push(DrawCommand::BeginFrame { width, height });
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.draw(DrawCommand::SetColor(color))
    }

    fn move_to(&mut self, x: i32, y: i32) -> Result<(), RenderError> {
        self.draw(DrawCommand::MoveTo { x, y })
    }

    fn circle(&mut self, radius: u16) -> Result<(), RenderError> {
        self.draw(DrawCommand::Circle(radius))
    }

    fn filled_circle(&mut self, radius: u16) -> Result<(), RenderError> {
        self.draw(DrawCommand::FilledCircle(radius))
    }

    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.draw(DrawCommand::Text(text.to_string()))
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        self.draw(DrawCommand::EndFrame)?;
        self.in_frame = false;
        Ok(())
    }
}
