use std::io::Write;

use crate::{
    render::{Color, VectorCanvas},
    RenderError,
};

/// Starts a ReGIS device control string.
const REGIS_ENTER: &str = "\x1bPp";

/// Ends a ReGIS device control string.
const REGIS_EXIT: &str = "\x1b\\";

/// A canvas that emits ReGIS (Remote Graphic Instruction Set) commands,
/// as understood by DEC VT-series terminals and their emulators.
///
/// Commands for a frame are buffered and only written out, then flushed,
/// when the frame ends. A failed write or flush is a
/// [`RenderError::Sink`].
///
/// # Example
/// ```
/// use planet_motion::render::{Color, ReGisCanvas, VectorCanvas};
///
/// let mut canvas = ReGisCanvas::new(Vec::new());
///
/// canvas.begin_frame(768, 480).unwrap();
/// canvas.set_color(Color::Yellow).unwrap();
/// canvas.move_to(384, 240).unwrap();
/// canvas.filled_circle(20).unwrap();
/// canvas.end_frame().unwrap();
///
/// let output = String::from_utf8(canvas.into_inner()).unwrap();
///
/// assert_eq!(
///     output,
///     "\x1bPpS(A[0,0][767,479])S(E)W(I(Y))P[384,240]F(C[+20])\x1b\\"
/// );
/// ```
#[derive(Debug)]
pub struct ReGisCanvas<W: Write> {
    sink: W,
    frame: Option<String>,
}

impl<W: Write> ReGisCanvas<W> {
    /// Creates a canvas that writes to the given sink.
    pub fn new(sink: W) -> Self {
        Self { sink, frame: None }
    }

    /// Gets a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Consumes the canvas, returning the underlying sink.
    ///
    /// Commands of an unfinished frame are discarded.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn push(&mut self, command: &str) -> Result<(), RenderError> {
        match self.frame.as_mut() {
            Some(frame) => {
                frame.push_str(command);
                Ok(())
            }
            None => Err(RenderError::frame_state(format!(
                "ReGIS command '{command}' issued outside of a frame"
            ))),
        }
    }
}

/// Quotes a string for a ReGIS text command, doubling any
/// single quotes inside it.
fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

impl<W: Write> VectorCanvas for ReGisCanvas<W> {
    fn begin_frame(&mut self, width: u16, height: u16) -> Result<(), RenderError> {
        if self.frame.is_some() {
            return Err(RenderError::frame_state("frame begun twice"));
        }

        let right = width.saturating_sub(1);
        let bottom = height.saturating_sub(1);

        self.frame = Some(format!(
            "{REGIS_ENTER}S(A[0,0][{right},{bottom}])S(E)"
        ));
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.push(&format!("W(I({color}))"))
    }

    fn move_to(&mut self, x: i32, y: i32) -> Result<(), RenderError> {
        self.push(&format!("P[{x},{y}]"))
    }

    fn circle(&mut self, radius: u16) -> Result<(), RenderError> {
        self.push(&format!("C[+{radius}]"))
    }

    fn filled_circle(&mut self, radius: u16) -> Result<(), RenderError> {
        self.push(&format!("F(C[+{radius}])"))
    }

    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.push(&format!("T{}", quote(text)))
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        let mut frame = self
            .frame
            .take()
            .ok_or_else(|| RenderError::frame_state("frame ended without being begun"))?;
        frame.push_str(REGIS_EXIT);

        self.sink.write_all(frame.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }
}
