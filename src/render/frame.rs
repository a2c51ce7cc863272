use crate::{
    render::{Color, VectorCanvas},
    Body, EclipticCoordinates, RenderError, SimulationConfig, SkySnapshot,
};

/// How a body is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BodyStyle {
    /// The body this style applies to.
    pub body: Body,
    /// The color of the body and of its orbit.
    pub color: Color,
    /// The radius of the body's disc, in pixels.
    pub size: u16,
}

impl BodyStyle {
    const fn new(body: Body, color: Color, size: u16) -> Self {
        Self { body, color, size }
    }
}

/// The color of the Earth, drawn at the center.
pub const EARTH_COLOR: Color = Color::Blue;

/// The radius of the Earth's disc, in pixels.
pub const EARTH_SIZE: u16 = 8;

/// How the Sun and its apparent orbit are drawn.
pub const SUN_STYLE: BodyStyle = BodyStyle::new(Body::Sun, Color::Yellow, 20);

/// How the Moon and its orbit are drawn.
pub const MOON_STYLE: BodyStyle = BodyStyle::new(Body::Moon, Color::White, 3);

/// The planets that are drawn, and how, in drawing order.
///
/// Uranus and Neptune are left out: at the default scale, their
/// orbits don't fit on the display.
pub const PLANET_STYLES: [BodyStyle; 5] = [
    BodyStyle::new(Body::Mercury, Color::Red, 4),
    BodyStyle::new(Body::Venus, Color::Cyan, 8),
    BodyStyle::new(Body::Mars, Color::Red, 6),
    BodyStyle::new(Body::Jupiter, Color::Yellow, 24),
    BodyStyle::new(Body::Saturn, Color::Green, 20),
];

/// Where the day caption is drawn.
const CAPTION_POSITION: (i32, i32) = (8, 8);

/// Gap between a body's disc and its label, in pixels.
const LABEL_GAP: i32 = 2;

/// Decimal places kept in the day caption.
const CAPTION_PRECISION: usize = 2;

/// Formats the day caption, e.g. `Day 7865` or `Day 0.3`.
///
/// The day is rounded to [`CAPTION_PRECISION`] places and trailing
/// zeros are dropped.
pub fn day_caption(day: f64) -> String {
    let formatted = format!("{:.*}", CAPTION_PRECISION, day);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" => "Day 0".to_string(),
        _ => format!("Day {trimmed}"),
    }
}

/// Turns a [`SkySnapshot`] into draw commands.
///
/// The Earth sits at the center of the display. Positions are scaled
/// from astronomical units to pixels, except for the Moon which has its
/// own scale.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRenderer {
    width: u16,
    height: u16,
    scale_factor: f64,
    moon_scale_factor: f64,
    label_bodies: bool,
    planets: Vec<BodyStyle>,
}

impl FrameRenderer {
    /// Creates a renderer that draws the default set of planets.
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_planets(config, PLANET_STYLES.to_vec())
    }

    /// Creates a renderer that draws the given planets, in order.
    pub fn with_planets(config: &SimulationConfig, planets: Vec<BodyStyle>) -> Self {
        Self {
            width: config.width,
            height: config.height,
            scale_factor: config.scale_factor,
            moon_scale_factor: config.moon_scale_factor,
            label_bodies: config.label_bodies,
            planets,
        }
    }

    /// The planets this renderer draws.
    pub fn planets(&self) -> &[BodyStyle] {
        &self.planets
    }

    /// The pixel position of the Earth.
    pub fn center(&self) -> (i32, i32) {
        (i32::from(self.width / 2), i32::from(self.height / 2))
    }

    /// Converts an Earth-relative position into pixels, with the given
    /// number of pixels per AU.
    ///
    /// The offset from the center is truncated towards zero.
    pub fn to_screen(&self, coords: &EclipticCoordinates, scale: f64) -> (i32, i32) {
        let (cx, cy) = self.center();
        (
            cx + (coords.x() * scale) as i32,
            cy + (coords.y() * scale) as i32,
        )
    }

    /// Converts an orbital radius into a circle radius in pixels,
    /// truncated towards zero and saturating at `u16::MAX`.
    pub fn orbit_radius(au: f64, scale: f64) -> u16 {
        (au * scale) as u16
    }

    /// Draws one frame.
    pub fn render(
        &self,
        canvas: &mut impl VectorCanvas,
        snapshot: &SkySnapshot,
    ) -> Result<(), RenderError> {
        let (cx, cy) = self.center();
        let sun_screen = self.to_screen(&snapshot.sun, self.scale_factor);

        canvas.begin_frame(self.width, self.height)?;

        // earth
        canvas.move_to(cx, cy)?;
        canvas.set_color(EARTH_COLOR)?;
        canvas.filled_circle(EARTH_SIZE)?;

        // sun, and its apparent orbit around the earth
        canvas.set_color(SUN_STYLE.color)?;
        canvas.circle(Self::orbit_radius(snapshot.sun.au, self.scale_factor))?;
        canvas.move_to(sun_screen.0, sun_screen.1)?;
        canvas.filled_circle(SUN_STYLE.size)?;
        self.label(canvas, SUN_STYLE, sun_screen)?;

        // moon
        let moon_screen = self.to_screen(&snapshot.moon, self.moon_scale_factor);
        canvas.move_to(cx, cy)?;
        canvas.set_color(MOON_STYLE.color)?;
        canvas.circle(Self::orbit_radius(snapshot.moon.au, self.moon_scale_factor))?;
        canvas.move_to(moon_screen.0, moon_screen.1)?;
        canvas.filled_circle(MOON_STYLE.size)?;
        self.label(canvas, MOON_STYLE, moon_screen)?;

        for style in &self.planets {
            let Some(coords) = snapshot.get(style.body) else {
                continue;
            };
            let screen = self.to_screen(coords, self.scale_factor);

            canvas.move_to(sun_screen.0, sun_screen.1)?;
            canvas.set_color(style.color)?;
            canvas.circle(Self::orbit_radius(coords.au, self.scale_factor))?;
            canvas.move_to(screen.0, screen.1)?;
            canvas.filled_circle(style.size)?;
            self.label(canvas, *style, screen)?;
        }

        canvas.move_to(CAPTION_POSITION.0, CAPTION_POSITION.1)?;
        canvas.set_color(Color::White)?;
        canvas.text(&day_caption(snapshot.day))?;

        canvas.end_frame()
    }

    fn label(
        &self,
        canvas: &mut impl VectorCanvas,
        style: BodyStyle,
        (x, y): (i32, i32),
    ) -> Result<(), RenderError> {
        if !self.label_bodies {
            return Ok(());
        }
        canvas.move_to(x + i32::from(style.size) + LABEL_GAP, y)?;
        canvas.text(style.body.name())
    }
}
