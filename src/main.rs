//! Streams an Earth-centered view of the Sun, Moon and planets to stdout
//! as ReGIS vector graphics, one frame per simulated day.

use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use planet_motion::{render::ReGisCanvas, Simulation, SimulationConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "planet-motion")]
#[command(about = "Render Sun, Moon and planet positions as ReGIS frames")]
#[command(version)]
struct Cli {
    /// First simulated day, counted from 2000 Jan 0.0 UT
    #[arg(long, default_value_t = SimulationConfig::DEFAULT_START_DAY, allow_negative_numbers = true)]
    start_day: f64,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value_t = SimulationConfig::DEFAULT_FRAME_COUNT)]
    frames: u32,

    /// Days between two frames
    #[arg(long, default_value_t = 1.0)]
    day_step: f64,

    /// Pixels per astronomical unit
    #[arg(long, default_value_t = 48.0)]
    scale: f64,

    /// Pixels per astronomical unit for the Moon
    #[arg(long, default_value_t = 4800.0)]
    moon_scale: f64,

    /// Display width in pixels
    #[arg(long, default_value_t = 768)]
    width: u16,

    /// Display height in pixels
    #[arg(long, default_value_t = 480)]
    height: u16,

    /// Write each body's name next to it
    #[arg(long)]
    labels: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        SimulationConfig {
            start_day: self.start_day,
            frame_count: self.frames,
            day_step: self.day_step,
            scale_factor: self.scale,
            moon_scale_factor: self.moon_scale,
            width: self.width,
            height: self.height,
            label_bodies: self.labels,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut simulation = Simulation::new(cli.config()).context("invalid configuration")?;

    let stdout = io::stdout().lock();
    let mut canvas = ReGisCanvas::new(BufWriter::new(stdout));

    simulation
        .run(&mut canvas)
        .with_context(|| format!("rendering stopped at day {}", simulation.day()))?;

    Ok(())
}
