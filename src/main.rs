//! keyforge - generate the keyboard scene description
//!
//! Pure computation ending in exactly one output file: build the case
//! from the configuration, serialize the CSG tree, write it out.

use anyhow::{Context, Result};
use clap::Parser;
use keyforge::config::Config;
use keyforge::frame::Frame;
use keyforge::gear::DEFAULT_SEGMENTS_PER_FLANK;
use keyforge::point::Point3d;
use keyforge::scad::writer;
use keyforge::vector::Vec3;
use keyforge::Case;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "keyforge")]
#[command(about = "Parametric CSG generator for a gear-driven split keyboard", long_about = None)]
struct Cli {
    /// Output .scad file
    #[arg(short, long, default_value = "keyboard.scad")]
    output: PathBuf,

    /// Also generate the wrist rest
    #[arg(long)]
    wrist_rest: bool,

    /// Also generate the back rotary-encoder thumbwheel
    #[arg(long)]
    back_encoder: bool,

    /// Curved-surface tessellation passed to the renderer
    #[arg(long, default_value_t = 64)]
    segments: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::default();
    config.features.wrist_rest = cli.wrist_rest;
    config.features.back_encoder = cli.back_encoder;

    // Case frame: origin on the desk, front toward the typist.
    let frame = Frame::new(Point3d::origin(), -Vec3::unit_y(), -Vec3::unit_z())
        .context("case frame construction")?;
    let case = Case::new(frame);

    let solid = case
        .solid(&config, DEFAULT_SEGMENTS_PER_FLANK)
        .context("case generation")?;
    let scene = writer::scene(&solid, cli.segments);

    std::fs::write(&cli.output, &scene)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(
        output = %cli.output.display(),
        bytes = scene.len(),
        "scene written"
    );

    Ok(())
}
