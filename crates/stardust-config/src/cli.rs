//! Command-line argument parsing for Stardust.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Stardust command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "stardust", about = "Animated particle field background")]
pub struct CliArgs {
    /// Surface width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of background stars.
    #[arg(long)]
    pub stars: Option<usize>,

    /// Number of nebulae.
    #[arg(long)]
    pub nebulae: Option<usize>,

    /// RNG seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Total frames to render (0 = run until stopped).
    #[arg(long)]
    pub frames: Option<u64>,

    /// Directory PNG frames are written to.
    #[arg(long)]
    pub frame_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.surface.width = w;
        }
        if let Some(h) = args.height {
            self.surface.height = h;
        }
        if let Some(stars) = args.stars {
            self.field.star_count = stars;
        }
        if let Some(nebulae) = args.nebulae {
            self.field.nebula_count = nebulae;
        }
        if let Some(seed) = args.seed {
            self.field.seed = Some(seed);
        }
        if let Some(frames) = args.frames {
            self.output.frames = frames;
        }
        if let Some(ref dir) = args.frame_dir {
            self.output.frame_dir = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
