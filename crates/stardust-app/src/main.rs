//! The binary entry point for the Stardust background.

use std::path::PathBuf;

use clap::Parser;
use stardust_app::{AppError, FieldRunner};
use stardust_config::{CliArgs, Config, default_config_dir};
use stardust_log::init_logging;
use tracing::{debug, info};

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(args) {
        eprintln!("stardust: {e}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), AppError> {
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("config"));
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args);

    init_logging(None, cfg!(debug_assertions), Some(&config));

    // A configured seed makes the whole run reproducible; otherwise draw one
    // so distinct runs look different.
    let seed = config.field.seed.unwrap_or_else(rand::random::<u64>);
    info!(seed, "starting particle field");

    match FieldRunner::new(&config, seed) {
        Some(mut runner) => runner.run(),
        None => {
            // Decorative background with no surface to draw on: not an error.
            debug!("drawing surface absent, particle field disabled");
            Ok(())
        }
    }
}
