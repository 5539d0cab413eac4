//! Wavchan CLI
//!
//! Command-line interface for the wavchan conversions.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, error};

use wavchan::cli::{commands, Cli, Commands};
use wavchan::Result;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG overrides the default filter
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .try_init()
        .context("failed to initialize logger")?;

    debug!("Wavchan v{}", env!("CARGO_PKG_VERSION"));

    match handle_command(cli.command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{}", e);
            eprintln!("error [{}]: {}", e.error_code(), e);
            eprintln!("hint: {}", e.recovery_hint());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::StereoToMono {
            input,
            output,
            mode,
        } => commands::stereo_to_mono(&input, &output, mode),
        Commands::MonoToStereo {
            left,
            right,
            output,
        } => commands::mono_to_stereo(&left, &right, &output),
        Commands::Encode { input, output } => commands::encode(&input, &output),
        Commands::Decode { input, output } => commands::decode(&input, &output),
        Commands::Info { input, json } => commands::show_info(&input, json),
    }
}
