//! Pookalam - procedural floral pattern generator

use std::process::ExitCode;

use clap::Parser;
use painting::{PaintingError, PatternPipeline};
use pookalam_config::ConfigError;
use pookalam_finisher::FinishError;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::{Cli, RunConfig};

#[derive(Debug, Error)]
enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Pattern generation failed: {0}")]
    Painting(#[from] PaintingError),

    #[error(transparent)]
    Finish(#[from] FinishError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = RunConfig::resolve(cli)?;
    info!(
        "Starting Pookalam {} ({}x{} -> {:?})",
        env!("CARGO_PKG_VERSION"),
        config.pattern.size,
        config.pattern.size,
        config.output.output_path
    );

    let canvas = PatternPipeline::with_size(config.pattern.size)?.render()?;
    pookalam_finisher::finish(&canvas, &config.output)?;
    Ok(())
}
