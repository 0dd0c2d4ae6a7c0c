//! Command line parsing and run configuration

use std::path::PathBuf;

use clap::Parser;
use pookalam_config::{ConfigError, OutputConfig, PatternConfig};

/// Generate a pookalam pattern and save it as a PNG
///
/// Canvas size and caption settings come from POOKALAM_SIZE, POOKALAM_CAPTION,
/// POOKALAM_FONT, POOKALAM_FONT_SIZE and POOKALAM_OUTPUT.
#[derive(Debug, Parser)]
#[command(name = "pookalam", version, about)]
pub struct Cli {
    /// Output image path (overrides POOKALAM_OUTPUT)
    pub output: Option<PathBuf>,
}

/// Everything a single run needs
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub pattern: PatternConfig,
    pub output: OutputConfig,
}

impl RunConfig {
    /// Environment defaults with command line overrides applied
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let pattern = PatternConfig::from_env()?;
        let mut output = OutputConfig::from_env()?;
        if let Some(path) = cli.output {
            output = output.with_output_path(path);
        }

        pattern.validate()?;
        output.validate()?;
        Ok(Self { pattern, output })
    }
}
