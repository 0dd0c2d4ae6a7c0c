//! Shared configuration for Pookalam
//!
//! This crate is the single source of truth for the canvas size, output
//! path and caption settings. Values come from constant defaults, then
//! `POOKALAM_*` environment variables, then the command line.

use std::path::PathBuf;
use std::str::FromStr;

use painting::{MAX_CANVAS_SIZE, MIN_CANVAS_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default canvas edge length in pixels
pub const DEFAULT_SIZE: u32 = 800;

pub const DEFAULT_OUTPUT_PATH: &str = "pookalam_with_greeting.png";

/// "Onam greetings" in Malayalam
pub const DEFAULT_CAPTION: &str = "ഓണാശംസകൾ";

pub const DEFAULT_FONT_PATH: &str = "Manjari-Regular.otf";

pub const DEFAULT_FONT_SIZE: f32 = 50.0;

/// Gap between the caption and the bottom edge
pub const DEFAULT_BOTTOM_MARGIN: u32 = 30;

pub const ENV_SIZE: &str = "POOKALAM_SIZE";
pub const ENV_OUTPUT: &str = "POOKALAM_OUTPUT";
pub const ENV_CAPTION: &str = "POOKALAM_CAPTION";
pub const ENV_FONT: &str = "POOKALAM_FONT";
pub const ENV_FONT_SIZE: &str = "POOKALAM_FONT_SIZE";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Canvas size {size} not in {}..={}", MIN_CANVAS_SIZE, MAX_CANVAS_SIZE)]
    InvalidSize { size: u32 },

    #[error("Font size must be positive, got {0}")]
    InvalidFontSize(f32),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Pattern geometry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Canvas edge length in pixels (the canvas is square)
    pub size: u32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

impl PatternConfig {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Defaults overridden by `POOKALAM_SIZE`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(size) = parse_env(ENV_SIZE)? {
            config.size = size;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&self.size) {
            return Err(ConfigError::InvalidSize { size: self.size });
        }
        Ok(())
    }
}

/// Caption and file output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: PathBuf,
    pub caption: String,
    pub font_path: PathBuf,
    /// Font size in pixels
    pub font_size: f32,
    pub bottom_margin: u32,
    /// Caption color as RGB
    pub ink: [u8; 3],
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            caption: DEFAULT_CAPTION.to_string(),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
            ink: [0, 0, 0],
        }
    }
}

impl OutputConfig {
    /// Defaults overridden by `POOKALAM_OUTPUT`, `POOKALAM_CAPTION`,
    /// `POOKALAM_FONT` and `POOKALAM_FONT_SIZE`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(path) = std::env::var(ENV_OUTPUT) {
            config.output_path = PathBuf::from(path);
        }
        if let Ok(caption) = std::env::var(ENV_CAPTION) {
            config.caption = caption;
        }
        if let Ok(font) = std::env::var(ENV_FONT) {
            config.font_path = PathBuf::from(font);
        }
        if let Some(font_size) = parse_env(ENV_FONT_SIZE)? {
            config.font_size = font_size;
        }
        Ok(config)
    }

    /// Replace the output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_size.is_nan() || self.font_size <= 0.0 {
            return Err(ConfigError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => parse_value(var, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv {
            var,
            value: value.to_string(),
        })
}
