//! Error types for the finisher crate

use std::path::PathBuf;

use thiserror::Error;

/// Caption errors are recoverable: the image is written without a caption
#[derive(Debug, Error)]
pub enum CaptionError {
    #[error("Failed to read font {path:?}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse font {path:?}")]
    FontParse { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum FinishError {
    #[error("Canvas of {width}x{height} does not fit an RGB image buffer")]
    Buffer { width: u32, height: u32 },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
