//! Error types for the painting crate

use thiserror::Error;

use crate::constants::{MAX_CANVAS_SIZE, MIN_CANVAS_SIZE};

#[derive(Debug, Error)]
pub enum PaintingError {
    #[error(
        "Canvas size mismatch: expected {expected_width}x{expected_height}, got {width}x{height}"
    )]
    SizeMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("Canvas size {size} not in {}..={}", MIN_CANVAS_SIZE, MAX_CANVAS_SIZE)]
    InvalidSize { size: u32 },
}
