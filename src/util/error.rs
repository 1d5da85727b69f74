//! Error types for varcond.

use thiserror::Error;

/// Result alias for varcond operations.
pub type VarCondResult<T> = std::result::Result<T, VarCondError>;

/// Errors that can occur when computing the conditional-variance descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VarCondError {
    /// The field has zero width or height, or its area overflows.
    #[error("invalid field dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The row stride is smaller than the field width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer is too small for the declared geometry.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A nested-rows field is not rectangular.
    #[error("ragged field: row {row} has {got} samples, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// The field contains a NaN or infinite sample.
    #[error("non-finite sample at ({row}, {col})")]
    NonFiniteSample { row: usize, col: usize },
    /// Every (center, neighbor) candidate pair for the displacement falls
    /// outside the field bounds.
    #[error("no valid pixel pairs for displacement ({dx}, {dy}) on {width}x{height} field")]
    NoValidPairs {
        dx: isize,
        dy: isize,
        width: usize,
        height: usize,
    },
    /// Requested sub-region extends outside the field.
    #[error(
        "roi at ({row}, {col}) of size {height}x{width} out of bounds for {field_height}x{field_width} field"
    )]
    RoiOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        field_height: usize,
        field_width: usize,
    },
    /// Image decoding failed.
    #[cfg(feature = "image-io")]
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}
