//! Error type for the bitmap helpers.

use thiserror::Error;

use super::bitmap::PixelFormat;

/// Errors reported instead of doing partial work on a pixel buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Resize only handles RGBA_8888 on both sides.
    #[error("unsupported pixel format: {src} -> {dst} (only RGBA_8888 can be resized)")]
    UnsupportedFormat { src: PixelFormat, dst: PixelFormat },

    /// A bitmap with zero width or height.
    #[error("bitmap dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    /// The pixel buffer does not match `width * height * bytes_per_pixel`.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Raw image data or dimensions rejected before processing.
    #[error("invalid image input: {0}")]
    InvalidInput(&'static str),
}
