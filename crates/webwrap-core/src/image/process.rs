//! Raw image-data probe.

use std::time::{Duration, Instant};

use super::ImageError;

/// Validates raw image bytes and reported dimensions, returning the time spent.
///
/// No decoding happens here; the host only uses the result to decide whether
/// the native path is usable and how long it took.
pub fn process_image(data: &[u8], width: i32, height: i32) -> Result<Duration, ImageError> {
    let start = Instant::now();

    if data.is_empty() {
        return Err(ImageError::InvalidInput("image data is empty"));
    }
    if width <= 0 || height <= 0 {
        return Err(ImageError::InvalidInput("image dimensions must be positive"));
    }

    let elapsed = start.elapsed();
    tracing::info!("image processed in {} ms", elapsed.as_millis());
    Ok(elapsed)
}
