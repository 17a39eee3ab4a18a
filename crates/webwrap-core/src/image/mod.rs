//! Bitmap helpers for logos and favicons.
//!
//! The host hands over locked pixel memory; here it is a borrowed slice for
//! the length of the call. Only RGBA_8888 is resized, everything else is
//! rejected so the host can fall back to its own scaler.

mod bitmap;
mod error;
mod process;
mod resize;

pub use bitmap::{Bitmap, BitmapInfo, BitmapMut, PixelFormat};
pub use error::ImageError;
pub use process::process_image;
pub use resize::{fit_within, resize_nearest};

/// Resizes a tightly packed RGBA_8888 buffer into a newly allocated one.
pub fn resize_rgba(
    pixels: &[u8],
    width: u32,
    height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Result<Vec<u8>, ImageError> {
    let src = Bitmap::new(BitmapInfo::new(width, height, PixelFormat::Rgba8888), pixels)?;
    let dst_info = BitmapInfo::new(dst_width, dst_height, PixelFormat::Rgba8888);
    let len = dst_info
        .byte_len()
        .ok_or(ImageError::InvalidInput("bitmap dimensions overflow"))?;
    let mut out = vec![0u8; len];
    let mut dst = BitmapMut::new(dst_info, &mut out)?;
    resize_nearest(&src, &mut dst)?;
    Ok(out)
}
