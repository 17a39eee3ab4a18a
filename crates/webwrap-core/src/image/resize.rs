//! Nearest-neighbour resize and target-size calculation.

use super::bitmap::{Bitmap, BitmapMut, PixelFormat};
use super::ImageError;

const RGBA_BYTES: usize = 4;

/// Resizes `src` into `dst` with nearest-neighbour sampling.
///
/// Both bitmaps must be RGBA_8888; any other format is rejected before `dst`
/// is touched. Destination pixel `(x, y)` takes source pixel
/// `(x * src_w / dst_w, y * src_h / dst_h)`.
pub fn resize_nearest(src: &Bitmap<'_>, dst: &mut BitmapMut<'_>) -> Result<(), ImageError> {
    let src_info = src.info();
    let dst_info = dst.info();
    if src_info.format != PixelFormat::Rgba8888 || dst_info.format != PixelFormat::Rgba8888 {
        return Err(ImageError::UnsupportedFormat {
            src: src_info.format,
            dst: dst_info.format,
        });
    }

    let src_w = u64::from(src_info.width);
    let src_h = u64::from(src_info.height);
    let dst_w = u64::from(dst_info.width);
    let dst_h = u64::from(dst_info.height);
    let src_row_bytes = src_info.width as usize * RGBA_BYTES;
    let dst_row_bytes = dst_info.width as usize * RGBA_BYTES;

    let src_pixels = src.pixels();
    for (y, row) in dst.pixels_mut().chunks_exact_mut(dst_row_bytes).enumerate() {
        let src_y = (y as u64 * src_h / dst_h) as usize;
        let src_row = &src_pixels[src_y * src_row_bytes..(src_y + 1) * src_row_bytes];
        for (x, px) in row.chunks_exact_mut(RGBA_BYTES).enumerate() {
            let src_x = (x as u64 * src_w / dst_w) as usize * RGBA_BYTES;
            px.copy_from_slice(&src_row[src_x..src_x + RGBA_BYTES]);
        }
    }

    tracing::info!(
        "image resized from {}x{} to {}x{}",
        src_info.width,
        src_info.height,
        dst_info.width,
        dst_info.height
    );
    Ok(())
}

/// Scales `(width, height)` down so neither side exceeds `max_size`, keeping the aspect ratio.
///
/// Dimensions already within bounds are returned unchanged. Scaled sides are
/// truncated and never drop below 1.
pub fn fit_within(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    if width <= max_size && height <= max_size {
        return (width, height);
    }
    let max = f64::from(max_size);
    let scale = (max / f64::from(width)).min(max / f64::from(height));
    let scaled = |side: u32| ((f64::from(side) * scale) as u32).max(1);
    (scaled(width), scaled(height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::BitmapInfo;

    fn rgba(width: u32, height: u32) -> BitmapInfo {
        BitmapInfo::new(width, height, PixelFormat::Rgba8888)
    }

    /// One distinct opaque pixel per index.
    fn numbered(count: u8) -> Vec<u8> {
        (0..count).flat_map(|i| [i, i, i, 0xff]).collect()
    }

    #[test]
    fn upscale_duplicates_into_blocks() {
        let src_buf = numbered(4);
        let src = Bitmap::new(rgba(2, 2), &src_buf).unwrap();
        let mut dst_buf = vec![0u8; 4 * 4 * 4];
        let mut dst = BitmapMut::new(rgba(4, 4), &mut dst_buf).unwrap();
        resize_nearest(&src, &mut dst).unwrap();

        let ids: Vec<u8> = dst_buf.chunks_exact(4).map(|p| p[0]).collect();
        assert_eq!(
            ids,
            vec![0, 0, 1, 1, 0, 0, 1, 1, 2, 2, 3, 3, 2, 2, 3, 3]
        );
    }

    #[test]
    fn downscale_samples_top_left_of_each_block() {
        let src_buf = numbered(16);
        let src = Bitmap::new(rgba(4, 4), &src_buf).unwrap();
        let mut dst_buf = vec![0u8; 2 * 2 * 4];
        let mut dst = BitmapMut::new(rgba(2, 2), &mut dst_buf).unwrap();
        resize_nearest(&src, &mut dst).unwrap();

        let ids: Vec<u8> = dst_buf.chunks_exact(4).map(|p| p[0]).collect();
        assert_eq!(ids, vec![0, 2, 8, 10]);
    }

    #[test]
    fn same_size_is_identity() {
        let src_buf = numbered(6);
        let src = Bitmap::new(rgba(3, 2), &src_buf).unwrap();
        let mut dst_buf = vec![0u8; src_buf.len()];
        let mut dst = BitmapMut::new(rgba(3, 2), &mut dst_buf).unwrap();
        resize_nearest(&src, &mut dst).unwrap();
        assert_eq!(dst_buf, src_buf);
    }

    #[test]
    fn non_rgba_rejected_without_touching_destination() {
        let src_buf = vec![7u8; 2 * 2 * 2];
        let src = Bitmap::new(BitmapInfo::new(2, 2, PixelFormat::Rgb565), &src_buf).unwrap();
        let mut dst_buf = vec![0xaau8; 4];
        let mut dst = BitmapMut::new(rgba(1, 1), &mut dst_buf).unwrap();

        let err = resize_nearest(&src, &mut dst).unwrap_err();
        assert_eq!(
            err,
            ImageError::UnsupportedFormat {
                src: PixelFormat::Rgb565,
                dst: PixelFormat::Rgba8888
            }
        );
        assert_eq!(dst_buf, vec![0xaa; 4]);
    }

    #[test]
    fn fit_within_leaves_small_images() {
        assert_eq!(fit_within(100, 50, 256), (100, 50));
        assert_eq!(fit_within(256, 256, 256), (256, 256));
    }

    #[test]
    fn fit_within_scales_by_longest_side() {
        assert_eq!(fit_within(512, 256, 256), (256, 128));
        assert_eq!(fit_within(256, 1024, 256), (64, 256));
        assert_eq!(fit_within(1000, 3, 100), (100, 1));
    }
}
