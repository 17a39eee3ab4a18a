//! Borrowed views over host bitmap pixel memory.
//!
//! A view is only constructed once its buffer length matches the reported
//! dimensions, so the copy loops can index without further checks.

use std::fmt;

use super::ImageError;

/// Pixel layouts a host bitmap can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Rgba8888,
    Rgb565,
    Alpha8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8888 => 4,
            PixelFormat::Rgb565 => 2,
            PixelFormat::Alpha8 => 1,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelFormat::Rgba8888 => "RGBA_8888",
            PixelFormat::Rgb565 => "RGB_565",
            PixelFormat::Alpha8 => "A_8",
        };
        f.write_str(name)
    }
}

/// Width, height and format as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapInfo {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl BitmapInfo {
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
        }
    }

    /// Bytes needed for one row of pixels (tightly packed).
    pub fn row_bytes(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.format.bytes_per_pixel())
    }

    /// Total bytes needed for the whole bitmap, or `None` on overflow.
    pub fn byte_len(&self) -> Option<usize> {
        self.row_bytes()?.checked_mul(self.height as usize)
    }

    fn check(&self, actual: usize) -> Result<(), ImageError> {
        if self.width == 0 || self.height == 0 {
            return Err(ImageError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self
            .byte_len()
            .ok_or(ImageError::InvalidInput("bitmap dimensions overflow"))?;
        if expected != actual {
            return Err(ImageError::BufferSizeMismatch { expected, actual });
        }
        Ok(())
    }
}

/// Read-only view over a source bitmap.
#[derive(Debug, Clone, Copy)]
pub struct Bitmap<'a> {
    info: BitmapInfo,
    pixels: &'a [u8],
}

impl<'a> Bitmap<'a> {
    pub fn new(info: BitmapInfo, pixels: &'a [u8]) -> Result<Self, ImageError> {
        info.check(pixels.len())?;
        Ok(Self { info, pixels })
    }

    pub fn info(&self) -> BitmapInfo {
        self.info
    }

    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }
}

/// Writable view over a destination bitmap.
#[derive(Debug)]
pub struct BitmapMut<'a> {
    info: BitmapInfo,
    pixels: &'a mut [u8],
}

impl<'a> BitmapMut<'a> {
    pub fn new(info: BitmapInfo, pixels: &'a mut [u8]) -> Result<Self, ImageError> {
        info.check(pixels.len())?;
        Ok(Self { info, pixels })
    }

    pub fn info(&self) -> BitmapInfo {
        self.info
    }

    pub fn pixels(&self) -> &[u8] {
        &*self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut *self.pixels
    }
}
