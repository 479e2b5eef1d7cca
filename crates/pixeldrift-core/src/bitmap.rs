//! Decoded bitmap assets.

use crate::Size;

/// An opaque RGB pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A decoded pixel-art bitmap.
///
/// Bitmaps are immutable once decoded and shared read-only between sprites;
/// `None` pixels are transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    /// Asset identifier this bitmap was decoded from.
    pub name: String,
    /// Width in source pixels.
    pub width: u32,
    /// Height in source pixels.
    pub height: u32,
    /// Row-major pixel grid, `width * height` entries.
    pixels: Vec<Option<Rgb>>,
}

impl Bitmap {
    /// Construct a bitmap from a row-major pixel grid.
    ///
    /// Returns `None` when the grid length does not match the dimensions.
    pub fn from_pixels(
        name: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<Option<Rgb>>,
    ) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            name: name.into(),
            width,
            height,
            pixels,
        })
    }

    /// Intrinsic dimensions in source pixels.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The pixel at `(x, y)`, or `None` when transparent or out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }
}
