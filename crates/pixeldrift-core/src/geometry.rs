//! 2-D geometry in canvas pixel space (top-left anchored, y grows down).

/// A point or displacement in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Construct a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Intrinsic bitmap dimensions in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Construct a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The size after applying a uniform scale factor.
    pub fn scaled(&self, factor: f32) -> (f32, f32) {
        (self.width as f32 * factor, self.height as f32 * factor)
    }
}

/// An axis-aligned rectangle, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and extent.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether two rectangles come within `pad` pixels of each other.
    ///
    /// With `pad == 0.0` this is a plain AABB overlap test; a positive pad
    /// also rejects near-misses, keeping sprites visually separated rather
    /// than merely non-overlapping.
    pub fn intersects_padded(&self, other: &Rect, pad: f32) -> bool {
        self.x < other.x + other.width + pad
            && self.x + self.width + pad > other.x
            && self.y < other.y + other.height + pad
            && self.y + self.height + pad > other.y
    }
}
