// File: crates/lumi-core/src/geometry.rs
// Summary: Lightweight geometry helpers for NDC <-> pixel math.

/// Point in normalized device coordinates: (0,0) bottom-left, (1,1) top-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointNdc {
    pub x: f32,
    pub y: f32,
}

impl PointNdc {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// Pixel position on a `width` x `height` canvas (y grows downwards).
    pub fn to_px(&self, width: u32, height: u32) -> (f32, f32) {
        (self.x * width as f32, (1.0 - self.y) * height as f32)
    }
}

/// Axis-aligned rectangle in NDC, stored as lower-left and upper-right corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectNdc {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl RectNdc {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
    pub fn width(&self) -> f32 { self.x1 - self.x0 }
    pub fn height(&self) -> f32 { self.y1 - self.y0 }

    /// Pixel rectangle as (left, top, right, bottom).
    pub fn to_px_ltrb(&self, width: u32, height: u32) -> (f32, f32, f32, f32) {
        let (l, t) = PointNdc::new(self.x0, self.y1).to_px(width, height);
        let (r, b) = PointNdc::new(self.x1, self.y0).to_px(width, height);
        (l, t, r, b)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
