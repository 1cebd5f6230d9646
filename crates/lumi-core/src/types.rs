// File: crates/lumi-core/src/types.rs
// Summary: Shared types and constants (canvas size, frame margins, frame geometry).

/// Default canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 600;

/// Frame margins as fractions of the canvas (NDC).
/// Contract: each field in [0,1), `left + right < 1`, `top + bottom < 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    /// Create margins in left, top, right, bottom order.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Frame width in NDC (1 - left - right).
    pub fn frame_width(&self) -> f32 { 1.0 - self.left - self.right }
    /// Frame height in NDC (1 - top - bottom).
    pub fn frame_height(&self) -> f32 { 1.0 - self.top - self.bottom }

    /// True when the margins leave a non-empty frame inside the canvas.
    pub fn is_valid(&self) -> bool {
        let in_range = |v: f32| (0.0..1.0).contains(&v);
        in_range(self.left)
            && in_range(self.top)
            && in_range(self.right)
            && in_range(self.bottom)
            && self.left + self.right < 1.0
            && self.top + self.bottom < 1.0
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(0.18, 0.08, 0.05, 0.13)
    }
}

/// Frame margins plus the canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub margins: Margins,
    pub width: u32,
    pub height: u32,
}

impl FrameGeometry {
    pub const fn new(margins: Margins, width: u32, height: u32) -> Self {
        Self { margins, width, height }
    }

    /// Width over height; 1.0 for a degenerate zero-height canvas.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 { 1.0 } else { self.width as f32 / self.height as f32 }
    }
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self::new(Margins::default(), WIDTH, HEIGHT)
    }
}
