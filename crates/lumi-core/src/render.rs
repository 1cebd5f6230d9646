// File: crates/lumi-core/src/render.rs
// Summary: Figure struct and headless PNG rendering of an annotated frame using Skia CPU raster surfaces.

use std::path::{Path, PathBuf};

use log::{debug, info};
use skia_safe as skia;

use crate::error::RenderError;
use crate::geometry::{clamp, RectNdc};
use crate::layout::{layout, ImagePlacement, LabelConfig, LabelLayout, Placement};
use crate::sink::{annotate, DrawSink};
use crate::style::CanvasStyle;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{FrameGeometry, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
    pub draw_frame: bool,
    pub frame_stroke: f32,
    /// Encoded image (PNG/JPEG) drawn when the layout asks for a logo.
    pub logo_path: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::default(),
            draw_frame: true,
            frame_stroke: 1.5,
            logo_path: None,
        }
    }
}

/// An empty plot frame carrying its annotations.
pub struct Figure {
    pub labels: LabelConfig,
}

impl Figure {
    pub fn new(labels: LabelConfig) -> Self {
        Self { labels }
    }

    pub fn style(&self) -> CanvasStyle {
        self.labels.canvas_style()
    }

    pub fn frame(&self, opts: &RenderOptions) -> FrameGeometry {
        self.labels.frame(opts.width, opts.height)
    }

    pub fn layout(&self, opts: &RenderOptions) -> LabelLayout {
        layout(&self.labels, &self.frame(opts))
    }

    /// Render the figure to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Render the figure and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let (w, h) = (opts.width, opts.height);
        let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or(RenderError::Surface { width: w, height: h })?;

        let style = self.style();
        let placements = self.layout(opts);
        let logo = match (&placements.logo, &opts.logo_path) {
            (Some(_), Some(path)) => Some(load_logo(path)?),
            _ => None,
        };

        {
            let canvas = surface.canvas();
            canvas.clear(opts.theme.background);
            if let Some(axis) = style.color_axis {
                draw_color_axis(canvas, &axis, w, h, opts.theme.color_axis);
            }
            if opts.draw_frame {
                draw_frame(canvas, &self.frame(opts), opts.theme.frame, opts.frame_stroke);
            }
            let shaper = TextShaper::new();
            let mut sink = SkiaSink { canvas, shaper: &shaper, width: w, height: h, logo: logo.as_ref() };
            annotate(&placements, &mut sink)?;
        }

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

fn load_logo(path: &Path) -> Result<skia::Image, RenderError> {
    let bytes = std::fs::read(path).map_err(|source| RenderError::LogoRead { path: path.to_path_buf(), source })?;
    debug!("loaded logo {} ({} bytes)", path.display(), bytes.len());
    skia::Image::from_encoded(skia::Data::new_copy(&bytes))
        .ok_or_else(|| RenderError::LogoDecode { path: path.to_path_buf() })
}

/// Draws placements on a Skia canvas; NDC anchors map onto the full canvas.
pub struct SkiaSink<'a> {
    pub canvas: &'a skia::Canvas,
    pub shaper: &'a TextShaper,
    pub width: u32,
    pub height: u32,
    pub logo: Option<&'a skia::Image>,
}

impl DrawSink for SkiaSink<'_> {
    type Error = RenderError;

    fn draw_text(&mut self, p: &Placement) -> Result<(), RenderError> {
        if p.text.is_empty() {
            return Ok(());
        }
        // Text size is relative to the shorter canvas side.
        let size_px = clamp(p.size * self.width.min(self.height) as f32, 1.0, 512.0);
        let (x, y) = p.anchor.to_px(self.width, self.height);
        self.shaper.draw_aligned(self.canvas, &p.text, x, y, size_px, p.color, p.align);
        Ok(())
    }

    fn draw_image(&mut self, image: &ImagePlacement) -> Result<(), RenderError> {
        let logo = self.logo.ok_or(RenderError::MissingLogo)?;
        let (l, t, r, b) = image.rect.to_px_ltrb(self.width, self.height);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        self.canvas.draw_image_rect(logo, None, skia::Rect::from_ltrb(l, t, r, b), &paint);
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_frame(canvas: &skia::Canvas, frame: &FrameGeometry, color: skia::Color, stroke_width: f32) {
    let m = &frame.margins;
    let rect = RectNdc::new(m.left, m.bottom, 1.0 - m.right, 1.0 - m.top);
    let (l, t, r, b) = rect.to_px_ltrb(frame.width, frame.height);

    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke_width);
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &paint);
}

fn draw_color_axis(canvas: &skia::Canvas, axis: &RectNdc, width: u32, height: u32, color: skia::Color) {
    let (l, t, r, b) = axis.to_px_ltrb(width, height);
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_style(skia::paint::Style::Fill);
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &paint);
}
