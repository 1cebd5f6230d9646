// File: crates/lumi-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; draws styled label runs at a 9-way anchor.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::label::{FontFace, LabelText};
use crate::position::{Align, HAlign, VAlign};

const FAMILIES: &[&str] = &["Helvetica", "Arial", "Liberation Sans", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn font_style(face: FontFace) -> skia::FontStyle {
        match face {
            FontFace::Regular => skia::FontStyle::normal(),
            FontFace::Bold => skia::FontStyle::bold(),
            FontFace::Italic => skia::FontStyle::italic(),
            FontFace::BoldItalic => skia::FontStyle::bold_italic(),
        }
    }

    fn make_style(size: f32, color: skia::Color, face: FontFace) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_style(Self::font_style(face));
        ts.set_font_families(FAMILIES);
        ts
    }

    /// Shape every run of `label`; each run is sized `size * run.scale` pixels.
    pub fn layout(&self, label: &LabelText, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, self.fonts.clone());
        for run in &label.runs {
            let style = Self::make_style(size * run.scale, color, run.face);
            builder.push_style(&style);
            builder.add_text(&run.text);
            builder.pop();
        }
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `label` so that `align` of its bounding box lands on pixel (x, y).
    pub fn draw_aligned(
        &self,
        canvas: &skia::Canvas,
        label: &LabelText,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        align: Align,
    ) {
        let p = self.layout(label, size, color);
        let extent = TextExtent { width: p.longest_line(), height: p.height(), baseline: p.alphabetic_baseline() };
        p.paint(canvas, aligned_origin(x, y, extent, align));
    }
}

/// Shaped label size in pixels; `baseline` is measured down from the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
    pub baseline: f32,
}

/// Top-left paint origin placing `align` of a text box on anchor (x, y).
/// Bottom alignment sits the first line's baseline on the anchor, descenders hang below.
pub fn aligned_origin(x: f32, y: f32, extent: TextExtent, align: Align) -> (f32, f32) {
    let left = match align.h {
        HAlign::Left => x,
        HAlign::Center => x - extent.width * 0.5,
        HAlign::Right => x - extent.width,
    };
    let top = match align.v {
        VAlign::Top => y,
        VAlign::Middle => y - extent.height * 0.5,
        VAlign::Bottom => y - extent.baseline,
    };
    (left, top)
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
