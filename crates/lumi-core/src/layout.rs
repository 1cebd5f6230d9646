// File: crates/lumi-core/src/layout.rs
// Summary: Label placement calculator: frame geometry + position code -> ordered label placements.
// Notes:
// - Pure: reads only its arguments, so identical inputs give bit-identical output.
// - All anchors are NDC over the whole canvas; text sizes are NDC fractions
//   scaled from the top margin.

use log::{debug, warn};
use skia_safe as skia;

use crate::caption::{Caption, CaptionTable};
use crate::geometry::{PointNdc, RectNdc};
use crate::label::{FontFace, LabelText, TextRun};
use crate::position::{Align, PositionCode, Zone};
use crate::style::{CanvasStyle, StylePreset};
use crate::types::{FrameGeometry, Margins};

/// Experiment name drawn by [`LabelConfig::experiment`].
pub const EXPERIMENT_NAME: &str = "CMS";

/// Offsets and sizes steering the layout.
/// Sizes and vertical offsets are in units of the top margin; `rel_pos_*` are
/// fractions of the frame extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelMetrics {
    pub secondary_size: f32,
    pub secondary_offset: f32,
    pub primary_size: f32,
    pub rel_pos_x: f32,
    pub rel_pos_y: f32,
    /// Gap between primary and extra line, in primary text sizes.
    pub rel_extra_dy: f32,
    pub extra_over_primary: f32,
    pub logo_rel_pos: f32,
    pub logo_size: f32,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            secondary_size: 0.6,
            secondary_offset: 0.2,
            primary_size: 0.75,
            rel_pos_x: 0.045,
            rel_pos_y: 0.035,
            rel_extra_dy: 1.2,
            extra_over_primary: 0.76,
            logo_rel_pos: 0.045,
            logo_size: 0.15,
        }
    }
}

/// Everything one labelling call needs besides the frame geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelConfig {
    pub preset: StylePreset,
    pub primary: String,
    pub secondary: Caption,
    pub extra: String,
    pub position: PositionCode,
    pub out_of_frame: bool,
    pub color_axis_2d: bool,
    pub draw_logo: bool,
    pub primary_face: FontFace,
    pub secondary_face: FontFace,
    pub extra_face: FontFace,
    pub color: skia::Color,
    pub metrics: LabelMetrics,
}

impl LabelConfig {
    fn base(preset: StylePreset, primary: String, secondary: Caption, position: PositionCode) -> Self {
        Self {
            preset,
            primary,
            secondary,
            extra: String::new(),
            position,
            out_of_frame: false,
            color_axis_2d: false,
            draw_logo: false,
            primary_face: FontFace::Bold,
            secondary_face: FontFace::Regular,
            extra_face: FontFace::Italic,
            color: skia::Color::BLACK,
            metrics: LabelMetrics::default(),
        }
    }

    /// Experiment name at `position`, luminosity caption for `period` in the corner.
    pub fn experiment(period: &str, captions: &CaptionTable, position: impl Into<PositionCode>) -> Self {
        let secondary = captions.lookup(period).into_owned();
        Self::base(StylePreset::Experiment, EXPERIMENT_NAME.to_string(), secondary, position.into())
    }

    /// Free `left` caption at `position`, `right` caption in the corner.
    pub fn captions(left: impl Into<String>, right: impl Into<String>, position: impl Into<PositionCode>) -> Self {
        Self::base(StylePreset::Captions, left.into(), Caption::new(right), position.into())
    }

    pub fn with_primary(mut self, text: impl Into<String>) -> Self {
        self.primary = text.into();
        self
    }
    pub fn with_extra(mut self, text: impl Into<String>) -> Self {
        self.extra = text.into();
        self
    }
    pub fn out_of_frame(mut self, on: bool) -> Self {
        self.out_of_frame = on;
        self
    }
    pub fn color_axis_2d(mut self, on: bool) -> Self {
        self.color_axis_2d = on;
        self
    }
    pub fn with_logo(mut self, on: bool) -> Self {
        self.draw_logo = on;
        self
    }
    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    /// Canvas style matching this configuration's preset and 2D flag.
    pub fn canvas_style(&self) -> CanvasStyle {
        CanvasStyle::for_preset(self.preset, self.color_axis_2d)
    }

    /// Frame geometry for a `width` x `height` canvas styled by this configuration.
    pub fn frame(&self, width: u32, height: u32) -> FrameGeometry {
        FrameGeometry::new(self.canvas_style().margins, width, height)
    }
}

/// Which string a text placement carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelRole {
    Secondary,
    Primary,
    Extra,
}

/// One text label ready for a draw-text primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub role: LabelRole,
    pub anchor: PointNdc,
    pub align: Align,
    /// Text height as a fraction of the canvas.
    pub size: f32,
    pub text: LabelText,
    pub color: skia::Color,
}

/// Logo image rectangle, aspect-corrected for non-square canvases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePlacement {
    pub rect: RectNdc,
}

/// Result of one layout call, in draw order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LabelLayout {
    pub texts: Vec<Placement>,
    pub logo: Option<ImagePlacement>,
}

impl LabelLayout {
    pub fn get(&self, role: LabelRole) -> Option<&Placement> {
        self.texts.iter().find(|p| p.role == role)
    }
}

/// Zone anchor for in-frame labels.
pub fn zone_anchor(margins: &Margins, position: PositionCode, metrics: &LabelMetrics) -> PointNdc {
    let (l, t, r) = (margins.left, margins.top, margins.right);
    let (fw, fh) = (margins.frame_width(), margins.frame_height());
    let x = match position.zone() {
        Zone::Left => l + metrics.rel_pos_x * fw,
        Zone::Center => l + 0.5 * fw,
        Zone::Right => (1.0 - r) - metrics.rel_pos_x * fw,
        Zone::Unmatched => {
            debug!("position code {}: units digit has no anchor rule, x stays 0", position.value());
            0.0
        }
    };
    let y = (1.0 - t) - metrics.rel_pos_y * fh;
    PointNdc::new(x, y)
}

/// Anchor of labels sitting just above the frame: `(x, (1-t) + offset*t)`.
fn above_frame(x: f32, t: f32, metrics: &LabelMetrics) -> PointNdc {
    PointNdc::new(x, (1.0 - t) + metrics.secondary_offset * t)
}

/// Logo rectangle anchored at its top-left corner.
pub fn logo_rect(frame: &FrameGeometry, metrics: &LabelMetrics) -> RectNdc {
    let m = &frame.margins;
    let aspect = frame.aspect();
    let x = m.left + metrics.logo_rel_pos * m.frame_width() * aspect;
    let y = (1.0 - m.top) - metrics.logo_rel_pos * m.frame_height();
    RectNdc::new(x, y - metrics.logo_size, x + metrics.logo_size / aspect, y)
}

/// Compute every placement for `config` on `frame`.
pub fn layout(config: &LabelConfig, frame: &FrameGeometry) -> LabelLayout {
    let m = &config.metrics;
    let margins = &frame.margins;
    if !margins.is_valid() {
        warn!("degenerate frame margins {:?}; labels may land off-canvas", margins);
    }
    let t = margins.top;
    let code = config.position;
    let zone_align = code.align();
    let primary_size = m.primary_size * t;
    let extra_size = m.extra_over_primary * primary_size;

    let mut out = LabelLayout::default();

    let mut secondary = LabelText::new();
    secondary.push(TextRun::new(config.secondary.text.clone(), config.secondary_face).scaled(config.secondary.scale));
    out.texts.push(Placement {
        role: LabelRole::Secondary,
        anchor: above_frame(1.0 - margins.right, t, m),
        align: Align::RIGHT_BOTTOM,
        size: m.secondary_size * t,
        text: secondary,
        color: config.color,
    });

    let mut primary = LabelText::plain(config.primary.clone(), config.primary_face);
    if code.is_sentinel() && !config.extra.is_empty() {
        primary.push(TextRun::new(format!(" {}", config.extra), FontFace::BoldItalic).scaled(m.extra_over_primary));
    }
    let extra = LabelText::plain(config.extra.clone(), config.extra_face);
    let anchor = zone_anchor(margins, code, m);

    if config.out_of_frame {
        out.texts.push(Placement {
            role: LabelRole::Primary,
            anchor: above_frame(margins.left, t, m),
            align: Align::LEFT_BOTTOM,
            size: primary_size,
            text: primary,
            color: config.color,
        });
        if !config.extra.is_empty() && !code.is_sentinel() {
            out.texts.push(Placement {
                role: LabelRole::Extra,
                anchor,
                align: zone_align,
                size: extra_size,
                text: extra,
                color: config.color,
            });
        }
    } else if config.draw_logo {
        out.logo = Some(ImagePlacement { rect: logo_rect(frame, m) });
    } else {
        out.texts.push(Placement {
            role: LabelRole::Primary,
            anchor,
            align: zone_align,
            size: primary_size,
            text: primary,
            color: config.color,
        });
        if !config.extra.is_empty() {
            out.texts.push(Placement {
                role: LabelRole::Extra,
                anchor: PointNdc::new(anchor.x, anchor.y - m.rel_extra_dy * primary_size),
                align: zone_align,
                size: extra_size,
                text: extra,
                color: config.color,
            });
        }
    }

    debug!(
        "layout code={} align={} out_of_frame={} logo={} -> {} text placement(s)",
        code.value(),
        zone_align.code(),
        config.out_of_frame,
        out.logo.is_some(),
        out.texts.len()
    );
    out
}
