// File: crates/lumi-core/src/style.rs
// Summary: Canvas style presets: frame margins and the color-scale axis reserved on 2D plots.

use crate::geometry::RectNdc;
use crate::types::Margins;

/// Which labelling routine a canvas is styled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StylePreset {
    /// Experiment name + luminosity/energy caption.
    #[default]
    Experiment,
    /// Free left/right captions.
    Captions,
}

/// Margins and 2D color-axis configuration handed to the plotting backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasStyle {
    pub margins: Margins,
    /// Significant digits kept on axis labels; `None` leaves the backend default.
    pub max_axis_digits: Option<u32>,
    /// Rectangle of the color-scale axis, when the preset pins one.
    pub color_axis: Option<RectNdc>,
}

impl CanvasStyle {
    pub fn for_preset(preset: StylePreset, color_axis_2d: bool) -> Self {
        let mut margins = Margins::new(0.18, 0.08, 0.05, 0.13);
        if !color_axis_2d {
            return Self { margins, max_axis_digits: None, color_axis: None };
        }
        margins.top = 0.07;
        let color_axis = match preset {
            StylePreset::Experiment => {
                margins.right = 0.15;
                None
            }
            StylePreset::Captions => {
                margins.right = 0.17;
                margins.left = 0.15;
                Some(RectNdc::new(0.835, 0.13, 0.875, 0.93))
            }
        };
        Self { margins, max_axis_digits: Some(4), color_axis }
    }
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self::for_preset(StylePreset::default(), false)
    }
}
