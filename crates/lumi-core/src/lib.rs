// File: crates/lumi-core/src/lib.rs
// Summary: Core library entry point; exports label layout, caption tables, canvas styles and rendering.

pub mod caption;
pub mod columns;
pub mod error;
pub mod geometry;
pub mod label;
pub mod layout;
pub mod position;
pub mod render;
pub mod sink;
pub mod style;
pub mod text;
pub mod theme;
pub mod types;

pub use caption::{Caption, CaptionTable};
pub use columns::{Column, ColumnTable};
pub use error::{ColumnError, RenderError};
pub use geometry::{PointNdc, RectNdc};
pub use label::{FontFace, LabelText, TextRun};
pub use layout::{layout, ImagePlacement, LabelConfig, LabelLayout, LabelMetrics, LabelRole, Placement};
pub use position::{Align, HAlign, PositionCode, VAlign};
pub use render::{Figure, RenderOptions};
pub use sink::{annotate, DrawSink, RecordingSink};
pub use style::{CanvasStyle, StylePreset};
pub use text::{aligned_origin, TextExtent, TextShaper};
pub use theme::Theme;
pub use types::{FrameGeometry, Margins};
