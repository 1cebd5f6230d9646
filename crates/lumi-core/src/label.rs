// File: crates/lumi-core/src/label.rs
// Summary: Label text model: plain-text runs tagged with a font face and relative scale.
// Notes:
// - Styling is carried as tags, never as markup embedded in the string; the
//   renderer maps each tag to a concrete font style.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontFace {
    pub const fn is_bold(self) -> bool { matches!(self, FontFace::Bold | FontFace::BoldItalic) }
    pub const fn is_italic(self) -> bool { matches!(self, FontFace::Italic | FontFace::BoldItalic) }
}

/// A run of text drawn with one face at `scale` times the label size.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub face: FontFace,
    pub scale: f32,
}

impl TextRun {
    pub fn new(text: impl Into<String>, face: FontFace) -> Self {
        Self { text: text.into(), face, scale: 1.0 }
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Ordered runs making up one label line.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LabelText {
    pub runs: Vec<TextRun>,
}

impl LabelText {
    pub fn new() -> Self { Self { runs: Vec::new() } }

    /// Single-run label.
    pub fn plain(text: impl Into<String>, face: FontFace) -> Self {
        Self { runs: vec![TextRun::new(text, face)] }
    }

    pub fn push(&mut self, run: TextRun) { self.runs.push(run); }

    /// True when no run carries any text.
    pub fn is_empty(&self) -> bool { self.runs.iter().all(|r| r.text.is_empty()) }

    /// Concatenated text of all runs, styling dropped.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}
