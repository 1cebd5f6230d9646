// File: crates/lumi-core/src/theme.rs
// Summary: Light/Dark theming for annotated frame rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub color_axis: skia::Color,
    /// Label color readable on `background`.
    pub text: skia::Color,
}

impl Theme {
    /// White canvas, black frame and text: the publication default.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            frame: skia::Color::BLACK,
            color_axis: skia::Color::from_argb(255, 120, 120, 200),
            text: skia::Color::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            color_axis: skia::Color::from_argb(255, 64, 160, 255),
            text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
