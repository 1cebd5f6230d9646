// File: crates/lumi-core/src/position.rs
// Summary: Two-digit position codes and the 9-way text alignment they resolve to.
// Notes:
// - The tens digit picks the horizontal alignment, the units digit picks the
//   horizontal anchor zone. Code 0 is the out-of-frame, left/bottom sentinel.
// - Codes outside the documented digits never fail: they keep the default
//   alignment (center/top) so existing figure scripts render unchanged.

use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VAlign {
    Bottom,
    Middle,
    Top,
}

impl HAlign {
    pub const fn digit(self) -> i32 {
        match self {
            HAlign::Left => 1,
            HAlign::Center => 2,
            HAlign::Right => 3,
        }
    }
}

impl VAlign {
    pub const fn digit(self) -> i32 {
        match self {
            VAlign::Bottom => 1,
            VAlign::Middle => 2,
            VAlign::Top => 3,
        }
    }
}

/// Text anchor selector; `code()` yields the classic `10*h + v` encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Align {
    pub h: HAlign,
    pub v: VAlign,
}

impl Align {
    pub const fn new(h: HAlign, v: VAlign) -> Self { Self { h, v } }

    /// Left/bottom (code 11).
    pub const LEFT_BOTTOM: Align = Align::new(HAlign::Left, VAlign::Bottom);
    /// Right/bottom (code 31).
    pub const RIGHT_BOTTOM: Align = Align::new(HAlign::Right, VAlign::Bottom);

    pub const fn code(self) -> i32 { 10 * self.h.digit() + self.v.digit() }
}

/// Horizontal anchor zone taken from the units digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Units digit 0 or 1 (negative codes land here too).
    Left,
    Center,
    Right,
    /// Units digit 4..=9: no anchor rule applies.
    Unmatched,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PositionCode(pub i32);

impl PositionCode {
    /// Out-of-frame, left-aligned sentinel.
    pub const OUT_OF_FRAME: PositionCode = PositionCode(0);
    pub const TOP_LEFT: PositionCode = PositionCode(11);

    pub const fn value(self) -> i32 { self.0 }
    pub const fn is_sentinel(self) -> bool { self.0 == 0 }

    /// Units digit, with truncating remainder semantics.
    pub const fn units(self) -> i32 { self.0 % 10 }
    /// Tens digit (truncating division).
    pub const fn tens(self) -> i32 { self.0 / 10 }

    pub fn zone(self) -> Zone {
        match self.units() {
            u if u <= 1 => Zone::Left,
            2 => Zone::Center,
            3 => Zone::Right,
            _ => Zone::Unmatched,
        }
    }

    /// Resolve the 9-way alignment for labels anchored by this code.
    pub fn align(self) -> Align {
        let mut h = HAlign::Center;
        let mut v = VAlign::Top;
        match self.tens() {
            0 | 1 => h = HAlign::Left,
            2 => h = HAlign::Center,
            3 => h = HAlign::Right,
            other => debug!("position code {}: tens digit {} keeps default alignment", self.0, other),
        }
        if self.is_sentinel() {
            h = HAlign::Left;
            v = VAlign::Bottom;
        }
        Align::new(h, v)
    }
}

impl From<i32> for PositionCode {
    fn from(v: i32) -> Self { PositionCode(v) }
}
