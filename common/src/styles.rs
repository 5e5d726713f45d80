//! Fonts and text alignment.
//!
//! Two kinds of text end up on the overlay: legacy character cells written
//! through the emulation shim, which use a selectable [`CellFont`], and the
//! small labels the pixel widgets draw themselves.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10, FONT_9X18_BOLD};
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT};

// =============================================================================
// Cell Fonts
// =============================================================================

/// Number of selectable cell fonts.
pub const CELL_FONT_COUNT: u8 = 3;

static CELL_FONTS: [&MonoFont<'static>; CELL_FONT_COUNT as usize] = [&PROFONT_12_POINT, &FONT_9X18_BOLD, &PROFONT_14_POINT];

/// Font used to render legacy character cells.
///
/// Out-of-range indices clamp to the last font instead of failing, so a
/// stale configuration value always renders something.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct CellFont(u8);

impl CellFont {
    pub const fn from_index(index: u8) -> Self {
        if index >= CELL_FONT_COUNT {
            Self(CELL_FONT_COUNT - 1)
        } else {
            Self(index)
        }
    }

    #[inline]
    pub const fn index(self) -> u8 { self.0 }

    #[inline]
    pub fn mono(self) -> &'static MonoFont<'static> { CELL_FONTS[self.0 as usize] }
}

// =============================================================================
// Widget Fonts
// =============================================================================

/// Font selection for widget text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OsdFont {
    /// Horizon ladder labels and map marker.
    Ladder,
    /// Scale readouts, link statistics detail lines, welcome hints.
    Label,
    /// Same font as the legacy character cells.
    Cell(CellFont),
}

impl OsdFont {
    pub fn mono(self) -> &'static MonoFont<'static> {
        match self {
            Self::Ladder => &FONT_5X8,
            Self::Label => &FONT_6X10,
            Self::Cell(font) => font.mono(),
        }
    }
}

// =============================================================================
// Alignment
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

impl From<HAlign> for Alignment {
    fn from(align: HAlign) -> Self {
        match align {
            HAlign::Left => Self::Left,
            HAlign::Center => Self::Center,
            HAlign::Right => Self::Right,
        }
    }
}

impl From<VAlign> for Baseline {
    fn from(align: VAlign) -> Self {
        match align {
            VAlign::Top => Self::Top,
            VAlign::Middle => Self::Middle,
            VAlign::Bottom => Self::Bottom,
        }
    }
}

/// Text style anchoring the given point at (`h`, `v`).
pub fn text_style(
    h: HAlign,
    v: VAlign,
) -> TextStyle {
    TextStyleBuilder::new().alignment(h.into()).baseline(v.into()).build()
}
