//! Overlay pixel colors.
//!
//! The video overlay generator keys two bit planes over the camera picture:
//! a mask plane selecting which pixels replace the video, and a level plane
//! selecting black or white for those pixels. [`OsdColor`] is the
//! `embedded-graphics` color for that pair, so every primitive, font and
//! widget in the crate can draw straight into the overlay.
//!
//! There is no intermediate gray: outlines are drawn black, content white,
//! and everything else stays transparent.
//!
//! Packed images use two bits per pixel, mask in the high bit and level in
//! the low bit, so `0b10` is black and `0b11` white. A set level without a
//! mask is transparent.

use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::pixelcolor::raw::{RawData, RawU2};

/// One overlay pixel.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum OsdColor {
    /// Camera video shows through (mask bit clear).
    #[default]
    Transparent,
    /// Keyed black (mask set, level clear). Used for outlines.
    Black,
    /// Keyed white (mask set, level set). Used for content.
    White,
}

impl PixelColor for OsdColor {
    type Raw = RawU2;
}

impl From<RawU2> for OsdColor {
    fn from(raw: RawU2) -> Self {
        match raw.into_inner() {
            0b10 => Self::Black,
            0b11 => Self::White,
            _ => Self::Transparent,
        }
    }
}

impl From<OsdColor> for RawU2 {
    fn from(color: OsdColor) -> Self {
        match color {
            OsdColor::Transparent => Self::new(0b00),
            OsdColor::Black => Self::new(0b10),
            OsdColor::White => Self::new(0b11),
        }
    }
}

impl OsdColor {
    /// Whether this pixel replaces the camera video.
    #[inline]
    pub const fn is_keyed(self) -> bool { !matches!(self, Self::Transparent) }
}

/// Video shows through.
pub const TRANSPARENT: OsdColor = OsdColor::Transparent;

/// Outline color.
pub const BLACK: OsdColor = OsdColor::Black;

/// Content color.
pub const WHITE: OsdColor = OsdColor::White;
