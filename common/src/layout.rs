//! Screen and cell-grid layout constants.
//!
//! The overlay is addressed in pixels, but the legacy OSD chip it replaces
//! addresses a 30-column character grid with 12x18 pixel cells. The pixel
//! resolution is chosen so that both views cover the same area: the grid has
//! 16 rows on PAL and 13 rows on NTSC.

use embedded_graphics::prelude::*;

// =============================================================================
// Character Grid
// =============================================================================

/// Width of one legacy character cell in pixels.
pub const CELL_WIDTH: i32 = 12;

/// Height of one legacy character cell in pixels.
pub const CELL_HEIGHT: i32 = 18;

/// Character columns per row.
pub const COLUMNS: u8 = 30;

/// Character rows on a PAL signal.
pub const ROWS_PAL: u8 = 16;

/// Character rows on an NTSC signal.
pub const ROWS_NTSC: u8 = 13;

/// Cells in a full PAL character screen.
pub const CELL_BUFFER_PAL: usize = COLUMNS as usize * ROWS_PAL as usize;

/// Size of the scratch screen buffer handed to legacy callers (PAL screen plus slack).
pub const SCRATCH_BUFFER_LEN: usize = CELL_BUFFER_PAL + 40;

const _: () = assert!(ROWS_NTSC < ROWS_PAL);

// =============================================================================
// Pixel Screen
// =============================================================================

/// Overlay width in pixels (same on both standards).
pub const SCREEN_WIDTH: u32 = COLUMNS as u32 * CELL_WIDTH as u32;

/// Overlay height in pixels on PAL.
pub const SCREEN_HEIGHT_PAL: u32 = ROWS_PAL as u32 * CELL_HEIGHT as u32;

/// Overlay height in pixels on NTSC.
pub const SCREEN_HEIGHT_NTSC: u32 = ROWS_NTSC as u32 * CELL_HEIGHT as u32;

/// Top-left pixel of a legacy character cell.
#[inline]
pub const fn cell_origin(col: u8, row: u8) -> Point { Point::new(col as i32 * CELL_WIDTH, row as i32 * CELL_HEIGHT) }

/// Anchor points of the drawable area, derived from the framebuffer size.
///
/// Widgets take their anchors from here instead of hard-coding a resolution,
/// because the height depends on the video standard detected at runtime.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScreenGeometry {
    pub width: i32,
    pub height: i32,
}

impl ScreenGeometry {
    pub const fn new(size: Size) -> Self {
        Self {
            width: size.width as i32,
            height: size.height as i32,
        }
    }

    /// Geometry of any target that knows its size.
    pub fn of<D: OriginDimensions>(display: &D) -> Self { Self::new(display.size()) }

    #[inline]
    pub const fn left(self) -> i32 { 0 }

    #[inline]
    pub const fn top(self) -> i32 { 0 }

    #[inline]
    pub const fn right(self) -> i32 { self.width - 1 }

    #[inline]
    pub const fn bottom(self) -> i32 { self.height - 1 }

    #[inline]
    pub const fn center_x(self) -> i32 { self.width / 2 }

    #[inline]
    pub const fn center_y(self) -> i32 { self.height / 2 }

    #[inline]
    pub const fn center(self) -> Point { Point::new(self.center_x(), self.center_y()) }
}
