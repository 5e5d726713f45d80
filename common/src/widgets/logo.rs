//! Packed logo images.
//!
//! The main logo is rasterized at compile time from block-letter rectangles
//! into the two-bit overlay image format. The pilot logo is supplied by the
//! platform as raw image data; an all-zero image counts as "no logo".

use embedded_graphics::image::ImageRaw;
use embedded_graphics::prelude::*;

use crate::colors::OsdColor;
use crate::config::OsdConfig;
use crate::layout::{ScreenGeometry, cell_origin};
use crate::widgets::primitives::draw_image;

// =============================================================================
// Main Logo
// =============================================================================

/// Main logo width, padded to whole bytes.
pub const MAIN_LOGO_WIDTH: u32 = 76;

pub const MAIN_LOGO_HEIGHT: u32 = 34;

const ROW_BYTES: usize = MAIN_LOGO_WIDTH as usize / 4;
const MAIN_LOGO_LEN: usize = ROW_BYTES * MAIN_LOGO_HEIGHT as usize;

const LETTER_WIDTH: usize = 20;
const LETTER_SPACING: usize = 6;
const SHADOW_OFFSET: usize = 2;

const PIXEL_BLACK: u8 = 0b10;
const PIXEL_WHITE: u8 = 0b11;

// Letter rectangles (dx, dy, width, height)
const LETTER_O: &[(usize, usize, usize, usize)] = &[(0, 3, 5, 26), (15, 3, 5, 26), (3, 0, 14, 5), (3, 27, 14, 5)];

const LETTER_S: &[(usize, usize, usize, usize)] = &[(2, 0, 18, 5), (0, 3, 5, 12), (2, 13, 16, 5), (15, 16, 5, 12), (0, 27, 18, 5)];

const LETTER_D: &[(usize, usize, usize, usize)] = &[(0, 0, 5, 32), (5, 0, 10, 5), (5, 27, 10, 5), (15, 4, 5, 24)];

const LETTERS: [&[(usize, usize, usize, usize)]; 3] = [LETTER_O, LETTER_S, LETTER_D];

const _: () = assert!(LETTERS.len() * (LETTER_WIDTH + LETTER_SPACING) - LETTER_SPACING + SHADOW_OFFSET <= MAIN_LOGO_WIDTH as usize);

const fn fill(
    data: &mut [u8; MAIN_LOGO_LEN],
    x: usize,
    y: usize,
    w: usize,
    h: usize,
    value: u8,
) {
    let mut row = y;
    while row < y + h {
        let mut col = x;
        while col < x + w {
            let shift = 6 - 2 * (col % 4);
            let i = row * ROW_BYTES + col / 4;
            data[i] = (data[i] & !(0b11 << shift)) | (value << shift);
            col += 1;
        }
        row += 1;
    }
}

/// Black shadow pass first, white letters on top.
const fn rasterize_main_logo() -> [u8; MAIN_LOGO_LEN] {
    let mut data = [0; MAIN_LOGO_LEN];
    let mut pass = 0;
    while pass < 2 {
        let (offset, value) = if pass == 0 { (SHADOW_OFFSET, PIXEL_BLACK) } else { (0, PIXEL_WHITE) };
        let mut l = 0;
        while l < LETTERS.len() {
            let base = l * (LETTER_WIDTH + LETTER_SPACING) + offset;
            let letter = LETTERS[l];
            let mut r = 0;
            while r < letter.len() {
                let (dx, dy, w, h) = letter[r];
                fill(&mut data, base + dx, offset + dy, w, h, value);
                r += 1;
            }
            l += 1;
        }
        pass += 1;
    }
    data
}

static MAIN_LOGO: [u8; MAIN_LOGO_LEN] = rasterize_main_logo();

pub fn main_logo() -> ImageRaw<'static, OsdColor> { ImageRaw::new(&MAIN_LOGO, MAIN_LOGO_WIDTH) }

/// Draw the main logo centered on `center`.
pub fn draw_main_logo<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = OsdColor>,
{
    draw_image(display, &main_logo(), center);
}

// =============================================================================
// Pilot Logo
// =============================================================================

/// Size of the pilot logo slot.
pub const USER_LOGO_WIDTH: u32 = 96;
pub const USER_LOGO_HEIGHT: u32 = 36;
pub const USER_LOGO_LEN: usize = (USER_LOGO_WIDTH * USER_LOGO_HEIGHT / 4) as usize;

/// Main logo center row on the arming screen, in pixels.
pub const ARMING_LOGO_Y: i32 = 35;

/// Cell the pilot logo is centered on during arming.
pub const PILOT_LOGO_CELL: (u8, u8) = (15, 10);

/// Pilot logo image plus whether it holds any pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UserLogo<'a> {
    image: ImageRaw<'a, OsdColor>,
    set: bool,
}

impl<'a> UserLogo<'a> {
    /// Wrap packed image data `width` pixels wide.
    pub fn new(
        data: &'a [u8],
        width: u32,
    ) -> Self {
        Self {
            image: ImageRaw::new(data, width),
            set: data.iter().any(|&b| b != 0),
        }
    }

    /// No pilot logo installed.
    pub const fn blank() -> Self {
        Self {
            image: ImageRaw::new(&[], 0),
            set: false,
        }
    }

    #[inline]
    pub const fn is_set(&self) -> bool { self.set }

    #[inline]
    pub const fn image(&self) -> &ImageRaw<'a, OsdColor> { &self.image }
}

impl Default for UserLogo<'_> {
    fn default() -> Self { Self::blank() }
}

/// Draw the pilot logo centered on the top-left corner of cell (`col`, `row`).
///
/// Nothing is drawn when no logo is installed.
pub fn draw_user_logo<D>(
    display: &mut D,
    logo: &UserLogo<'_>,
    col: u8,
    row: u8,
) where
    D: DrawTarget<Color = OsdColor>,
{
    if logo.is_set() {
        draw_image(display, logo.image(), cell_origin(col, row));
    }
}

/// Logos shown while the arming screen is up, each behind its own switch.
pub fn draw_arming_logos<D>(
    display: &mut D,
    config: &OsdConfig,
    logo: &UserLogo<'_>,
) where
    D: DrawTarget<Color = OsdColor> + OriginDimensions,
{
    let geom = ScreenGeometry::of(display);
    if config.show_logo_on_arm {
        draw_main_logo(display, Point::new(geom.center_x(), ARMING_LOGO_Y));
    }
    if config.show_pilot_logo {
        let (col, row) = PILOT_LOGO_CELL;
        draw_user_logo(display, logo, col, row);
    }
}
