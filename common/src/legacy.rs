//! Character-cell OSD chip emulation.
//!
//! The flight software's element layout engine was written against a
//! MAX7456-style character chip: a grid of 12x18 cells addressed by column
//! and row. [`CharacterDisplay`] captures that command set, and
//! [`PixelCellDisplay`] implements it by drawing text straight into the
//! pixel overlay. Chip-specific operations (inversion, brightness, font
//! upload, DMA status) have no pixel equivalent and succeed without effect.

use embedded_graphics::prelude::*;

use crate::colors::OsdColor;
use crate::layout::{SCRATCH_BUFFER_LEN, cell_origin};
use crate::platform::VideoStandard;
use crate::styles::{CellFont, HAlign, OsdFont, VAlign};
use crate::widgets::primitives::draw_text_outlined;

/// Settings the legacy caller passes at init. Accepted and ignored.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DeviceSettings {
    pub clock_config: u8,
    pub cpu_overclock: bool,
}

/// Command set of a character-cell OSD chip.
pub trait CharacterDisplay {
    fn init(
        &mut self,
        settings: &DeviceSettings,
    ) -> bool;

    fn invert(
        &mut self,
        invert: bool,
    );

    fn set_brightness(
        &mut self,
        black: u8,
        white: u8,
    );

    /// Whether a previous transfer is still running.
    fn is_busy(&self) -> bool;

    /// Push the shadow buffer to the chip.
    fn draw_screen(&mut self);

    /// Store a font character in non-volatile memory.
    fn write_nvm(
        &mut self,
        address: u8,
        data: &[u8],
    );

    /// Rows of the grid for the current video standard.
    fn row_count(&self) -> u8;

    fn write_string(
        &mut self,
        col: u8,
        row: u8,
        text: &str,
    );

    fn write_char(
        &mut self,
        col: u8,
        row: u8,
        c: u8,
    );

    fn clear_screen(&mut self);

    fn refresh_all(&mut self);

    /// Shadow screen buffer the caller may scribble into.
    fn screen_buffer(&mut self) -> &mut [u8];

    fn buffers_synced(&self) -> bool;
}

/// [`CharacterDisplay`] drawing immediately into the pixel overlay.
pub struct PixelCellDisplay<'a, D> {
    display: &'a mut D,
    standard: VideoStandard,
    font: CellFont,
    scratch: &'a mut [u8; SCRATCH_BUFFER_LEN],
}

impl<'a, D> PixelCellDisplay<'a, D>
where
    D: DrawTarget<Color = OsdColor>,
{
    pub fn new(
        display: &'a mut D,
        standard: VideoStandard,
        font: CellFont,
        scratch: &'a mut [u8; SCRATCH_BUFFER_LEN],
    ) -> Self {
        Self {
            display,
            standard,
            font,
            scratch,
        }
    }
}

impl<D> CharacterDisplay for PixelCellDisplay<'_, D>
where
    D: DrawTarget<Color = OsdColor>,
{
    fn init(
        &mut self,
        _settings: &DeviceSettings,
    ) -> bool {
        true
    }

    fn invert(
        &mut self,
        _invert: bool,
    ) {
    }

    fn set_brightness(
        &mut self,
        _black: u8,
        _white: u8,
    ) {
    }

    fn is_busy(&self) -> bool { false }

    fn draw_screen(&mut self) {}

    fn write_nvm(
        &mut self,
        _address: u8,
        _data: &[u8],
    ) {
    }

    fn row_count(&self) -> u8 { self.standard.rows() }

    fn write_string(
        &mut self,
        col: u8,
        row: u8,
        text: &str,
    ) {
        draw_text_outlined(
            self.display,
            text,
            cell_origin(col, row),
            OsdFont::Cell(self.font),
            HAlign::Left,
            VAlign::Top,
        );
    }

    fn write_char(
        &mut self,
        col: u8,
        row: u8,
        c: u8,
    ) {
        let mut buf = [0u8; 4];
        let text = char::from(c).encode_utf8(&mut buf);
        self.write_string(col, row, text);
    }

    fn clear_screen(&mut self) { self.display.clear(OsdColor::Transparent).ok(); }

    fn refresh_all(&mut self) {}

    fn screen_buffer(&mut self) -> &mut [u8] { self.scratch.as_mut_slice() }

    fn buffers_synced(&self) -> bool { true }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Canvas;

    fn with_display<F>(
        standard: VideoStandard,
        f: F,
    ) -> Canvas
    where
        F: FnOnce(&mut dyn CharacterDisplay),
    {
        let mut canvas = Canvas::new(360, standard.screen_size().height);
        let mut scratch = [0u8; SCRATCH_BUFFER_LEN];
        {
            let mut fb = canvas.fb();
            let mut device = PixelCellDisplay::new(&mut fb, standard, CellFont::default(), &mut scratch);
            f(&mut device);
        }
        canvas
    }

    #[test]
    fn test_row_count_follows_standard() {
        with_display(VideoStandard::Ntsc, |d| assert_eq!(d.row_count(), 13));
        with_display(VideoStandard::Pal, |d| assert_eq!(d.row_count(), 16));
    }

    #[test]
    fn test_status_queries() {
        with_display(VideoStandard::Pal, |d| {
            assert!(d.init(&DeviceSettings::default()));
            assert!(!d.is_busy());
            assert!(d.buffers_synced());
            assert_eq!(d.screen_buffer().len(), 520);
        });
    }

    #[test]
    fn test_noops_leave_overlay_untouched() {
        let mut canvas = with_display(VideoStandard::Pal, |d| {
            d.invert(true);
            d.set_brightness(0, 3);
            d.write_nvm(0x41, &[0u8; 54]);
            d.draw_screen();
            d.refresh_all();
        });
        assert_eq!(canvas.fb().keyed_pixels(), 0);
    }

    #[test]
    fn test_text_lands_in_cell() {
        let mut canvas = with_display(VideoStandard::Pal, |d| d.write_string(2, 3, "A"));

        let fb = canvas.fb();
        assert!(fb.keyed_pixels() > 0);
        // Everything sits within the cell plus the 1px outline.
        for y in 0..288 {
            for x in 0..360 {
                let inside = (23..=24 + 12).contains(&x) && (53..=54 + 18).contains(&y);
                if !inside {
                    assert_eq!(fb.pixel(Point::new(x, y)), Some(OsdColor::Transparent), "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_write_char_matches_write_string() {
        let mut by_char = with_display(VideoStandard::Pal, |d| d.write_char(5, 5, b'7'));
        let mut by_str = with_display(VideoStandard::Pal, |d| d.write_string(5, 5, "7"));
        assert_eq!(by_char.fb().mask_plane(), by_str.fb().mask_plane());
        assert_eq!(by_char.fb().level_plane(), by_str.fb().level_plane());
    }

    #[test]
    fn test_clear_screen() {
        let mut canvas = with_display(VideoStandard::Pal, |d| {
            d.write_string(0, 0, "HELLO");
            d.clear_screen();
        });
        assert_eq!(canvas.fb().keyed_pixels(), 0);
    }
}
