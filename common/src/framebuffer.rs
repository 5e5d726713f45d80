//! Bit-plane overlay framebuffer.
//!
//! The video generator owns the memory; [`FrameBuffer`] borrows it for one
//! render pass and implements `DrawTarget` on top. The buffer is split into
//! two equally sized planes, mask first, then level, each packed MSB-first
//! with one bit per pixel.
//!
//! Pixels outside the buffer are clipped silently, so drawing never fails.

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::prelude::*;

use crate::colors::OsdColor;

/// `DrawTarget` over a borrowed mask + level buffer.
pub struct FrameBuffer<'a> {
    mask: &'a mut [u8],
    level: &'a mut [u8],
    width: u32,
    height: u32,
    row_bytes: usize,
}

impl<'a> FrameBuffer<'a> {
    /// Bytes per row in one plane.
    #[inline]
    pub const fn row_bytes(width: u32) -> usize { (width as usize).div_ceil(8) }

    /// Total bytes (both planes) needed for a `width` x `height` overlay.
    #[inline]
    pub const fn buffer_len(
        width: u32,
        height: u32,
    ) -> usize {
        Self::row_bytes(width) * height as usize * 2
    }

    /// Wrap a buffer for a `size` overlay.
    ///
    /// If the buffer is too short the visible height shrinks to what fits.
    pub fn new(
        buffer: &'a mut [u8],
        size: Size,
    ) -> Self {
        let row_bytes = Self::row_bytes(size.width);
        let rows = if row_bytes == 0 {
            0
        } else {
            (buffer.len() / 2 / row_bytes).min(size.height as usize)
        };
        let plane = rows * row_bytes;
        let (mask, rest) = buffer.split_at_mut(plane);
        let (level, _) = rest.split_at_mut(plane);

        Self {
            mask,
            level,
            width: size.width,
            height: rows as u32,
            row_bytes,
        }
    }

    /// Byte offset and bit mask of a pixel, `None` when clipped.
    #[inline]
    fn locate(
        &self,
        point: Point,
    ) -> Option<(usize, u8)> {
        if point.x < 0 || point.y < 0 || point.x as u32 >= self.width || point.y as u32 >= self.height {
            return None;
        }
        let x = point.x as usize;
        Some((point.y as usize * self.row_bytes + x / 8, 0x80 >> (x % 8)))
    }

    /// Read back a pixel, `None` outside the buffer.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<OsdColor> {
        let (idx, bit) = self.locate(point)?;
        Some(if self.mask[idx] & bit == 0 {
            OsdColor::Transparent
        } else if self.level[idx] & bit == 0 {
            OsdColor::Black
        } else {
            OsdColor::White
        })
    }

    /// Write a single pixel, ignoring out-of-range points.
    pub fn set_pixel(
        &mut self,
        point: Point,
        color: OsdColor,
    ) {
        let Some((idx, bit)) = self.locate(point) else {
            return;
        };
        match color {
            OsdColor::Transparent => {
                self.mask[idx] &= !bit;
                self.level[idx] &= !bit;
            }
            OsdColor::Black => {
                self.mask[idx] |= bit;
                self.level[idx] &= !bit;
            }
            OsdColor::White => {
                self.mask[idx] |= bit;
                self.level[idx] |= bit;
            }
        }
    }

    /// Number of keyed (non-transparent) pixels.
    pub fn keyed_pixels(&self) -> usize { self.mask.iter().map(|b| b.count_ones() as usize).sum() }

    /// Mask plane as handed to the video generator.
    #[inline]
    pub fn mask_plane(&self) -> &[u8] { self.mask }

    /// Level plane as handed to the video generator.
    #[inline]
    pub fn level_plane(&self) -> &[u8] { self.level }
}

impl DrawTarget for FrameBuffer<'_> {
    type Color = OsdColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }

    /// Whole-plane fill, this runs once per frame.
    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let (mask, level) = match color {
            OsdColor::Transparent => (0x00, 0x00),
            OsdColor::Black => (0xFF, 0x00),
            OsdColor::White => (0xFF, 0xFF),
        };
        self.mask.fill(mask);
        self.level.fill(level);
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer<'_> {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    use super::*;

    #[test]
    fn test_buffer_len() {
        assert_eq!(FrameBuffer::buffer_len(360, 288), 45 * 288 * 2);
        assert_eq!(FrameBuffer::row_bytes(9), 2);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut buf = vec![0u8; FrameBuffer::buffer_len(16, 4)];
        let mut fb = FrameBuffer::new(&mut buf, Size::new(16, 4));

        fb.set_pixel(Point::new(3, 1), OsdColor::White);
        fb.set_pixel(Point::new(9, 2), OsdColor::Black);

        assert_eq!(fb.pixel(Point::new(3, 1)), Some(OsdColor::White));
        assert_eq!(fb.pixel(Point::new(9, 2)), Some(OsdColor::Black));
        assert_eq!(fb.pixel(Point::new(0, 0)), Some(OsdColor::Transparent));
        assert_eq!(fb.keyed_pixels(), 2);

        fb.set_pixel(Point::new(3, 1), OsdColor::Transparent);
        assert_eq!(fb.pixel(Point::new(3, 1)), Some(OsdColor::Transparent));
        assert_eq!(fb.keyed_pixels(), 1);
    }

    #[test]
    fn test_out_of_range_is_clipped() {
        let mut buf = vec![0u8; FrameBuffer::buffer_len(8, 8)];
        let mut fb = FrameBuffer::new(&mut buf, Size::new(8, 8));

        Line::new(Point::new(-5, 4), Point::new(20, 4))
            .into_styled(PrimitiveStyle::with_stroke(OsdColor::White, 1))
            .draw(&mut fb)
            .ok();

        assert_eq!(fb.keyed_pixels(), 8);
        assert_eq!(fb.pixel(Point::new(8, 4)), None);
        assert_eq!(fb.pixel(Point::new(-1, 4)), None);
    }

    #[test]
    fn test_clear() {
        let mut buf = vec![0u8; FrameBuffer::buffer_len(16, 2)];
        let mut fb = FrameBuffer::new(&mut buf, Size::new(16, 2));

        fb.clear(OsdColor::White).ok();
        assert_eq!(fb.keyed_pixels(), 32);
        assert_eq!(fb.pixel(Point::new(15, 1)), Some(OsdColor::White));

        fb.clear(OsdColor::Transparent).ok();
        assert_eq!(fb.keyed_pixels(), 0);
    }

    #[test]
    fn test_short_buffer_shrinks_height() {
        let mut buf = vec![0u8; FrameBuffer::buffer_len(16, 3)];
        let fb = FrameBuffer::new(&mut buf, Size::new(16, 10));
        assert_eq!(fb.size(), Size::new(16, 3));
    }
}
