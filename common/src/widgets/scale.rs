//! Vertical ticker-tape scale for altitude and speed.
//!
//! The track is fixed on screen; ticks scroll past it as the value changes
//! and the current value sits in a box next to the track. Callers convert
//! units before calling (see [`crate::units`]).

use core::fmt::Write;

use embedded_graphics::prelude::*;
use heapless::String;

use crate::colors::{BLACK, OsdColor};
use crate::layout::ScreenGeometry;
use crate::styles::{HAlign, OsdFont, VAlign};
use crate::widgets::primitives::{draw_filled_rect, draw_outlined_line, draw_outlined_polygon, draw_text_outlined};

/// Which side of the anchor the ticks extend to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickSide {
    /// Ticks grow leftwards, labels right-aligned (right screen edge).
    Left,
    /// Ticks grow rightwards, labels left-aligned (left screen edge).
    Right,
}

impl TickSide {
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickKind {
    Major,
    Minor,
}

/// Horizontal distance from the tick end to labels.
const TEXT_SPACING: i32 = 3;

/// Tape geometry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct VerticalScale {
    /// Track position (vertical center).
    pub anchor: Point,
    pub side: TickSide,
    /// Value span covered by the track.
    pub range: i32,
    /// Track height in pixels.
    pub height: i32,
    pub minor_step: i32,
    pub major_step: i32,
    pub minor_len: i32,
    pub major_len: i32,
    /// Length of the end-of-track ticks.
    pub bound_len: i32,
}

impl VerticalScale {
    const fn standard(
        anchor: Point,
        side: TickSide,
    ) -> Self {
        Self {
            anchor,
            side,
            range: 100,
            height: 120,
            minor_step: 10,
            major_step: 20,
            minor_len: 5,
            major_len: 8,
            bound_len: 11,
        }
    }

    /// Altitude tape on the right edge.
    pub const fn altitude(geom: ScreenGeometry) -> Self {
        Self::standard(Point::new(geom.right() - 20, geom.center_y()), TickSide::Left)
    }

    /// Speed tape on the left edge.
    pub const fn speed(geom: ScreenGeometry) -> Self {
        Self::standard(Point::new(geom.left() + 5, geom.center_y()), TickSide::Right)
    }

    /// Screen row of the tick for `tick` while the tape shows `value`.
    ///
    /// Larger values sit higher on screen for every side.
    #[inline]
    pub const fn tick_y(
        &self,
        value: i32,
        tick: i32,
    ) -> i32 {
        self.anchor.y + (value - tick) * self.height / self.range
    }

    /// Column where ticks of `kind` end.
    #[inline]
    pub const fn tick_end(
        &self,
        kind: TickKind,
    ) -> i32 {
        let len = match kind {
            TickKind::Major => self.major_len,
            TickKind::Minor => self.minor_len,
        };
        self.anchor.x + self.side.sign() * len
    }

    /// Label column nearest the track, and the alignment that keeps the
    /// text growing away from it.
    #[inline]
    pub const fn label_anchor(&self) -> (i32, HAlign) {
        let x = self.tick_end(TickKind::Major) + self.side.sign() * (TEXT_SPACING + 1);
        match self.side {
            TickSide::Right => (x, HAlign::Left),
            TickSide::Left => (x, HAlign::Right),
        }
    }

    /// Visible ticks for `value`, top to bottom.
    pub fn ticks(
        &self,
        value: i32,
    ) -> impl Iterator<Item = (i32, i32, TickKind)> + '_ {
        let half = self.range / 2;
        (-half..=half).filter_map(move |r| {
            let rr = r + half - value;
            let kind = if rr % self.major_step == 0 {
                TickKind::Major
            } else if rr % self.minor_step == 0 {
                TickKind::Minor
            } else {
                return None;
            };
            let tick = value - r;
            Some((tick, self.tick_y(value, tick), kind))
        })
    }

    pub fn draw<D>(
        &self,
        display: &mut D,
        value: i32,
    ) where
        D: DrawTarget<Color = OsdColor>,
    {
        let x = self.anchor.x;
        let sign = self.side.sign();
        let major_end = self.tick_end(TickKind::Major);
        let minor_end = self.tick_end(TickKind::Minor);
        let (label_x, label_align) = self.label_anchor();

        let mut label: String<12> = String::new();
        for (tick, y, kind) in self.ticks(value) {
            match kind {
                TickKind::Major => {
                    draw_outlined_line(display, Point::new(x, y), Point::new(major_end, y));
                    label.clear();
                    write!(label, "{tick}").ok();
                    draw_text_outlined(display, &label, Point::new(label_x, y), OsdFont::Label, label_align, VAlign::Middle);
                }
                TickKind::Minor => draw_outlined_line(display, Point::new(x, y), Point::new(minor_end, y)),
            }
        }

        // Track bounds.
        let bound_end = x + sign * self.bound_len;
        for y in [self.anchor.y - self.height / 2, self.anchor.y + self.height / 2] {
            draw_outlined_line(display, Point::new(x, y), Point::new(bound_end, y));
        }

        self.draw_value_box(display, value, major_end);
    }

    /// Boxed current value with a pointer toward the track.
    fn draw_value_box<D>(
        &self,
        display: &mut D,
        value: i32,
        major_end: i32,
    ) where
        D: DrawTarget<Color = OsdColor>,
    {
        let mut text: String<12> = String::new();
        write!(text, "{value:02}").ok();

        let char_size = OsdFont::Label.mono().character_size;
        let w = text.len() as i32 * char_size.width as i32;
        let h = char_size.height as i32;
        let y = self.anchor.y;

        let xx = match self.side {
            TickSide::Right => major_end + TEXT_SPACING,
            TickSide::Left => major_end - TEXT_SPACING - w,
        };
        let yy = y - h / 2;

        draw_filled_rect(display, Point::new(xx, yy), Point::new(xx + w + 2, yy + h + 2), BLACK);

        // Box outline with the pointer folded into the side facing the track.
        let (near, far) = match self.side {
            TickSide::Right => (xx, xx + w + 2),
            TickSide::Left => (xx + w + 2, xx),
        };
        let tip = near - self.side.sign() * (h / 2 + 1);
        let outline = [
            Point::new(far, yy),
            Point::new(near, yy),
            Point::new(tip, y),
            Point::new(near, yy + h + 2),
            Point::new(far, yy + h + 2),
        ];
        draw_outlined_polygon(display, &outline);

        draw_text_outlined(display, &text, Point::new(xx + w / 2 + 2, y + 1), OsdFont::Label, HAlign::Center, VAlign::Middle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Canvas;

    fn geom() -> ScreenGeometry { ScreenGeometry::new(Size::new(360, 288)) }

    #[test]
    fn test_presets() {
        let alt = VerticalScale::altitude(geom());
        assert_eq!(alt.anchor, Point::new(339, 144));
        assert_eq!(alt.side.sign(), -1);

        let speed = VerticalScale::speed(geom());
        assert_eq!(speed.anchor, Point::new(5, 144));
        assert_eq!(speed.side.sign(), 1);
    }

    #[test]
    fn test_tick_y_is_monotonic() {
        let scale = VerticalScale::altitude(geom());
        let mut prev = i32::MAX;
        for tick in -50..=50 {
            let y = scale.tick_y(0, tick);
            assert!(y < prev, "tick {tick} not above previous");
            prev = y;
        }
    }

    fn mirrored_pair() -> (VerticalScale, VerticalScale) {
        let right = VerticalScale {
            anchor: Point::new(180, 144),
            ..VerticalScale::speed(geom())
        };
        let left = VerticalScale {
            side: TickSide::Left,
            ..right
        };
        (right, left)
    }

    #[test]
    fn test_sides_mirror_geometry() {
        let (right, left) = mirrored_pair();
        let x = right.anchor.x;

        assert_eq!(right.tick_end(TickKind::Major), x + 8);
        assert_eq!(right.tick_end(TickKind::Minor), x + 5);
        for kind in [TickKind::Major, TickKind::Minor] {
            assert_eq!(right.tick_end(kind) - x, x - left.tick_end(kind));
        }

        let (right_x, right_align) = right.label_anchor();
        let (left_x, left_align) = left.label_anchor();
        assert_eq!(right_x - x, x - left_x);
        assert_eq!(right_x, x + 8 + TEXT_SPACING + 1);
        assert_eq!((right_align, left_align), (HAlign::Left, HAlign::Right));
    }

    #[test]
    fn test_sides_mirror_pixels() {
        let (right, left) = mirrored_pair();
        let mut right_canvas = Canvas::new(360, 288);
        right.draw(&mut right_canvas.fb(), 0);
        let mut left_canvas = Canvas::new(360, 288);
        left.draw(&mut left_canvas.fb(), 0);

        // Tick rows only, away from the value box around the center row.
        let (r, l) = (right_canvas.fb(), left_canvas.fb());
        for (_, y, kind) in right.ticks(0).filter(|&(_, y, _)| (y - 144).abs() > 10) {
            for dx in 0..=right.tick_end(kind) - 180 {
                assert_eq!(r.pixel(Point::new(180 + dx, y)), Some(crate::colors::WHITE), "right tick at {y}");
                assert_eq!(l.pixel(Point::new(180 - dx, y)), Some(crate::colors::WHITE), "left tick at {y}");
            }
        }
    }

    #[test]
    fn test_current_value_at_center() {
        let scale = VerticalScale::altitude(geom());
        assert_eq!(scale.tick_y(123, 123), 144);
        assert_eq!(scale.tick_y(0, 50), 144 - 60);
    }

    #[test]
    fn test_ticks_classified() {
        let scale = VerticalScale::speed(geom());
        let ticks: std::vec::Vec<_> = scale.ticks(0).collect();

        // Majors sit on odd multiples of ten: the tape is phased from its lower bound.
        assert!(ticks.contains(&(0, 144, TickKind::Minor)));
        assert!(ticks.contains(&(10, 132, TickKind::Major)));
        assert!(ticks.contains(&(20, 120, TickKind::Minor)));
        assert!(ticks.iter().all(|(t, _, _)| t % 10 == 0));
        assert_eq!(ticks.len(), 11);
    }

    #[test]
    fn test_ticks_follow_value() {
        let scale = VerticalScale::speed(geom());
        let ticks: std::vec::Vec<_> = scale.ticks(37).collect();
        assert!(ticks.iter().any(|&(t, _, k)| t == 50 && k == TickKind::Major));
        assert!(ticks.iter().any(|&(t, _, k)| t == 40 && k == TickKind::Minor));
        assert!(ticks.iter().all(|(t, _, _)| (-13..=87).contains(t)));
    }

    #[test]
    fn test_draw_scale() {
        let mut canvas = Canvas::new(360, 288);
        VerticalScale::altitude(geom()).draw(&mut canvas.fb(), 42);
        VerticalScale::speed(geom()).draw(&mut canvas.fb(), 7);
        assert!(canvas.fb().keyed_pixels() > 0);
    }
}
