//! RC stick position indicators.

use embedded_graphics::prelude::*;

use crate::colors::{BLACK, OsdColor, WHITE};
use crate::layout::ScreenGeometry;
use crate::state::RcSticks;
use crate::widgets::primitives::{draw_filled_rect, draw_hline, draw_vline};

/// Track thickness.
pub const STICK_WIDTH: i32 = 2;

/// Track half-length.
pub const STICK_LENGTH: i32 = 20;

/// Dot size.
pub const STICK_BOX_SIZE: i32 = 4;

/// Dot travel from center at full deflection.
pub const STICK_TRAVEL: i32 = STICK_LENGTH - STICK_BOX_SIZE / 2 + 1;

/// Distance of each indicator from the bottom corners.
pub const STICK_MARGIN: i32 = 30;

/// RC channel center value.
pub const RC_CENTER: i32 = 1500;

/// Deflection from center treated as full travel.
pub const RC_HALF_RANGE: i32 = 500;

/// Channel pairing for the two indicators.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SticksDisplay {
    #[default]
    Off,
    /// Throttle on the left stick.
    Mode2,
    /// Throttle on the right stick.
    Mode1,
}

/// Channel deflection clamped to +/-500 about center.
#[inline]
pub fn rc_deflection(value: u16) -> i32 { (i32::from(value) - RC_CENTER).clamp(-RC_HALF_RANGE, RC_HALF_RANGE) }

/// Dot position for a stick centered at `center`.
pub fn stick_dot(
    center: Point,
    horizontal: u16,
    vertical: u16,
) -> Point {
    let scale = |v: u16| (STICK_TRAVEL * rc_deflection(v)) as f32 / RC_HALF_RANGE as f32;
    Point::new(
        (center.x as f32 + scale(horizontal)) as i32,
        (center.y as f32 - scale(vertical)) as i32,
    )
}

/// Draw one cross-shaped stick track with its position dot.
pub fn draw_stick<D>(
    display: &mut D,
    center: Point,
    horizontal: u16,
    vertical: u16,
) where
    D: DrawTarget<Color = OsdColor>,
{
    let Point { x, y } = center;
    let (w, l) = (STICK_WIDTH / 2, STICK_LENGTH);

    // Track body.
    draw_filled_rect(display, Point::new(x - l, y - w), Point::new(x + l - 1, y + w - 1), BLACK);
    draw_filled_rect(display, Point::new(x - w, y - l), Point::new(x + w - 1, y + l - 1), BLACK);

    // Track outline, arm by arm.
    draw_hline(display, x - l - 1, x - w - 1, y - w - 1, WHITE);
    draw_hline(display, x - l - 1, x - w - 1, y + w + 1, WHITE);
    draw_hline(display, x + w + 1, x + l + 1, y - w - 1, WHITE);
    draw_hline(display, x + w + 1, x + l + 1, y + w + 1, WHITE);
    draw_hline(display, x - w - 1, x + w + 1, y - l - 1, WHITE);
    draw_hline(display, x - w - 1, x + w + 1, y + l + 1, WHITE);

    draw_vline(display, x - w - 1, y - w - 1, y - l - 1, WHITE);
    draw_vline(display, x + w + 1, y - w - 1, y - l - 1, WHITE);
    draw_vline(display, x - w - 1, y + l + 1, y + w + 1, WHITE);
    draw_vline(display, x + w + 1, y + l + 1, y + w + 1, WHITE);
    draw_vline(display, x - l - 1, y - w - 1, y + w + 1, WHITE);
    draw_vline(display, x + l + 1, y - w - 1, y + w + 1, WHITE);

    let dot = stick_dot(center, horizontal, vertical);
    let b = STICK_BOX_SIZE / 2;
    draw_filled_rect(display, Point::new(dot.x - b - 1, dot.y - b - 1), Point::new(dot.x + b, dot.y + b), BLACK);
    draw_filled_rect(display, Point::new(dot.x - b, dot.y - b), Point::new(dot.x + b - 1, dot.y + b - 1), WHITE);
}

/// Draw both indicators in the bottom corners.
pub fn draw_sticks<D>(
    display: &mut D,
    geom: ScreenGeometry,
    mode: SticksDisplay,
    sticks: &RcSticks,
) where
    D: DrawTarget<Color = OsdColor>,
{
    let left = Point::new(geom.left() + STICK_MARGIN, geom.bottom() - STICK_MARGIN);
    let right = Point::new(geom.right() - STICK_MARGIN, geom.bottom() - STICK_MARGIN);

    let ((lh, lv), (rh, rv)) = match mode {
        SticksDisplay::Off => return,
        SticksDisplay::Mode2 => ((sticks.yaw, sticks.throttle), (sticks.roll, sticks.pitch)),
        SticksDisplay::Mode1 => ((sticks.yaw, sticks.pitch), (sticks.roll, sticks.throttle)),
    };
    draw_stick(display, left, lh, lv);
    draw_stick(display, right, rh, rv);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Canvas;

    const CENTER: Point = Point::new(50, 50);

    #[test]
    fn test_travel() {
        assert_eq!(STICK_TRAVEL, 19);
    }

    #[test]
    fn test_centered_sticks() {
        assert_eq!(stick_dot(CENTER, 1500, 1500), CENTER);
    }

    #[test]
    fn test_full_deflection() {
        assert_eq!(stick_dot(CENTER, 2000, 2000), Point::new(69, 31));
        assert_eq!(stick_dot(CENTER, 1000, 1000), Point::new(31, 69));
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(stick_dot(CENTER, 2400, 900), stick_dot(CENTER, 2000, 1000));
        assert_eq!(stick_dot(CENTER, 0, u16::MAX), stick_dot(CENTER, 1000, 2000));
    }

    #[test]
    fn test_draw_off_is_empty() {
        let mut canvas = Canvas::new(360, 288);
        let geom = ScreenGeometry::new(Size::new(360, 288));
        draw_sticks(&mut canvas.fb(), geom, SticksDisplay::Off, &RcSticks::default());
        assert_eq!(canvas.fb().keyed_pixels(), 0);
    }

    #[test]
    fn test_mode2_throttle_on_left() {
        let mut canvas = Canvas::new(360, 288);
        let geom = ScreenGeometry::new(Size::new(360, 288));
        let sticks = RcSticks {
            roll: 1500,
            pitch: 1500,
            yaw: 1500,
            throttle: 2000,
        };
        draw_sticks(&mut canvas.fb(), geom, SticksDisplay::Mode2, &sticks);

        // Left dot pushed to the top of its track, right dot centered.
        let fb = canvas.fb();
        assert_eq!(fb.pixel(Point::new(30, 257 - STICK_TRAVEL)), Some(WHITE));
        assert_eq!(fb.pixel(Point::new(329, 257)), Some(WHITE));
    }
}
