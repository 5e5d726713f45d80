//! Artificial horizon pitch ladder and center mark.
//!
//! The ladder is computed in two steps: [`Horizon::ladder()`] turns the
//! attitude into rung geometry (pure integer/float math, unit-testable), and
//! [`Horizon::draw()`] renders it. Rungs are spaced every 10 degrees; only the
//! rungs within `steps` of the current pitch bucket are shown.

use core::fmt::Write;

use embedded_graphics::prelude::*;
use heapless::{String, Vec};
use micromath::F32;

use crate::colors::OsdColor;
use crate::layout::ScreenGeometry;
use crate::styles::{HAlign, OsdFont, VAlign};
use crate::widgets::primitives::{draw_outlined_dashed_line, draw_outlined_line, draw_text_outlined};

// =============================================================================
// Constants
// =============================================================================

/// Degrees between ladder rungs.
pub const PITCH_STEP_DEG: i32 = 10;

/// Pitch (degrees) that maps to the edge of the ladder area.
pub const MAX_PITCH_DEG: i32 = 30;

/// Dash length of negative-pitch rungs.
const NEGATIVE_RUNG_DASH: u32 = 5;

/// Gap between a rung end and its label.
const LABEL_GAP: i32 = 4;

/// Upper bound on rungs per frame (`2 * MAX_PITCH_DEG / 10 + 2`).
pub const LADDER_CAPACITY: usize = 8;

const _: () = assert!(LADDER_CAPACITY as i32 >= 2 * (MAX_PITCH_DEG / PITCH_STEP_DEG + 1));

const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Center mark half-body.
pub const CENTER_BODY: i32 = 3;

/// Center mark wing length.
pub const CENTER_WING: i32 = 7;

/// Center mark rudder length.
pub const CENTER_RUDDER: i32 = 5;

// =============================================================================
// Ladder Geometry
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RungKind {
    /// The 0 degree line, drawn as two segments with a center gap.
    Horizon,
    /// Above the horizon: solid, caps bent toward the horizon.
    Positive,
    /// Below the horizon: dashed, caps bent away from the horizon.
    Negative,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rung {
    /// Label value in degrees, already wrapped to [-90, 90].
    pub angle: i32,
    pub center: Point,
    pub kind: RungKind,
}

/// Rung geometry for one attitude.
///
/// All deltas are expressed for the "left" end; the right end mirrors them
/// (`x + dx, y - dy`).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ladder {
    /// Ladder reference point after the sub-step pitch offset.
    pub origin: Point,
    /// Half-length of the horizon line, also the label offset.
    pub half: Point,
    /// Half-length of a pitch rung.
    pub rung: Point,
    /// End cap delta.
    pub cap: Point,
    pub rungs: Vec<Rung, LADDER_CAPACITY>,
}

/// Fold an angle past the vertical back into [-90, 90].
#[inline]
pub const fn wrap_ladder_angle(angle: i32) -> i32 {
    if angle > 90 {
        180 - angle
    } else if angle < -90 {
        -180 - angle
    } else {
        angle
    }
}

/// Pitch ladder renderer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Horizon {
    pub center: Point,
    /// Horizontal extent of the ladder area.
    pub width: i32,
    /// Vertical extent of the ladder area.
    pub height: i32,
    /// Rungs shown on each side of the current pitch bucket.
    pub steps: u8,
}

impl Horizon {
    /// Ladder sized for the whole screen.
    ///
    /// The width argument is derived from the bottom edge and the height
    /// argument from the right edge, which gives the familiar wide ladder on
    /// a 4:3 overlay.
    pub fn for_screen(
        geom: ScreenGeometry,
        steps: u8,
    ) -> Self {
        Self {
            center: geom.center(),
            width: (geom.bottom() as f32 * 0.8) as i32,
            height: (geom.right() as f32 * 0.8) as i32,
            steps,
        }
    }

    /// Compute rung placement for `roll`/`pitch` in tenths of a degree.
    pub fn ladder(
        &self,
        roll: i16,
        pitch: i16,
    ) -> Ladder {
        let width = self.width / 2;
        let height = self.height / 2;
        let (w, h) = (width as f32, height as f32);
        let max_pitch = MAX_PITCH_DEG as f32;

        let roll_rad = F32(f32::from(roll) / 10.0 * DEG_TO_RAD);
        let sin_roll = roll_rad.sin().0;
        let cos_roll = roll_rad.cos().0;

        let pitch = i32::from(pitch);
        let step_offset = pitch / (PITCH_STEP_DEG * 10);
        // Degrees the rungs sit away from their ideal position.
        let modulo_pitch = pitch as f32 / 10.0 - (step_offset * PITCH_STEP_DEG) as f32;

        let origin = Point::new(
            (self.center.x as f32 + w * (sin_roll * modulo_pitch / max_pitch)) as i32,
            (self.center.y as f32 + h * (cos_roll * modulo_pitch / max_pitch)) as i32,
        );

        let d_x = 3 * ((cos_roll * w / 2.0) as i32) / 4;
        let d_y = 3 * ((sin_roll * h / 2.0) as i32) / 4;
        let half = Point::new(d_x, d_y);
        let rung = Point::new(3 * d_x / 4, 3 * d_y / 4);

        let step = Point::new(
            (w * sin_roll * PITCH_STEP_DEG as f32 / max_pitch) as i32,
            (h * cos_roll * PITCH_STEP_DEG as f32 / max_pitch) as i32,
        );
        let cap = Point::new(step.x / 6, step.y / 6);

        let steps = i32::from(self.steps);
        let span = MAX_PITCH_DEG / PITCH_STEP_DEG;
        let mut rungs = Vec::new();
        for i in (-span - 1)..(span + 1) {
            let bucket = step_offset + i;
            if bucket < -steps || bucket > steps {
                continue;
            }
            let angle = wrap_ladder_angle(bucket * PITCH_STEP_DEG);
            let kind = match angle {
                0 => RungKind::Horizon,
                a if a > 0 => RungKind::Positive,
                _ => RungKind::Negative,
            };
            rungs
                .push(Rung {
                    angle,
                    center: origin - step * i,
                    kind,
                })
                .ok();
        }

        Ladder {
            origin,
            half,
            rung,
            cap,
            rungs,
        }
    }

    /// Draw the pitch ladder for `roll`/`pitch` in tenths of a degree.
    pub fn draw<D>(
        &self,
        display: &mut D,
        roll: i16,
        pitch: i16,
    ) where
        D: DrawTarget<Color = OsdColor>,
    {
        let ladder = self.ladder(roll, pitch);
        let Ladder { half, rung, cap, .. } = ladder;

        for r in &ladder.rungs {
            let c = r.center;
            let left = Point::new(c.x - rung.x, c.y + rung.y);
            let right = Point::new(c.x + rung.x, c.y - rung.y);

            match r.kind {
                RungKind::Horizon => {
                    draw_outlined_line(
                        display,
                        Point::new(c.x - half.x, c.y + half.y),
                        Point::new(c.x - half.x / 3, c.y + half.y / 3),
                    );
                    draw_outlined_line(
                        display,
                        Point::new(c.x + half.x / 3, c.y - half.y / 3),
                        Point::new(c.x + half.x, c.y - half.y),
                    );
                    continue;
                }
                RungKind::Negative => {
                    draw_outlined_dashed_line(display, left, right, NEGATIVE_RUNG_DASH);
                    draw_outlined_line(display, left, left - cap);
                    draw_outlined_line(display, right, right - cap);
                }
                RungKind::Positive => {
                    draw_outlined_line(display, left, right);
                    draw_outlined_line(display, left, left + cap);
                    draw_outlined_line(display, right, right + cap);
                }
            }

            let mut label: String<5> = String::new();
            write!(label, "{}", r.angle).ok();
            let left_label = Point::new(c.x - half.x - LABEL_GAP, c.y + half.y);
            let right_label = Point::new(c.x + half.x + LABEL_GAP, c.y - half.y);
            for pos in [left_label, right_label] {
                draw_text_outlined(display, &label, pos, OsdFont::Ladder, HAlign::Center, VAlign::Middle);
            }
        }
    }
}

/// Fixed aircraft symbol at `center`: two wings and a rudder.
pub fn draw_center_mark<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = OsdColor>,
{
    let Point { x, y } = center;
    draw_outlined_line(
        display,
        Point::new(x - CENTER_WING - CENTER_BODY, y),
        Point::new(x - CENTER_BODY, y),
    );
    draw_outlined_line(
        display,
        Point::new(x + 1 + CENTER_BODY, y),
        Point::new(x + 1 + CENTER_BODY + CENTER_WING, y),
    );
    draw_outlined_line(
        display,
        Point::new(x, y - CENTER_RUDDER - CENTER_BODY),
        Point::new(x, y - CENTER_BODY),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::test_support::Canvas;

    fn horizon(steps: u8) -> Horizon {
        Horizon {
            center: Point::new(180, 144),
            width: 228,
            height: 286,
            steps,
        }
    }

    #[test]
    fn test_wrap_ladder_angle() {
        assert_eq!(wrap_ladder_angle(80), 80);
        assert_eq!(wrap_ladder_angle(100), 80);
        assert_eq!(wrap_ladder_angle(-110), -70);
        assert_eq!(wrap_ladder_angle(-90), -90);
    }

    #[test]
    fn test_level_ladder() {
        let ladder = horizon(2).ladder(0, 0);
        assert_eq!(ladder.half.y, 0);
        assert!(ladder.half.x > 0);
        let angles: std::vec::Vec<i32> = ladder.rungs.iter().map(|r| r.angle).collect();
        assert_eq!(angles, [-20, -10, 0, 10, 20]);

        let zero = ladder.rungs.iter().find(|r| r.kind == RungKind::Horizon).unwrap();
        assert_eq!(zero.center, Point::new(180, 144));

        // Positive rungs sit above the horizon, negative below.
        for r in &ladder.rungs {
            match r.kind {
                RungKind::Positive => assert!(r.center.y < 144),
                RungKind::Negative => assert!(r.center.y > 144),
                RungKind::Horizon => {}
            }
        }
    }

    #[test]
    fn test_steps_limit_rungs() {
        assert_eq!(horizon(0).ladder(0, 0).rungs.len(), 1);
        assert_eq!(horizon(1).ladder(0, 0).rungs.len(), 3);
        assert_eq!(horizon(9).ladder(0, 0).rungs.len(), LADDER_CAPACITY);
    }

    #[test]
    fn test_pitch_shifts_horizon_down() {
        let level = horizon(2).ladder(0, 0);
        let pitched = horizon(2).ladder(0, 150);
        let y = |l: &Ladder| l.rungs.iter().find(|r| r.angle == 0).map(|r| r.center.y).unwrap();
        assert!(y(&pitched) > y(&level));
    }

    #[test]
    fn test_steep_pitch_wraps_labels() {
        let ladder = horizon(12).ladder(0, 850);
        assert!(ladder.rungs.iter().all(|r| r.angle <= 90));
        assert!(ladder.rungs.iter().any(|r| r.angle == 80));
    }

    #[test]
    fn test_rolled_ladder_tilts() {
        let ladder = horizon(2).ladder(300, 0);
        assert!(ladder.half.y > 0);
        assert!(ladder.half.x > 0);
    }

    #[test]
    fn test_origin_follows_roll_projection() {
        let h = horizon(2);
        let (half_w, half_h) = (f64::from(h.width / 2), f64::from(h.height / 2));

        for roll in [-1200i16, -450, 0, 300, 900, 1750] {
            for pitch in [-250i16, -55, 0, 45, 73, 199] {
                let ladder = h.ladder(roll, pitch);

                // Sub-step offset: pitch past the nearest rung toward zero.
                let offset = f64::from(pitch) / 10.0 - f64::from(i32::from(pitch) / 100 * 10);
                let theta = f64::from(roll) / 10.0 * core::f64::consts::PI / 180.0;
                let x = f64::from(h.center.x) + half_w * theta.sin() * offset / f64::from(MAX_PITCH_DEG);
                let y = f64::from(h.center.y) + half_h * theta.cos() * offset / f64::from(MAX_PITCH_DEG);

                assert!(
                    (f64::from(ladder.origin.x) - x).abs() < 1.5,
                    "roll {roll} pitch {pitch}: x {} vs {x}",
                    ladder.origin.x
                );
                assert!(
                    (f64::from(ladder.origin.y) - y).abs() < 1.5,
                    "roll {roll} pitch {pitch}: y {} vs {y}",
                    ladder.origin.y
                );
            }
        }
    }

    #[test]
    fn test_draw_horizon_and_center_mark() {
        let mut canvas = Canvas::new(360, 288);
        horizon(2).draw(&mut canvas.fb(), 0, 0);
        draw_center_mark(&mut canvas.fb(), Point::new(180, 144));

        let fb = canvas.fb();
        // Horizon segment left of center.
        assert_eq!(fb.pixel(Point::new(140, 144)), Some(WHITE));
        // Gap between the left horizon segment and the left wing.
        assert_ne!(fb.pixel(Point::new(168, 144)), Some(WHITE));
        // Rudder.
        assert_eq!(fb.pixel(Point::new(180, 140)), Some(WHITE));
    }
}
