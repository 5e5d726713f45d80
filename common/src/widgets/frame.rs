//! Framing guide for HD camera crops.
//!
//! Shows where a wider recording will be cropped: either a full rectangle
//! or four corner brackets around a centered region.

use embedded_graphics::prelude::*;

use crate::colors::{OsdColor, WHITE};
use crate::config::FrameBorderConfig;
use crate::layout::ScreenGeometry;
use crate::widgets::primitives::{draw_hline, draw_vline};

/// Corner bracket arm length.
pub const FRAME_CORNER_LEN: i32 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameStyle {
    #[default]
    Off,
    Full,
    Corners,
}

/// Inclusive corners of the frame, `None` when the style is `Off`.
///
/// A top-left coordinate outside the visible range resets to 0 on that axis
/// instead of clamping to the edge.
pub fn frame_corners(
    geom: ScreenGeometry,
    config: &FrameBorderConfig,
) -> Option<(Point, Point)> {
    if config.style == FrameStyle::Off {
        return None;
    }
    let (w, h) = (i32::from(config.width), i32::from(config.height));

    let mut x1 = geom.center_x() - w - i32::from(config.h_offset);
    if x1 < 0 || x1 > geom.right() {
        x1 = 0;
    }
    let mut y1 = geom.center_y() - h + i32::from(config.v_offset);
    if y1 < 0 || y1 > geom.bottom() {
        y1 = 0;
    }

    Some((Point::new(x1, y1), Point::new(x1 + 2 * w, y1 + 2 * h)))
}

pub fn draw_frame_border<D>(
    display: &mut D,
    geom: ScreenGeometry,
    config: &FrameBorderConfig,
) where
    D: DrawTarget<Color = OsdColor>,
{
    let Some((Point { x: x1, y: y1 }, Point { x: x2, y: y2 })) = frame_corners(geom, config) else {
        return;
    };

    if config.style == FrameStyle::Full {
        draw_hline(display, x1, x2, y1, WHITE);
        draw_hline(display, x1, x2, y2, WHITE);
        draw_vline(display, x1, y1, y2, WHITE);
        draw_vline(display, x2, y1, y2, WHITE);
        return;
    }

    let len = FRAME_CORNER_LEN;
    draw_hline(display, x1, x1 + len, y1, WHITE);
    draw_hline(display, x2 - len, x2, y1, WHITE);
    draw_hline(display, x1, x1 + len, y2, WHITE);
    draw_hline(display, x2 - len, x2, y2, WHITE);

    draw_vline(display, x1, y1, y1 + len, WHITE);
    draw_vline(display, x1, y2 - len, y2, WHITE);
    draw_vline(display, x2, y1, y1 + len, WHITE);
    draw_vline(display, x2, y2 - len, y2, WHITE);
}
