//! Animated stand-in for the gyro noise spectrograph.

use std::time::Instant;

use embedded_graphics::prelude::*;
use log::info;
use osd_common::colors::{BLACK, OsdColor, WHITE};
use osd_common::layout::ScreenGeometry;
use osd_common::styles::{HAlign, OsdFont, VAlign};
use osd_common::widgets::primitives::{draw_filled_rect, draw_hline, draw_text_outlined, draw_vline};
use osd_common::{SpecCommand, SpectrographView};

const BINS: i32 = 24;
const BAR_GAP: i32 = 2;
const MARGIN: i32 = 40;

/// Which screen axis carries frequency.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrequencyAxis {
    Horizontal,
    Vertical,
}

impl FrequencyAxis {
    #[inline]
    pub const fn swapped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Normalized magnitude of `bin` at time `t`: a motor peak drifting across
/// the band over a low noise floor.
pub fn magnitude(
    bin: i32,
    t: f32,
) -> f32 {
    let peak = (t * 0.4).sin().mul_add(0.35, 0.5) * BINS as f32;
    let distance = (bin as f32 - peak).abs();
    let floor = ((bin as f32).mul_add(1.7, t * 3.0).sin() * 0.5 + 0.5) * 0.15;
    (1.0 - distance / 4.0).max(0.0).max(floor)
}

pub struct DemoSpectrograph {
    start: Instant,
    axis: FrequencyAxis,
}

impl DemoSpectrograph {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            axis: FrequencyAxis::Horizontal,
        }
    }

    #[inline]
    pub const fn axis(&self) -> FrequencyAxis { self.axis }
}

impl Default for DemoSpectrograph {
    fn default() -> Self { Self::new() }
}

impl<D> SpectrographView<D> for DemoSpectrograph
where
    D: DrawTarget<Color = OsdColor> + OriginDimensions,
{
    fn draw(
        &mut self,
        display: &mut D,
        command: SpecCommand,
    ) {
        if command == SpecCommand::SwapAxis {
            self.axis = self.axis.swapped();
            info!("spectrograph frequency axis: {:?}", self.axis);
        }

        let geom = ScreenGeometry::of(display);
        let t = self.start.elapsed().as_secs_f32();
        let (left, top) = (MARGIN, MARGIN);
        let (right, bottom) = (geom.right() - MARGIN, geom.bottom() - MARGIN);

        draw_text_outlined(display, "SPECTROGRAPH", Point::new(geom.center_x(), 8), OsdFont::Label, HAlign::Center, VAlign::Top);

        // Axes along the left and bottom edges
        draw_vline(display, left - 1, top, bottom, WHITE);
        draw_hline(display, left - 1, right, bottom + 1, WHITE);

        let along = match self.axis {
            FrequencyAxis::Horizontal => right - left,
            FrequencyAxis::Vertical => bottom - top,
        };
        let across = match self.axis {
            FrequencyAxis::Horizontal => bottom - top,
            FrequencyAxis::Vertical => right - left,
        };
        let slot = along / BINS;

        for bin in 0..BINS {
            let level = (magnitude(bin, t) * across as f32) as i32;
            if level == 0 {
                continue;
            }
            let start = bin * slot;
            let end = start + slot - BAR_GAP;
            let (a, b) = match self.axis {
                FrequencyAxis::Horizontal => (Point::new(left + start, bottom - level), Point::new(left + end, bottom)),
                FrequencyAxis::Vertical => (Point::new(left, bottom - end), Point::new(left + level, bottom - start)),
            };
            draw_filled_rect(display, a - Point::new(1, 1), b + Point::new(1, 1), BLACK);
            draw_filled_rect(display, a, b, WHITE);
        }

        let label = match self.axis {
            FrequencyAxis::Horizontal => "FREQ >",
            FrequencyAxis::Vertical => "FREQ ^",
        };
        draw_text_outlined(display, label, Point::new(right, bottom + 6), OsdFont::Label, HAlign::Right, VAlign::Top);
    }
}
