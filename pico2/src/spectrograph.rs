//! Spectrograph placeholder for builds without the analyzer.
//!
//! Shows that the mode is active and which axis carries frequency, so the
//! stick gestures can be checked on the bench.

use embedded_graphics::prelude::*;
use osd_common::layout::ScreenGeometry;
use osd_common::styles::{HAlign, OsdFont, VAlign};
use osd_common::widgets::primitives::draw_text_outlined;
use osd_common::{OsdColor, SpecCommand, SpectrographView};

#[derive(Default)]
pub struct StatusSpectrograph {
    swapped: bool,
}

impl StatusSpectrograph {
    pub const fn new() -> Self { Self { swapped: false } }

    #[inline]
    pub const fn swapped(&self) -> bool { self.swapped }

    pub const fn axis_label(&self) -> &'static str { if self.swapped { "FREQ: Y AXIS" } else { "FREQ: X AXIS" } }
}

impl<D> SpectrographView<D> for StatusSpectrograph
where
    D: DrawTarget<Color = OsdColor> + OriginDimensions,
{
    fn draw(
        &mut self,
        display: &mut D,
        command: SpecCommand,
    ) {
        if command == SpecCommand::SwapAxis {
            self.swapped = !self.swapped;
        }
        let geom = ScreenGeometry::of(display);
        let center = geom.center();
        draw_text_outlined(display, "SPECTROGRAPH", center - Point::new(0, 8), OsdFont::Label, HAlign::Center, VAlign::Bottom);
        draw_text_outlined(display, self.axis_label(), center + Point::new(0, 8), OsdFont::Label, HAlign::Center, VAlign::Top);
    }
}
