//! Boot splash shown for the first seconds after power-up.
//!
//! Main logo, the firmware version, and reminders of the stick gestures for
//! the menu and (when enabled) the spectrograph.

use embedded_graphics::prelude::*;

use crate::colors::OsdColor;
use crate::config::OsdConfig;
use crate::layout::ScreenGeometry;
use crate::styles::{HAlign, OsdFont, VAlign};
use crate::widgets::draw_main_logo;
use crate::widgets::primitives::draw_text_outlined;

pub const VERSION_LINE: &str = concat!("VERSION: ", env!("CARGO_PKG_VERSION"));
pub const MENU_HINT: &str = "MENU: THRT MID YAW LEFT PITCH UP";
pub const SPECTROGRAPH_HINT: &str = "SPECT: THRT MID YAW RIGHT PITCH UP";

/// Draw the full welcome screen.
pub fn draw_welcome_screen<D>(
    display: &mut D,
    config: &OsdConfig,
) where
    D: DrawTarget<Color = OsdColor> + OriginDimensions,
{
    let geom = ScreenGeometry::of(display);
    let cx = geom.center_x();

    draw_main_logo(display, Point::new(cx, geom.bottom() / 2 - 30));

    let hint = |display: &mut D, text: &str, y: i32| {
        draw_text_outlined(display, text, Point::new(cx, y), OsdFont::Label, HAlign::Center, VAlign::Top);
    };
    hint(display, VERSION_LINE, geom.bottom() - 60);
    hint(display, MENU_HINT, geom.bottom() - 35);
    if config.spectrograph_enabled {
        hint(display, SPECTROGRAPH_HINT, geom.bottom() - 25);
    }
}
