//! Keys the two-plane overlay onto a synthetic camera picture for display.

use std::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use heapless::String;
use log::{error, info};
use osd_common::{FrameBuffer, FrameKind, OsdColor, VideoStandard};
use profont::PROFONT_9_POINT;

/// Height of the status bar below the video area.
pub const STATUS_BAR_HEIGHT: u32 = 14;

const SKY: Rgb888 = Rgb888::new(96, 128, 160);
const GROUND: Rgb888 = Rgb888::new(72, 84, 48);

/// Camera picture: sky over ground with a gently swaying horizon, slightly
/// darker towards the top like a real sensor's vignetting.
pub fn camera_pixel(
    point: Point,
    height: i32,
    t: f32,
) -> Rgb888 {
    let horizon = height / 2 + ((t * 0.5).sin() * 20.0) as i32;
    let base = if point.y < horizon { SKY } else { GROUND };
    let shade = (point.y * 24 / height.max(1)) as u8;
    Rgb888::new(
        base.r().saturating_sub(24 - shade),
        base.g().saturating_sub(24 - shade),
        base.b().saturating_sub(24 - shade),
    )
}

/// Draw `overlay` over the camera picture into `target`.
pub fn composite(
    target: &mut SimulatorDisplay<Rgb888>,
    overlay: &FrameBuffer<'_>,
    t: f32,
) {
    let size = overlay.size();
    let height = size.height as i32;
    let pixels = (0..height).flat_map(|y| (0..size.width as i32).map(move |x| Point::new(x, y))).map(|p| {
        let color = match overlay.pixel(p) {
            Some(OsdColor::White) => Rgb888::WHITE,
            Some(OsdColor::Black) => Rgb888::BLACK,
            _ => camera_pixel(p, height, t),
        };
        Pixel(p, color)
    });
    target.draw_iter(pixels).ok();
}

/// Figures shown in the status bar.
#[derive(Clone, Copy, Debug)]
pub struct Status {
    pub standard: VideoStandard,
    pub kind: FrameKind,
    pub fps: f32,
    pub reenables: u32,
}

pub fn status_line(status: &Status) -> String<64> {
    let standard = match status.standard {
        VideoStandard::Ntsc => "NTSC",
        VideoStandard::Pal => "PAL",
    };
    let kind = match status.kind {
        FrameKind::Suppressed => "OFF",
        FrameKind::Welcome => "WELCOME",
        FrameKind::Flight => "FLIGHT",
        FrameKind::Spectrograph => "SPECT",
    };
    let mut s = String::new();
    write!(s, "{standard} {kind} {:.1} FPS RE-EN {}", status.fps, status.reenables).ok();
    s
}

/// Status bar under the video area starting at `top`.
pub fn draw_status_bar(
    target: &mut SimulatorDisplay<Rgb888>,
    top: i32,
    status: &Status,
) {
    let width = target.size().width;
    Rectangle::new(Point::new(0, top), Size::new(width, STATUS_BAR_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::BLACK))
        .draw(target)
        .ok();

    let style = MonoTextStyle::new(&PROFONT_9_POINT, Rgb888::WHITE);
    Text::with_baseline(&status_line(status), Point::new(4, top + 2), style, Baseline::Top)
        .draw(target)
        .ok();
}

/// Save the window contents as `osd-NNNN.png` in the working directory.
pub fn save_screenshot(
    target: &SimulatorDisplay<Rgb888>,
    index: u32,
) {
    let settings = OutputSettingsBuilder::new().scale(2).build();
    let path = format!("osd-{index:04}.png");
    match target.to_rgb_output_image(&settings).save_png(&path) {
        Ok(()) => info!("saved {path}"),
        Err(err) => error!("saving {path} failed: {err}"),
    }
}
