//! FPV OSD simulator for desktop platforms.
//!
//! Runs the real render loop from `osd-common` against a threaded vsync
//! source and synthetic flight data, and shows the keyed overlay in an
//! `embedded-graphics-simulator` window.
//!
//! Pass `--ntsc` to start with an NTSC camera. Key bindings are listed in
//! [`inputs::KEY_HELP`] and logged at start-up.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod avatar;
mod compositor;
mod elements;
mod inputs;
mod spectrograph;
mod timing;
mod video;

use std::time::Instant;

use embassy_futures::block_on;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::Env;
use log::{error, info};
use osd_common::{FrameBuffer, FrameKind, RenderLoop, VideoStandard};

use crate::avatar::pilot_logo;
use crate::compositor::{STATUS_BAR_HEIGHT, Status, composite, draw_status_bar, save_screenshot};
use crate::elements::DemoElements;
use crate::inputs::{KEY_HELP, SimInputs};
use crate::spectrograph::DemoSpectrograph;
use crate::timing::FPS_WINDOW;
use crate::video::SimVideo;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let standard = if std::env::args().skip(1).any(|arg| arg == "--ntsc") {
        VideoStandard::Ntsc
    } else {
        VideoStandard::Pal
    };
    let size = standard.screen_size();

    let mut overlay_mem = vec![0u8; FrameBuffer::buffer_len(size.width, size.height)];
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(size.width, size.height + STATUS_BAR_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("FPV OSD Sim", &output_settings);

    display.clear(Rgb888::BLACK).ok();
    window.update(&display);

    let video = match SimVideo::start(standard) {
        Ok(video) => video,
        Err(err) => {
            error!("failed to start vsync thread: {err}");
            return;
        }
    };
    let inputs = SimInputs::new();
    let elements = DemoElements::new(inputs.armed_handle());
    let mut render_loop = RenderLoop::new(video, inputs, elements, DemoSpectrograph::new()).with_user_logo(pilot_logo());
    info!("keys: {KEY_HELP}");

    let start = Instant::now();
    let mut last_kind: Option<FrameKind> = None;
    let mut screenshots = 0u32;

    // FPS tracking
    let mut fps_frame_count = 0u32;
    let mut last_fps_calc = Instant::now();
    let mut current_fps = 0.0f32;

    loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::V => render_loop.video().inject_dropout(),
                        Keycode::P => {
                            save_screenshot(&display, screenshots);
                            screenshots += 1;
                        }
                        _ => render_loop.inputs_mut().key_down(keycode),
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => render_loop.inputs_mut().key_up(keycode),
                _ => {}
            }
        }

        let kind = {
            let mut overlay = FrameBuffer::new(&mut overlay_mem, size);
            let kind = block_on(render_loop.iterate(&mut overlay));
            composite(&mut display, &overlay, start.elapsed().as_secs_f32());
            kind
        };
        if last_kind != Some(kind) {
            info!("showing {kind:?}");
            last_kind = Some(kind);
        }

        fps_frame_count += 1;
        if last_fps_calc.elapsed() >= FPS_WINDOW {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        let status = Status {
            standard,
            kind,
            fps: current_fps,
            reenables: render_loop.video().reenables(),
        };
        draw_status_bar(&mut display, size.height as i32, &status);
        window.update(&display);
    }
}
