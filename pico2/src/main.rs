//! FPV OSD firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Draws the overlay into a static two-plane framebuffer once per video
//! field. The pixel scanout (PIO + DMA) reads that buffer and is not part
//! of this crate.
//!
//! # Architecture
//!
//! - Vsync task: waits for sync-separator edges, signals `FRAME_SYNC` and
//!   tracks the field period to detect PAL/NTSC
//! - Demo task: publishes synthetic snapshots through a `Watch`
//! - Main task: runs the render loop, logs frame rate and stack use
//!
//! # Pins
//!
//! - GPIO 2: vertical sync from the sync separator (active low)
//! - GPIO 3: overlay generator enable

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use cortex_m::register::msp;
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_sync::watch::{DynReceiver, DynSender, Watch};
use embassy_time::{Delay, Duration, Instant, Timer, with_timeout};
use osd_common::layout::{SCREEN_HEIGHT_PAL, SCREEN_WIDTH};
use osd_common::widgets::{USER_LOGO_LEN, USER_LOGO_WIDTH, UserLogo};
use osd_common::{DeviceSettings, FrameBuffer, InputSource, OsdInputs, RenderLoop, SyncOutcome, VideoGenerator, VideoStandard};
use osd_pico2::{FieldTimer, PicoElements, StatusSpectrograph, demo_inputs, restart_pulse};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

// =============================================================================
// Shared State
// =============================================================================

/// Raised by the vsync task on every field.
static FRAME_SYNC: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Detected video standard, see [`encode_standard`].
static VIDEO_STANDARD: AtomicU8 = AtomicU8::new(encode_standard(VideoStandard::Pal));

/// Latest snapshot from the demo task.
static SNAPSHOT: Watch<CriticalSectionRawMutex, OsdInputs, 1> = Watch::new();

/// Arming state mirrored for the legacy element layer.
static ARMED: AtomicBool = AtomicBool::new(false);

/// Overlay memory, sized for the taller PAL raster.
const FRAMEBUFFER_LEN: usize = FrameBuffer::buffer_len(SCREEN_WIDTH, SCREEN_HEIGHT_PAL);
static FRAMEBUFFER: StaticCell<[u8; FRAMEBUFFER_LEN]> = StaticCell::new();

/// Pilot logo slot, empty until an image is flashed in.
static USER_LOGO: [u8; USER_LOGO_LEN] = [0; USER_LOGO_LEN];

const fn encode_standard(standard: VideoStandard) -> u8 {
    match standard {
        VideoStandard::Ntsc => 0,
        VideoStandard::Pal => 1,
    }
}

const fn decode_standard(raw: u8) -> VideoStandard {
    if raw == 0 { VideoStandard::Ntsc } else { VideoStandard::Pal }
}

// =============================================================================
// Profiling
// =============================================================================

/// RP2350 RAM end; the main stack grows down from here.
const RAM_END: u32 = 0x2000_0000 + 512 * 1024;

/// Interval between frame-rate reports.
const REPORT_INTERVAL: Duration = Duration::from_secs(5);

fn stack_used() -> u32 { RAM_END.saturating_sub(msp::read()) }

// =============================================================================
// Tasks
// =============================================================================

#[embassy_executor::task]
async fn vsync_task(mut vsync: Input<'static>) {
    info!("Vsync task started");
    let mut timer = FieldTimer::new();

    loop {
        vsync.wait_for_falling_edge().await;
        FRAME_SYNC.signal(());

        if let Some(standard) = timer.edge(Instant::now().as_micros()) {
            info!("Video standard: {}", standard);
            VIDEO_STANDARD.store(encode_standard(standard), Ordering::Relaxed);
        }
    }
}

#[embassy_executor::task]
async fn demo_task(sender: DynSender<'static, OsdInputs>) {
    info!("Demo task started");

    loop {
        let inputs = demo_inputs(Instant::now().as_millis() as u32);
        ARMED.store(inputs.flags.armed, Ordering::Relaxed);
        sender.send(inputs);

        // ~100 Hz, faster than the field rate so every frame sees fresh data
        Timer::after_millis(10).await;
    }
}

// =============================================================================
// Platform Glue
// =============================================================================

struct PicoVideo {
    enable: Output<'static>,
}

impl VideoGenerator for PicoVideo {
    fn standard(&self) -> VideoStandard { decode_standard(VIDEO_STANDARD.load(Ordering::Relaxed)) }

    /// A low pulse on the enable line restarts the overlay generator.
    fn enable_output(&mut self) {
        restart_pulse(&mut self.enable, &mut Delay).ok();
    }

    async fn wait_frame(
        &mut self,
        timeout_ms: u32,
    ) -> SyncOutcome {
        match with_timeout(Duration::from_millis(u64::from(timeout_ms)), FRAME_SYNC.wait()).await {
            Ok(()) => SyncOutcome::Frame,
            Err(_) => SyncOutcome::TimedOut,
        }
    }
}

struct WatchInputs {
    receiver: DynReceiver<'static, OsdInputs>,
}

impl InputSource for WatchInputs {
    fn uptime_ms(&mut self) -> u32 { Instant::now().as_millis() as u32 }

    fn snapshot(&mut self) -> OsdInputs {
        // Non-blocking: defaults until the demo task has published once
        self.receiver.try_get().unwrap_or_default()
    }
}

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"osd-pico2"),
    embassy_rp::binary_info::rp_program_description!(c"FPV OSD overlay renderer"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("FPV OSD starting...");

    // cpu250-1v10: 250 MHz @ 1.10V
    #[cfg(feature = "cpu250-1v10")]
    let p = {
        use embassy_rp::clocks::{ClockConfig, CoreVoltage};
        use embassy_rp::config::Config;

        const FREQ_HZ: u32 = 250_000_000;

        let mut config = Config::default();
        config.clocks = ClockConfig::system_freq(FREQ_HZ).expect("Invalid overclock frequency");
        config.clocks.core_voltage = CoreVoltage::V1_10;
        info!("Overclock: 250 MHz @ 1.10V");
        embassy_rp::init(config)
    };

    #[cfg(not(feature = "cpu250-1v10"))]
    let p = embassy_rp::init(Default::default());

    let settings = DeviceSettings {
        clock_config: u8::from(cfg!(feature = "cpu250-1v10")),
        cpu_overclock: cfg!(feature = "cpu250-1v10"),
    };

    let vsync = Input::new(p.PIN_2, Pull::Up);
    let enable = Output::new(p.PIN_3, Level::High);

    spawner.spawn(vsync_task(vsync)).unwrap();
    info!("Vsync task spawned");

    let Some(receiver) = SNAPSHOT.dyn_receiver() else {
        warn!("Snapshot receiver unavailable");
        return;
    };
    spawner.spawn(demo_task(SNAPSHOT.dyn_sender())).unwrap();
    info!("Demo task spawned");

    let framebuffer = FRAMEBUFFER.init([0; FRAMEBUFFER_LEN]);
    let mut render_loop = RenderLoop::new(
        PicoVideo { enable },
        WatchInputs { receiver },
        PicoElements::new(&ARMED, settings),
        StatusSpectrograph::new(),
    )
    .with_user_logo(UserLogo::new(&USER_LOGO, USER_LOGO_WIDTH));

    let mut frames = 0u32;
    let mut last_report = Instant::now();

    info!("Render loop starting");
    loop {
        // Re-wrapped every frame so a standard change takes effect at once
        let size = render_loop.video().standard().screen_size();
        let mut overlay = FrameBuffer::new(framebuffer.as_mut_slice(), size);
        render_loop.iterate(&mut overlay).await;

        frames += 1;
        if last_report.elapsed() >= REPORT_INTERVAL {
            let fps_x10 = frames * 10_000 / last_report.elapsed().as_millis().max(1) as u32;
            info!(
                "{}.{} fps, mode {}, stack {} bytes",
                fps_x10 / 10,
                fps_x10 % 10,
                render_loop.mode(),
                stack_used()
            );
            frames = 0;
            last_report = Instant::now();
        }
    }
}
