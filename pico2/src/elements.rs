//! Minimal legacy element layer for bench builds.
//!
//! The full flight software brings its own element layout engine; this one
//! only shows the arming state and uptime so the character-cell path is
//! exercised on hardware.

use core::fmt::Write;
use core::sync::atomic::{AtomicBool, Ordering};

use heapless::String;
use osd_common::{CharacterDisplay, DeviceSettings, LegacyOsd};

const UPTIME_COL: u8 = 1;
const STATE_COL: u8 = 21;

/// `"ON MM:SS"` from microseconds of uptime.
pub fn format_uptime(now_us: u32) -> String<12> {
    let secs = now_us / 1_000_000;
    let mut s = String::new();
    write!(s, "ON {:02}:{:02}", (secs / 60) % 100, secs % 60).ok();
    s
}

pub struct PicoElements {
    armed: &'static AtomicBool,
    settings: DeviceSettings,
    initialized: bool,
}

impl PicoElements {
    pub const fn new(
        armed: &'static AtomicBool,
        settings: DeviceSettings,
    ) -> Self {
        Self {
            armed,
            settings,
            initialized: false,
        }
    }
}

impl LegacyOsd for PicoElements {
    fn update(
        &mut self,
        device: &mut dyn CharacterDisplay,
        now_us: u32,
    ) {
        if !self.initialized {
            if !device.init(&self.settings) {
                return;
            }
            self.initialized = true;
        }
        if device.is_busy() {
            return;
        }

        let bottom = device.row_count() - 2;
        device.write_string(UPTIME_COL, bottom, &format_uptime(now_us));
        let state = if self.armed.load(Ordering::Relaxed) { "ARMED" } else { "DISARMED" };
        device.write_string(STATE_COL, bottom, state);
        device.draw_screen();
    }
}
