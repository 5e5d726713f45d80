//! Demo stand-in for the flight controller's legacy element layout.
//!
//! Writes a handful of cell-grid elements the way the legacy layer would on
//! a character OSD chip: battery voltage, flight timer, and a warning while
//! disarmed.

use std::cell::Cell;
use std::fmt::Write;
use std::rc::Rc;

use heapless::String;
use osd_common::{CharacterDisplay, LegacyOsd};

const VOLTAGE_COL: u8 = 22;
const TIMER_COL: u8 = 22;
const WARNING_COL: u8 = 11;

/// `"NN.NV"` from tenths of a volt.
pub fn format_voltage(decivolts: u16) -> String<8> {
    let mut s = String::new();
    write!(s, "{}.{}V", decivolts / 10, decivolts % 10).ok();
    s
}

/// `"MM:SS"`, minutes wrap at 100.
pub fn format_timer(secs: u32) -> String<8> {
    let mut s = String::new();
    write!(s, "{:02}:{:02}", (secs / 60) % 100, secs % 60).ok();
    s
}

/// Sagging 4S pack between 16.8 V and 14.0 V over ten minutes.
pub fn pack_voltage(now_us: u32) -> u16 {
    let secs = now_us / 1_000_000;
    168u16.saturating_sub((secs % 600 * 28 / 600) as u16)
}

pub struct DemoElements {
    armed: Rc<Cell<bool>>,
    armed_at_us: Option<u32>,
}

impl DemoElements {
    pub const fn new(armed: Rc<Cell<bool>>) -> Self {
        Self {
            armed,
            armed_at_us: None,
        }
    }

    fn flight_secs(
        &mut self,
        now_us: u32,
    ) -> u32 {
        if self.armed.get() {
            let since = *self.armed_at_us.get_or_insert(now_us);
            now_us.wrapping_sub(since) / 1_000_000
        } else {
            self.armed_at_us = None;
            0
        }
    }
}

impl LegacyOsd for DemoElements {
    fn update(
        &mut self,
        device: &mut dyn CharacterDisplay,
        now_us: u32,
    ) {
        if device.is_busy() {
            return;
        }
        let rows = device.row_count();

        device.write_string(VOLTAGE_COL, 1, &format_voltage(pack_voltage(now_us)));

        let secs = self.flight_secs(now_us);
        device.write_string(TIMER_COL, rows - 2, &format_timer(secs));

        if !self.armed.get() {
            device.write_string(WARNING_COL, rows / 2 + 2, "DISARMED");
        }
    }
}
