//! Synthetic flight data and keyboard-driven RC sticks.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use embedded_graphics_simulator::sdl2::Keycode;
use log::info;
use osd_common::widgets::{FrameStyle, SticksDisplay};
use osd_common::{Attitude, Flags, FrameBorderConfig, InputSource, LinkStats, OsdConfig, OsdInputs, RcSticks, Telemetry, Units};

const RC_MIN: u16 = 1000;
const RC_MID: u16 = 1500;
const RC_MAX: u16 = 2000;
const THROTTLE_STEP: u16 = 250;

/// Arming screen (with logos) shown right after arming.
pub const ARMING_SCREEN: Duration = Duration::from_millis(1500);

/// Key bindings, printed at start-up.
pub const KEY_HELP: &str = "I/K pitch, J/L yaw, A/D roll, W/S throttle, R arm, M menu, O osd off, U units, F frame, V \
                            vsync dropout, P screenshot";

fn signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Attitude in tenths of a degree; the craft banks and pitches gently while
/// the heading turns continuously.
pub fn synthetic_attitude(t: f32) -> Attitude {
    Attitude {
        roll: signal(t, -250.0, 250.0, 0.7) as i16,
        pitch: signal(t, -150.0, 150.0, 0.45) as i16,
        yaw: ((t * 150.0) as i32).rem_euclid(3600) as i16,
    }
}

pub fn synthetic_telemetry(t: f32) -> Telemetry {
    Telemetry {
        link: LinkStats {
            lq: signal(t, 5.0, 100.0, 0.2) as u8,
            rssi: signal(t, 40.0, 110.0, 0.2) as u8,
            snr: signal(t, -6.0, 10.0, 0.3) as i8,
            tx_power_mw: 250,
        },
        link_stats_available: true,
        distance_to_home_m: signal(t, 10.0, 600.0, 0.1) as u16,
        direction_to_home_deg: ((t * 20.0) as i32).rem_euclid(360) as i16,
        ground_speed_cm_s: signal(t, 200.0, 2500.0, 0.25) as u16,
        altitude_cm: signal(t, -500.0, 12000.0, 0.15) as i32,
        has_gps: true,
        has_baro: true,
    }
}

pub struct SimInputs {
    start: Instant,
    sticks: RcSticks,
    armed: Rc<Cell<bool>>,
    armed_at: Option<Instant>,
    flags: Flags,
    config: OsdConfig,
}

impl SimInputs {
    pub fn new() -> Self {
        let config = OsdConfig {
            home_arrow: true,
            sticks: SticksDisplay::Mode2,
            spectrograph_enabled: true,
            frame: FrameBorderConfig {
                style: FrameStyle::Corners,
                ..FrameBorderConfig::default()
            },
            ..OsdConfig::default()
        };
        Self {
            start: Instant::now(),
            sticks: RcSticks::default(),
            armed: Rc::new(Cell::new(false)),
            armed_at: None,
            flags: Flags::default(),
            config,
        }
    }

    /// Arming state shared with the legacy element layer.
    pub fn armed_handle(&self) -> Rc<Cell<bool>> { Rc::clone(&self.armed) }

    #[inline]
    pub const fn sticks(&self) -> RcSticks { self.sticks }

    pub fn key_down(
        &mut self,
        key: Keycode,
    ) {
        match key {
            Keycode::I => self.sticks.pitch = RC_MAX,
            Keycode::K => self.sticks.pitch = RC_MIN,
            Keycode::J => self.sticks.yaw = RC_MIN,
            Keycode::L => self.sticks.yaw = RC_MAX,
            Keycode::A => self.sticks.roll = RC_MIN,
            Keycode::D => self.sticks.roll = RC_MAX,
            Keycode::W => self.sticks.throttle = (self.sticks.throttle + THROTTLE_STEP).min(RC_MAX),
            Keycode::S => self.sticks.throttle = self.sticks.throttle.saturating_sub(THROTTLE_STEP).max(RC_MIN),
            Keycode::R => {
                self.armed.set(!self.armed.get());
                self.armed_at = self.armed.get().then(Instant::now);
                info!("{}", if self.armed.get() { "armed" } else { "disarmed" });
            }
            Keycode::M => {
                self.flags.menu_active = !self.flags.menu_active;
                info!("menu {}", if self.flags.menu_active { "open" } else { "closed" });
            }
            Keycode::O => self.flags.osd_suppressed = !self.flags.osd_suppressed,
            Keycode::U => {
                self.config.units = match self.config.units {
                    Units::Metric => Units::Imperial,
                    Units::Imperial => Units::Metric,
                };
            }
            Keycode::F => {
                self.config.frame.style = match self.config.frame.style {
                    FrameStyle::Off => FrameStyle::Corners,
                    FrameStyle::Corners => FrameStyle::Full,
                    FrameStyle::Full => FrameStyle::Off,
                };
            }
            _ => {}
        }
    }

    /// Spring-loaded axes return to center.
    pub fn key_up(
        &mut self,
        key: Keycode,
    ) {
        match key {
            Keycode::I | Keycode::K => self.sticks.pitch = RC_MID,
            Keycode::J | Keycode::L => self.sticks.yaw = RC_MID,
            Keycode::A | Keycode::D => self.sticks.roll = RC_MID,
            _ => {}
        }
    }

    fn elapsed_secs(&self) -> f32 { self.start.elapsed().as_secs_f32() }
}

impl Default for SimInputs {
    fn default() -> Self { Self::new() }
}

impl InputSource for SimInputs {
    fn uptime_ms(&mut self) -> u32 { self.start.elapsed().as_millis() as u32 }

    fn snapshot(&mut self) -> OsdInputs {
        let t = self.elapsed_secs();
        let armed = self.armed.get();
        let flags = Flags {
            armed,
            arming_or_stats: armed && self.armed_at.is_some_and(|at| at.elapsed() < ARMING_SCREEN),
            ..self.flags
        };
        let menu_frame = flags.menu_active.then_some(FrameBorderConfig {
            style: FrameStyle::Full,
            ..self.config.frame
        });
        OsdInputs {
            attitude: synthetic_attitude(t),
            telemetry: synthetic_telemetry(t),
            sticks: self.sticks,
            flags,
            config: self.config,
            menu_frame,
        }
    }
}
