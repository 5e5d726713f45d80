//! Per-frame input snapshots.
//!
//! Producers (attitude estimator, RC receiver, telemetry link, GPS) publish
//! these as plain `Copy` values; the renderer reads one [`OsdInputs`] per
//! frame. Fields are not guaranteed to come from the same instant.

use crate::config::{FrameBorderConfig, OsdConfig};

/// Attitude in tenths of a degree.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attitude {
    pub roll: i16,
    pub pitch: i16,
    pub yaw: i16,
}

/// Receiver link statistics.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStats {
    /// Link quality, percent.
    pub lq: u8,
    /// RSSI magnitude, displayed as negative dBm.
    pub rssi: u8,
    /// Signal-to-noise ratio, dB.
    pub snr: i8,
    pub tx_power_mw: u16,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Telemetry {
    pub link: LinkStats,
    /// The receiver reports extended link statistics.
    pub link_stats_available: bool,
    pub distance_to_home_m: u16,
    /// Degrees, absolute.
    pub direction_to_home_deg: i16,
    pub ground_speed_cm_s: u16,
    pub altitude_cm: i32,
    pub has_gps: bool,
    pub has_baro: bool,
}

/// RC channel values in microseconds (1000-2000, center 1500).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RcSticks {
    pub roll: u16,
    pub pitch: u16,
    pub yaw: u16,
    pub throttle: u16,
}

impl Default for RcSticks {
    /// Centered sticks, throttle down.
    fn default() -> Self {
        Self {
            roll: 1500,
            pitch: 1500,
            yaw: 1500,
            throttle: 1000,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flags {
    pub armed: bool,
    /// Configuration menu is open.
    pub menu_active: bool,
    /// Pilot switched the OSD off.
    pub osd_suppressed: bool,
    /// Arming or post-flight statistics screen is showing.
    pub arming_or_stats: bool,
}

/// Everything the renderer reads in one frame.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OsdInputs {
    pub attitude: Attitude,
    pub telemetry: Telemetry,
    pub sticks: RcSticks,
    pub flags: Flags,
    pub config: OsdConfig,
    /// Frame guide being edited in the menu, previewed while the menu is open.
    pub menu_frame: Option<FrameBorderConfig>,
}
