//! Runtime OSD configuration.
//!
//! The configuration is owned by the flight controller's settings store and
//! handed to the renderer by value every frame; the renderer never writes it.
//! `Default` carries the documented factory values.

use crate::styles::CellFont;
use crate::units::Units;
use crate::widgets::{FrameStyle, LinkStatPolicy, SticksDisplay};

/// HD crop guide.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameBorderConfig {
    pub style: FrameStyle,
    /// Half-width of the framed region in pixels.
    pub width: u16,
    /// Half-height of the framed region in pixels.
    pub height: u16,
    /// Positive values move the frame left.
    pub h_offset: i16,
    /// Positive values move the frame down.
    pub v_offset: i16,
}

impl Default for FrameBorderConfig {
    fn default() -> Self {
        Self {
            style: FrameStyle::Off,
            width: 100,
            height: 55,
            h_offset: 0,
            v_offset: 0,
        }
    }
}

/// Link statistics readout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatsConfig {
    pub enabled: bool,
    pub show_power: bool,
    pub rssi: LinkStatPolicy,
    pub snr: LinkStatPolicy,
    /// dB; `WhenSnrLow` triggers at or below this.
    pub snr_threshold: i8,
    /// (column, row) of the top-left cell.
    pub anchor: (u8, u8),
}

impl Default for LinkStatsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_power: true,
            rssi: LinkStatPolicy::WhenLqLow,
            snr: LinkStatPolicy::WhenSnrLow,
            snr_threshold: -2,
            anchor: (1, 1),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OsdConfig {
    /// Cell font index, clamped on use.
    pub font: u8,
    pub units: Units,
    /// Link quality (%) considered low.
    pub rssi_alarm: u8,
    pub artificial_horizon: bool,
    pub center_mark: bool,
    /// Ladder rungs shown each side of the current pitch.
    pub ahi_steps: u8,
    pub altitude_scale: bool,
    pub speed_scale: bool,
    pub map: bool,
    /// Distance shown at the map edge.
    pub map_max_dist_m: u16,
    pub home_arrow: bool,
    /// (column, row) of the home arrow cell.
    pub home_arrow_anchor: (u8, u8),
    pub sticks: SticksDisplay,
    pub spectrograph_enabled: bool,
    /// Main logo on the arming screen.
    pub show_logo_on_arm: bool,
    /// Pilot logo on the arming screen, when one is installed.
    pub show_pilot_logo: bool,
    pub frame: FrameBorderConfig,
    pub link_stats: LinkStatsConfig,
}

impl Default for OsdConfig {
    fn default() -> Self {
        Self {
            font: 0,
            units: Units::Metric,
            rssi_alarm: 20,
            artificial_horizon: true,
            center_mark: true,
            ahi_steps: 2,
            altitude_scale: true,
            speed_scale: true,
            map: true,
            map_max_dist_m: 500,
            home_arrow: false,
            home_arrow_anchor: (14, 2),
            sticks: SticksDisplay::Off,
            spectrograph_enabled: false,
            show_logo_on_arm: true,
            show_pilot_logo: true,
            frame: FrameBorderConfig::default(),
            link_stats: LinkStatsConfig::default(),
        }
    }
}

impl OsdConfig {
    #[inline]
    pub const fn cell_font(&self) -> CellFont { CellFont::from_index(self.font) }
}
