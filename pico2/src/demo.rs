//! Synthetic flight data for bench testing without a flight controller.
//!
//! The demo task samples these at ~100 Hz and publishes them to the render
//! task. Values follow slow sine waves so every widget moves.

use micromath::F32;
use osd_common::widgets::{FrameStyle, SticksDisplay};
use osd_common::{Attitude, Flags, FrameBorderConfig, LinkStats, OsdConfig, OsdInputs, RcSticks, Telemetry};

/// Armed for this long out of every [`ARM_CYCLE_MS`].
pub const ARMED_MS: u32 = 40_000;
pub const ARM_CYCLE_MS: u32 = 60_000;

/// Arming screen (with logos) shown right after each arm.
pub const ARMING_SCREEN_MS: u32 = 1500;

#[inline]
fn wave(
    t: f32,
    freq: f32,
) -> f32 {
    F32(t * freq).sin().0
}

/// Bench configuration: everything visible. The wandering demo sticks
/// occasionally form the spectrograph gestures while disarmed.
pub fn demo_config() -> OsdConfig {
    OsdConfig {
        home_arrow: true,
        sticks: SticksDisplay::Mode2,
        spectrograph_enabled: true,
        frame: FrameBorderConfig {
            style: FrameStyle::Corners,
            ..FrameBorderConfig::default()
        },
        ..OsdConfig::default()
    }
}

/// Snapshot at `elapsed_ms` since boot.
pub fn demo_inputs(elapsed_ms: u32) -> OsdInputs {
    let t = elapsed_ms as f32 / 1000.0;

    let attitude = Attitude {
        roll: (300.0 * wave(t, 0.6)) as i16,
        pitch: (150.0 * wave(t, 0.35)) as i16,
        yaw: ((elapsed_ms / 10) % 3600) as i16,
    };

    let telemetry = Telemetry {
        link: LinkStats {
            lq: (55.0 + 45.0 * wave(t, 0.2)) as u8,
            rssi: (75.0 + 35.0 * wave(t, 0.2)) as u8,
            snr: (2.0 + 8.0 * wave(t, 0.3)) as i8,
            tx_power_mw: 100,
        },
        link_stats_available: true,
        distance_to_home_m: (300.0 + 280.0 * wave(t, 0.05)) as u16,
        direction_to_home_deg: ((elapsed_ms / 50) % 360) as i16,
        ground_speed_cm_s: (1200.0 + 1000.0 * wave(t, 0.25)) as u16,
        altitude_cm: (5000.0 + 4500.0 * wave(t, 0.1)) as i32,
        has_gps: true,
        has_baro: true,
    };

    let sticks = RcSticks {
        roll: (1500.0 + 400.0 * wave(t, 1.1)) as u16,
        pitch: (1500.0 + 400.0 * wave(t, 0.9)) as u16,
        yaw: (1500.0 + 300.0 * wave(t, 0.7)) as u16,
        throttle: (1400.0 + 300.0 * wave(t, 0.5)) as u16,
    };

    let phase = elapsed_ms % ARM_CYCLE_MS;
    OsdInputs {
        attitude,
        telemetry,
        sticks,
        flags: Flags {
            armed: phase < ARMED_MS,
            arming_or_stats: phase < ARMING_SCREEN_MS,
            ..Flags::default()
        },
        config: demo_config(),
        menu_frame: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_range() {
        for ms in (0..120_000).step_by(37) {
            let inputs = demo_inputs(ms);
            assert!(inputs.telemetry.link.lq <= 100, "lq at {ms}");
            assert!((-300..=300).contains(&inputs.attitude.roll), "roll at {ms}");
            assert!((0..3600).contains(&inputs.attitude.yaw), "yaw at {ms}");
            assert!((1000..=2000).contains(&inputs.sticks.roll), "roll stick at {ms}");
            assert!((1000..=2000).contains(&inputs.sticks.throttle), "throttle at {ms}");
        }
    }

    #[test]
    fn test_arming_cycle() {
        assert!(demo_inputs(0).flags.armed);
        assert!(demo_inputs(ARMED_MS - 1).flags.armed);
        assert!(!demo_inputs(ARMED_MS).flags.armed);
        assert!(demo_inputs(ARM_CYCLE_MS).flags.armed);
    }

    #[test]
    fn test_arming_screen_follows_arm() {
        assert!(demo_inputs(0).flags.arming_or_stats);
        assert!(demo_inputs(ARM_CYCLE_MS + ARMING_SCREEN_MS - 1).flags.arming_or_stats);
        assert!(!demo_inputs(ARMING_SCREEN_MS).flags.arming_or_stats);
        assert!(!demo_inputs(ARMED_MS).flags.arming_or_stats);
    }

    #[test]
    fn test_everything_visible() {
        let config = demo_inputs(0).config;
        assert!(config.home_arrow);
        assert_eq!(config.sticks, SticksDisplay::Mode2);
        assert_eq!(config.frame.style, FrameStyle::Corners);
        assert!(config.spectrograph_enabled);
    }
}
