//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, so they live here rather than in the
//! `no_std` common crate.

use std::time::Duration;

use osd_common::VideoStandard;

/// Field period of a PAL camera (50 Hz).
pub const FIELD_TIME_PAL: Duration = Duration::from_millis(20);

/// Field period of an NTSC camera (~60 Hz).
pub const FIELD_TIME_NTSC: Duration = Duration::from_millis(16);

/// How long the vsync thread goes silent when a dropout is injected.
/// Longer than the render loop's sync timeout so recovery kicks in.
pub const VSYNC_DROPOUT: Duration = Duration::from_millis(600);

/// Interval over which the status bar FPS figure is averaged.
pub const FPS_WINDOW: Duration = Duration::from_secs(1);

#[inline]
pub const fn field_time(standard: VideoStandard) -> Duration {
    match standard {
        VideoStandard::Ntsc => FIELD_TIME_NTSC,
        VideoStandard::Pal => FIELD_TIME_PAL,
    }
}
