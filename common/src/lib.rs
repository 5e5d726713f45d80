//! Platform-independent core of the FPV video overlay.
//!
//! This crate contains everything that does not touch hardware, shared
//! between the simulator and the RP2350 firmware:
//!
//! - [`framebuffer`]: Mask + level bit-plane `DrawTarget`
//! - [`legacy`]: Character-cell OSD chip emulation on top of the pixel overlay
//! - [`widgets`]: Horizon, scales, map, sticks, link statistics, frame guide
//! - [`mode`]: Flight / spectrograph selection by stick gestures
//! - [`render`]: Frame-synchronized render loop
//! - [`screens`]: Welcome screen
//! - [`platform`]: Traits the firmware and simulator implement
//! - [`config`], [`state`]: Configuration and per-frame snapshots
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of unit tests. Logging goes through `defmt`
//! or `log` depending on the enabled feature, or nowhere.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Must come first so the logging macros are visible to every module below.
mod fmt;

pub mod colors;
pub mod config;
pub mod framebuffer;
pub mod layout;
pub mod legacy;
pub mod mode;
pub mod platform;
pub mod render;
pub mod screens;
pub mod state;
pub mod styles;
pub mod units;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use colors::OsdColor;
pub use config::{FrameBorderConfig, LinkStatsConfig, OsdConfig};
pub use framebuffer::FrameBuffer;
pub use legacy::{CharacterDisplay, DeviceSettings, PixelCellDisplay};
pub use mode::{ModeMachine, OsdMode, SpecCommand};
pub use platform::{InputSource, LegacyOsd, SpectrographView, SyncOutcome, VideoGenerator, VideoStandard};
pub use render::{FRAME_SYNC_TIMEOUT_MS, FrameKind, RenderContext, RenderLoop, WELCOME_DURATION_MS};
pub use state::{Attitude, Flags, LinkStats, OsdInputs, RcSticks, Telemetry};
pub use units::Units;
pub use widgets::UserLogo;
