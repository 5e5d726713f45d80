//! Collaborator traits implemented by each platform.
//!
//! The render loop only talks to hardware and to the rest of the flight
//! software through these seams: the firmware backs them with Embassy
//! primitives, the simulator with threads and synthetic data, tests with
//! scripted fakes.

use core::future::Future;

use embedded_graphics::prelude::Size;

use crate::layout::{ROWS_NTSC, ROWS_PAL, SCREEN_HEIGHT_NTSC, SCREEN_HEIGHT_PAL, SCREEN_WIDTH};
use crate::legacy::CharacterDisplay;
use crate::mode::SpecCommand;
use crate::state::OsdInputs;

/// Analog video standard detected on the camera input.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VideoStandard {
    Ntsc,
    #[default]
    Pal,
}

impl VideoStandard {
    /// Character rows of the legacy grid.
    #[inline]
    pub const fn rows(self) -> u8 {
        match self {
            Self::Ntsc => ROWS_NTSC,
            Self::Pal => ROWS_PAL,
        }
    }

    /// Overlay resolution.
    #[inline]
    pub const fn screen_size(self) -> Size {
        match self {
            Self::Ntsc => Size::new(SCREEN_WIDTH, SCREEN_HEIGHT_NTSC),
            Self::Pal => Size::new(SCREEN_WIDTH, SCREEN_HEIGHT_PAL),
        }
    }
}

/// Result of waiting for the next frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncOutcome {
    Frame,
    TimedOut,
}

/// Overlay video generator.
pub trait VideoGenerator {
    fn standard(&self) -> VideoStandard;

    /// (Re-)enable overlay output after sync was lost.
    fn enable_output(&mut self);

    /// Wait for the next frame-sync event, at most `timeout_ms`.
    fn wait_frame(
        &mut self,
        timeout_ms: u32,
    ) -> impl Future<Output = SyncOutcome>;
}

/// Source of per-frame snapshots.
pub trait InputSource {
    /// Milliseconds since boot.
    fn uptime_ms(&mut self) -> u32;

    fn snapshot(&mut self) -> OsdInputs;
}

/// Legacy element layout engine, drawing through the character-cell shim.
pub trait LegacyOsd {
    fn update(
        &mut self,
        device: &mut dyn CharacterDisplay,
        now_us: u32,
    );
}

/// Diagnostic spectrograph view.
pub trait SpectrographView<D> {
    fn draw(
        &mut self,
        display: &mut D,
        command: SpecCommand,
    );
}
