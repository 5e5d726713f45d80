//! Host-side helpers shared by the unit tests.

use std::collections::VecDeque;

use embedded_graphics::prelude::*;

use crate::colors::OsdColor;
use crate::framebuffer::FrameBuffer;
use crate::legacy::CharacterDisplay;
use crate::mode::SpecCommand;
use crate::platform::{InputSource, LegacyOsd, SpectrographView, SyncOutcome, VideoGenerator, VideoStandard};
use crate::state::OsdInputs;

/// Heap-backed overlay memory.
pub struct Canvas {
    buf: Vec<u8>,
    size: Size,
}

impl Canvas {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            buf: vec![0; FrameBuffer::buffer_len(width, height)],
            size: Size::new(width, height),
        }
    }

    pub fn fb(&mut self) -> FrameBuffer<'_> { FrameBuffer::new(&mut self.buf, self.size) }

    /// Pixels of exactly `color`.
    pub fn count(
        &mut self,
        color: OsdColor,
    ) -> usize {
        let size = self.size;
        let fb = self.fb();
        (0..size.height as i32)
            .flat_map(|y| (0..size.width as i32).map(move |x| Point::new(x, y)))
            .filter(|&p| fb.pixel(p) == Some(color))
            .count()
    }
}

/// Video generator replaying scripted sync outcomes, then always `Frame`.
pub struct ScriptedVideo {
    pub standard: VideoStandard,
    pub outcomes: VecDeque<SyncOutcome>,
    pub enable_count: usize,
    pub waits: Vec<u32>,
}

impl ScriptedVideo {
    pub fn new(outcomes: &[SyncOutcome]) -> Self {
        Self {
            standard: VideoStandard::Pal,
            outcomes: outcomes.iter().copied().collect(),
            enable_count: 0,
            waits: Vec::new(),
        }
    }
}

impl VideoGenerator for ScriptedVideo {
    fn standard(&self) -> VideoStandard { self.standard }

    fn enable_output(&mut self) { self.enable_count += 1; }

    async fn wait_frame(
        &mut self,
        timeout_ms: u32,
    ) -> SyncOutcome {
        self.waits.push(timeout_ms);
        self.outcomes.pop_front().unwrap_or(SyncOutcome::Frame)
    }
}

/// Fixed snapshot with a manually advanced clock.
pub struct FixedInputs {
    pub now_ms: u32,
    pub inputs: OsdInputs,
}

impl InputSource for FixedInputs {
    fn uptime_ms(&mut self) -> u32 { self.now_ms }

    fn snapshot(&mut self) -> OsdInputs { self.inputs }
}

/// Legacy layer writing one marker string per frame and recording timestamps.
#[derive(Default)]
pub struct RecordingLegacy {
    pub calls: Vec<u32>,
}

impl LegacyOsd for RecordingLegacy {
    fn update(
        &mut self,
        device: &mut dyn CharacterDisplay,
        now_us: u32,
    ) {
        self.calls.push(now_us);
        device.write_string(1, 1, "L");
    }
}

/// Spectrograph recording the commands it was drawn with.
#[derive(Default)]
pub struct RecordingSpectrograph {
    pub commands: Vec<SpecCommand>,
}

impl<D> SpectrographView<D> for RecordingSpectrograph {
    fn draw(
        &mut self,
        _display: &mut D,
        command: SpecCommand,
    ) {
        self.commands.push(command);
    }
}
