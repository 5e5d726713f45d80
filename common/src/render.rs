//! Frame-synchronized render loop.
//!
//! One iteration per video frame:
//!
//! 1. Wait for frame sync (bounded by [`FRAME_SYNC_TIMEOUT_MS`]); on timeout
//!    re-enable the video output and render anyway.
//! 2. Read uptime and the input snapshot, clear the overlay.
//! 3. Stop if the pilot suppressed the OSD.
//! 4. Evaluate mode gestures.
//! 5. During the first [`WELCOME_DURATION_MS`] show only the welcome screen.
//!    Once that has passed it never comes back, even when uptime wraps.
//! 6. Otherwise draw the flight overlay or the spectrograph, never both.
//!    The arming screen adds the main and pilot logos to the flight overlay.
//!
//! All state the loop carries between frames lives in [`RenderContext`].

use embedded_graphics::prelude::*;

use crate::colors::OsdColor;
use crate::layout::{SCRATCH_BUFFER_LEN, ScreenGeometry};
use crate::legacy::PixelCellDisplay;
use crate::mode::{ModeMachine, OsdMode};
use crate::platform::{InputSource, LegacyOsd, SpectrographView, SyncOutcome, VideoGenerator};
use crate::screens::draw_welcome_screen;
use crate::state::OsdInputs;
use crate::widgets::{UserLogo, draw_arming_logos, draw_frame_border, draw_local_overlay};

/// Longest wait for frame sync before the output is re-enabled.
pub const FRAME_SYNC_TIMEOUT_MS: u32 = 500;

/// Uptime during which the welcome screen replaces every overlay.
pub const WELCOME_DURATION_MS: u32 = 7000;

/// What a render iteration put on screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameKind {
    Suppressed,
    Welcome,
    Flight,
    Spectrograph,
}

/// Loop-owned state.
pub struct RenderContext {
    pub mode: ModeMachine,
    /// Shadow buffer handed to the legacy layer.
    pub scratch: [u8; SCRATCH_BUFFER_LEN],
    /// Set on the first frame past the welcome window.
    pub welcome_done: bool,
    pub user_logo: UserLogo<'static>,
}

impl RenderContext {
    pub const fn new() -> Self {
        Self {
            mode: ModeMachine::new(),
            scratch: [0; SCRATCH_BUFFER_LEN],
            welcome_done: false,
            user_logo: UserLogo::blank(),
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self { Self::new() }
}

pub struct RenderLoop<V, I, L, S> {
    video: V,
    inputs: I,
    legacy: L,
    spectrograph: S,
    ctx: RenderContext,
}

impl<V, I, L, S> RenderLoop<V, I, L, S>
where
    V: VideoGenerator,
    I: InputSource,
    L: LegacyOsd,
{
    pub fn new(
        video: V,
        inputs: I,
        legacy: L,
        spectrograph: S,
    ) -> Self {
        Self {
            video,
            inputs,
            legacy,
            spectrograph,
            ctx: RenderContext::new(),
        }
    }

    /// Install the pilot logo shown on the arming screen.
    #[must_use]
    pub fn with_user_logo(
        mut self,
        logo: UserLogo<'static>,
    ) -> Self {
        if logo.is_set() {
            info!("pilot logo installed");
        }
        self.ctx.user_logo = logo;
        self
    }

    #[inline]
    pub fn mode(&self) -> OsdMode { self.ctx.mode.mode() }

    pub fn video(&self) -> &V { &self.video }

    pub fn inputs_mut(&mut self) -> &mut I { &mut self.inputs }

    pub fn legacy(&self) -> &L { &self.legacy }

    pub fn spectrograph(&self) -> &S { &self.spectrograph }

    /// Render one frame.
    pub async fn iterate<D>(
        &mut self,
        display: &mut D,
    ) -> FrameKind
    where
        D: DrawTarget<Color = OsdColor> + OriginDimensions,
        S: SpectrographView<D>,
    {
        if self.video.wait_frame(FRAME_SYNC_TIMEOUT_MS).await == SyncOutcome::TimedOut {
            warn!("no frame sync for {} ms, re-enabling video output", FRAME_SYNC_TIMEOUT_MS);
            self.video.enable_output();
        }

        let now_ms = self.inputs.uptime_ms();
        let inputs = self.inputs.snapshot();
        display.clear(OsdColor::Transparent).ok();

        if inputs.flags.osd_suppressed {
            return FrameKind::Suppressed;
        }

        let command = self.ctx.mode.update(
            &inputs.sticks,
            inputs.flags.armed,
            inputs.config.spectrograph_enabled,
            now_ms,
        );

        if !self.ctx.welcome_done {
            if now_ms < WELCOME_DURATION_MS {
                draw_welcome_screen(display, &inputs.config);
                return FrameKind::Welcome;
            }
            self.ctx.welcome_done = true;
        }

        match self.ctx.mode.mode() {
            OsdMode::Flight => {
                self.draw_flight(display, &inputs, now_ms);
                FrameKind::Flight
            }
            OsdMode::Spectrograph => {
                self.spectrograph.draw(display, command);
                FrameKind::Spectrograph
            }
        }
    }

    /// Render frames forever.
    pub async fn run<D>(
        &mut self,
        display: &mut D,
    ) -> !
    where
        D: DrawTarget<Color = OsdColor> + OriginDimensions,
        S: SpectrographView<D>,
    {
        info!("render loop started");
        loop {
            self.iterate(display).await;
        }
    }

    fn draw_flight<D>(
        &mut self,
        display: &mut D,
        inputs: &OsdInputs,
        now_ms: u32,
    ) where
        D: DrawTarget<Color = OsdColor> + OriginDimensions,
    {
        {
            let mut device =
                PixelCellDisplay::new(&mut *display, self.video.standard(), inputs.config.cell_font(), &mut self.ctx.scratch);
            self.legacy.update(&mut device, now_ms.wrapping_mul(1000));
        }

        let flags = inputs.flags;
        if !flags.menu_active && !flags.arming_or_stats {
            draw_local_overlay(display, inputs);
        }
        if flags.arming_or_stats {
            draw_arming_logos(display, &inputs.config, &self.ctx.user_logo);
        }
        if flags.menu_active
            && let Some(frame) = inputs.menu_frame
        {
            let geom = ScreenGeometry::of(display);
            draw_frame_border(display, geom, &frame);
        }
    }
}
