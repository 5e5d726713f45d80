//! Overlay mode selection by stick gestures.
//!
//! While disarmed the pilot can switch from the flight overlay to the
//! spectrograph with throttle mid, yaw high and pitch high. Inside the
//! spectrograph, roll high swaps its axes and yaw low returns to the flight
//! overlay. Gestures are ignored while armed.

use crate::state::RcSticks;

/// Channel value above which a stick counts as high.
pub const STICK_HIGH: u16 = 1750;

/// Channel value below which a stick counts as low.
pub const STICK_LOW: u16 = 1250;

/// Minimum spacing between two axis-swap commands.
pub const SWAP_AXIS_DEBOUNCE_MS: u32 = 250;

#[inline]
const fn is_high(value: u16) -> bool { value > STICK_HIGH }

#[inline]
const fn is_low(value: u16) -> bool { value < STICK_LOW }

#[inline]
const fn is_mid(value: u16) -> bool { value > STICK_LOW && value < STICK_HIGH }

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OsdMode {
    #[default]
    Flight,
    Spectrograph,
}

/// Command forwarded to the spectrograph view for one frame.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpecCommand {
    #[default]
    None,
    SwapAxis,
}

/// Current mode plus the axis-swap debounce timer.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ModeMachine {
    mode: OsdMode,
    last_swap_ms: Option<u32>,
}

impl ModeMachine {
    pub const fn new() -> Self {
        Self {
            mode: OsdMode::Flight,
            last_swap_ms: None,
        }
    }

    #[inline]
    pub const fn mode(&self) -> OsdMode { self.mode }

    fn swap_allowed(
        &self,
        now_ms: u32,
    ) -> bool {
        match self.last_swap_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) > SWAP_AXIS_DEBOUNCE_MS,
        }
    }

    /// Evaluate gestures for one frame.
    ///
    /// With the spectrograph disabled the machine is pinned to `Flight`.
    pub fn update(
        &mut self,
        sticks: &RcSticks,
        armed: bool,
        spectrograph_enabled: bool,
        now_ms: u32,
    ) -> SpecCommand {
        if !spectrograph_enabled {
            self.mode = OsdMode::Flight;
            return SpecCommand::None;
        }
        if armed {
            return SpecCommand::None;
        }

        if is_mid(sticks.throttle) && is_high(sticks.yaw) && is_high(sticks.pitch) {
            if self.mode != OsdMode::Spectrograph {
                info!("spectrograph mode");
            }
            self.mode = OsdMode::Spectrograph;
            return SpecCommand::None;
        }

        if self.mode != OsdMode::Spectrograph {
            return SpecCommand::None;
        }

        let mut command = SpecCommand::None;
        if is_high(sticks.roll) && self.swap_allowed(now_ms) {
            debug!("spectrograph axis swap");
            command = SpecCommand::SwapAxis;
            self.last_swap_ms = Some(now_ms);
        }
        if is_low(sticks.yaw) {
            info!("flight mode");
            self.mode = OsdMode::Flight;
        }
        command
    }
}
