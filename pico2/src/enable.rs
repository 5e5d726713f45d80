//! Overlay generator enable line.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Width of the low pulse that restarts the overlay generator.
pub const ENABLE_PULSE_US: u32 = 10;

/// Drive `pin` low for [`ENABLE_PULSE_US`], then back high.
pub fn restart_pulse<P, D>(
    pin: &mut P,
    delay: &mut D,
) -> Result<(), P::Error>
where
    P: OutputPin,
    D: DelayNs,
{
    pin.set_low()?;
    delay.delay_us(ENABLE_PULSE_US);
    pin.set_high()
}
