//! Built-in firmware commands.
//!
//! `rust_main` is the demo app: blink the PineCone's blue LED on
//! GPIO 11 ten times with one-second pauses. `rust_script` is the short
//! variant the browser frontend auto-runs when the page address carries the
//! test marker.

use pinsim_core::common::CommandFault;

use crate::hal::HalError;
use crate::{CommandBuffer, SimFirmware};

/// GPIO pin the board LED is wired to.
pub const LED_GPIO: u8 = 11;

impl From<HalError> for CommandFault {
    fn from(err: HalError) -> Self {
        Self(err.to_string())
    }
}

/// Blinks the LED ten times with 1000-tick pauses.
///
/// # Errors
///
/// Propagates HAL faults as a [`CommandFault`].
pub fn rust_main(fw: &mut SimFirmware, _args: &CommandBuffer) -> Result<(), CommandFault> {
    blink(fw, 10, 1000)
}

/// Short blink used by the browser auto-run hook.
///
/// # Errors
///
/// Propagates HAL faults as a [`CommandFault`].
pub fn rust_script(fw: &mut SimFirmware, _args: &CommandBuffer) -> Result<(), CommandFault> {
    blink(fw, 6, 500)
}

/// Toggles the LED GPIO `toggles` times, pausing `pause_ms` between toggles.
fn blink(fw: &mut SimFirmware, toggles: u32, pause_ms: u32) -> Result<(), CommandFault> {
    fw.gpio_enable_output(LED_GPIO, 0, 0)?;
    for i in 0..toggles {
        // Even iterations drive the pin low, which lights the LED.
        let value = if i % 2 == 0 { 0 } else { 1 };
        fw.gpio_output_set(LED_GPIO, value)?;
        let ticks = fw.time_ms_to_ticks32(pause_ms);
        fw.time_delay(ticks);
    }
    Ok(())
}
