//! GPIO and time HAL shims.
//!
//! Each shim mirrors a firmware SDK call: `gpio_enable_output` /
//! `gpio_output_set` follow the BL602 GPIO HAL, `time_delay` /
//! `time_ms_to_ticks32` the NimBLE porting layer (1 tick = 1 ms). Instead of
//! touching hardware they validate their arguments and record a simulation
//! event on the owning [`SimFirmware`].

use thiserror::Error;
use tracing::trace;

use pinsim_core::event::SimEvent;

use crate::SimFirmware;

/// Number of GPIO pins on the simulated part.
pub const GPIO_PIN_COUNT: u8 = 23;

/// Invalid argument to a GPIO shim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HalError {
    /// Pin number outside `0..GPIO_PIN_COUNT`.
    #[error("gpio pin out of range: {0}")]
    InvalidPin(u8),

    /// Output value other than 0 or 1.
    #[error("gpio output value out of range: {0}")]
    InvalidValue(u8),
}

fn check_pin(pin: u8) -> Result<(), HalError> {
    if pin < GPIO_PIN_COUNT {
        Ok(())
    } else {
        Err(HalError::InvalidPin(pin))
    }
}

impl SimFirmware {
    /// Configures a GPIO pin for output mode.
    ///
    /// Pull-up/pull-down settings are accepted for signature compatibility
    /// with the SDK but have no observable effect in simulation.
    ///
    /// # Errors
    ///
    /// [`HalError::InvalidPin`] for an out-of-range pin.
    pub fn gpio_enable_output(&mut self, pin: u8, _pullup: u8, _pulldown: u8) -> Result<(), HalError> {
        check_pin(pin)?;
        let _ = self.output_pins.insert(pin);
        trace!(pin, "gpio configured for output");
        Ok(())
    }

    /// Drives a GPIO output pin low (0) or high (1), recording the event.
    ///
    /// # Errors
    ///
    /// [`HalError::InvalidPin`] or [`HalError::InvalidValue`] for bad
    /// arguments; nothing is recorded on error.
    pub fn gpio_output_set(&mut self, pin: u8, value: u8) -> Result<(), HalError> {
        check_pin(pin)?;
        if value > 1 {
            return Err(HalError::InvalidValue(value));
        }
        self.recorder.record(SimEvent::GpioOutputSet { pin, value });
        Ok(())
    }

    /// Pins currently configured for output.
    pub fn output_pins(&self) -> impl Iterator<Item = u8> {
        self.output_pins.iter().copied()
    }

    /// Sleeps for `ticks` system ticks, recording the event.
    pub fn time_delay(&mut self, ticks: u32) {
        self.recorder.record(SimEvent::TimeDelay { ticks });
    }

    /// Converts milliseconds to system ticks (1 tick = 1 ms).
    pub fn time_ms_to_ticks32(&self, ms: u32) -> u32 {
        ms
    }
}
