//! Error types for the replay driver.
//!
//! The taxonomy follows the three failure surfaces of the driver:
//! 1. **Registration:** Rejecting invalid command registrations up front.
//! 2. **Command runs:** Failures between lookup and decode; caught and logged,
//!    never propagated past [`run_command`](crate::Driver::run_command).
//! 3. **Replay:** Failures inside a replay step; returned to the frontend,
//!    which stops scheduling further steps.

use thiserror::Error;

/// Invalid command registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The command name was empty after trimming.
    #[error("command name is empty")]
    EmptyName,

    /// A command of the same name is already registered.
    #[error("command is already registered: {0}")]
    Duplicate(String),
}

/// Failure reported by a firmware command while it ran.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct CommandFault(pub String);

/// Failure between command invocation and event-queue update.
///
/// Either way the event queue is left untouched and the command-name buffer
/// is still released.
#[derive(Debug, Error)]
pub enum RunError {
    /// The firmware command itself failed.
    #[error("command failed: {0}")]
    Command(#[from] CommandFault),

    /// The event stream returned by the firmware was not valid JSON.
    #[error("event stream decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure inside a single replay step.
///
/// Not caught by the step itself: the frontend logs it and schedules nothing
/// further, leaving any remaining queued events undrained.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    /// The popped event carried a tag the replayer does not recognize.
    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    /// A `gpio_output_set` event carried a value other than 0 or 1.
    #[error("unknown gpio_output_set value: {0}")]
    UnknownGpioValue(u8),
}
