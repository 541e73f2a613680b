//! Event-recording firmware module.
//!
//! This crate is the "external computation module" the replay driver talks
//! to. It does not simulate any hardware; its HAL shims record what the
//! firmware *would* have done as simulation events:
//! 1. **Recorder:** An owned event buffer serialized to the JSON wire format.
//! 2. **HAL:** GPIO and time shims that validate their arguments and record.
//! 3. **Apps:** The built-in blink commands and their registry.
//!
//! The event buffer is instance state on [`SimFirmware`], one module per
//! session; nothing in this crate is process-global.

use tracing::debug;

use pinsim_core::module::Firmware;
use pinsim_core::registry::CommandRegistry;

/// Built-in commands and their registry.
pub mod apps;
/// GPIO and time HAL shims.
pub mod hal;
/// Simulation event buffer.
pub mod recorder;

pub use crate::hal::HalError;
pub use crate::recorder::EventRecorder;

/// The firmware module: event recorder plus HAL state.
#[derive(Debug, Default)]
pub struct SimFirmware {
    recorder: EventRecorder,
    output_pins: std::collections::BTreeSet<u8>,
    live_buffers: usize,
}

/// Module-owned buffer holding a command-name string.
#[derive(Debug)]
pub struct CommandBuffer {
    name: Box<str>,
}

impl CommandBuffer {
    /// The command name this buffer carries.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl SimFirmware {
    /// Creates a firmware module with an empty event buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events of the current run.
    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    /// Command-name buffers allocated but not yet freed.
    ///
    /// Zero between runs; the driver frees its buffer on every path.
    pub fn live_buffers(&self) -> usize {
        self.live_buffers
    }
}

impl Firmware for SimFirmware {
    type Buf = CommandBuffer;

    fn alloc_command(&mut self, name: &str) -> CommandBuffer {
        self.live_buffers += 1;
        CommandBuffer { name: name.into() }
    }

    fn free_command(&mut self, buf: CommandBuffer) {
        self.live_buffers = self.live_buffers.saturating_sub(1);
        drop(buf);
    }

    fn clear_simulation_events(&mut self) {
        debug!(
            dropped = self.recorder.len(),
            "clearing simulation event buffer"
        );
        self.recorder.clear();
    }

    fn simulation_events(&mut self) -> String {
        let json = self.recorder.to_json();
        debug!(%json, "simulation events fetched");
        json
    }
}

/// Builds the registry of built-in firmware commands.
///
/// # Errors
///
/// Returns a [`RegistryError`](pinsim_core::common::RegistryError) if the
/// built-in names collide, which would be a programming error in this crate.
pub fn command_registry()
-> Result<CommandRegistry<SimFirmware>, pinsim_core::common::RegistryError> {
    let mut registry = CommandRegistry::new();
    registry.register("rust_main", apps::rust_main)?;
    registry.register("rust_script", apps::rust_script)?;
    Ok(registry)
}
