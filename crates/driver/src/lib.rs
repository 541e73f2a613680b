//! Firmware simulation event replay library.
//!
//! This crate implements the host-agnostic half of the pinsim simulator with the following:
//! 1. **Events:** The JSON wire format emitted by the firmware (`gpio_output_set`, `time_delay`).
//! 2. **Replay:** An owned event queue drained one step at a time against a drawing surface.
//! 3. **Dispatch:** A command registry validated at registration plus the firmware module contract.
//! 4. **Driver:** The run-command orchestration (clear, execute, fetch, decode, schedule).
//!
//! Frontends (browser canvas, terminal) supply the [`Surface`], [`OutputLog`] and timer
//! plumbing; nothing in this crate touches the DOM or sleeps.

/// Common constants and error types.
pub mod common;
/// Run-command orchestration.
pub mod driver;
/// Simulation event model and wire codec.
pub mod event;
/// Firmware module contract and output log seam.
pub mod module;
/// Command registry (name to function, validated at registration).
pub mod registry;
/// Event queue replay state machine.
pub mod replay;

/// Run-command orchestrator; owns the registry and the replayer.
pub use crate::driver::Driver;
/// One simulated hardware action from the firmware event stream.
pub use crate::event::SimEvent;
/// External computation module contract (clear/fetch events, command buffers).
pub use crate::module::{Firmware, OutputLog};
/// Drawing seam implemented by each frontend.
pub use crate::replay::{ReplayState, Replayer, RunId, Scheduled, Surface};
