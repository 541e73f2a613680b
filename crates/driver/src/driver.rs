//! Run-command orchestration.
//!
//! One [`Driver`] owns the command registry and the replayer for a session.
//! `run_command` is the whole command path: trim the input, look the name up,
//! allocate the command-name buffer in the module, clear the module's event
//! buffer, invoke the command, fetch and decode the event stream, release the
//! buffer, and hand the decoded events to the replayer.
//!
//! Failures between invocation and decode are logged and swallowed here; the
//! event queue is only replaced by a successful run. Replay-step failures are
//! *not* handled here — they surface to the frontend, which stops the chain.

use tracing::{debug, error};

use crate::common::RunError;
use crate::event::{self, SimEvent};
use crate::module::{Firmware, OutputLog};
use crate::registry::{Command, CommandRegistry};
use crate::replay::{ReplayState, Replayer, RunId, Scheduled, Surface};

/// Session driver: command registry plus replayer.
#[derive(Debug)]
pub struct Driver<M: Firmware> {
    registry: CommandRegistry<M>,
    replayer: Replayer,
}

impl<M: Firmware> Driver<M> {
    /// Creates a driver around an already-populated registry.
    pub fn new(registry: CommandRegistry<M>) -> Self {
        Self {
            registry,
            replayer: Replayer::new(),
        }
    }

    /// The command registry.
    pub fn registry(&self) -> &CommandRegistry<M> {
        &self.registry
    }

    /// Current replay state.
    pub fn state(&self) -> ReplayState {
        self.replayer.state()
    }

    /// Events left queued by an aborted run.
    pub fn remaining(&self) -> usize {
        self.replayer.remaining()
    }

    /// Runs the command named by `raw` (trimmed) against `module`.
    ///
    /// An unknown command is reported to `log` and nothing else happens. A
    /// command fault or a decode failure is logged and swallowed, leaving
    /// the event queue untouched. On success the decoded events become the
    /// new queue and the returned [`Scheduled`] names the first replay step
    /// (`None` if the command emitted no events).
    pub fn run_command(
        &mut self,
        module: &mut M,
        raw: &str,
        log: &mut dyn OutputLog,
    ) -> Option<Scheduled> {
        let name = raw.trim();
        let Some(command) = self.registry.get(name) else {
            log.print(&format!(
                "Unknown command: {name}. Commands must be registered in the firmware command registry."
            ));
            return None;
        };

        let buf = module.alloc_command(name);
        let outcome = Self::execute(module, command, name, &buf, log);
        // Released exactly once, on the success and on every failure path.
        module.free_command(buf);

        match outcome {
            Ok(events) => {
                debug!(command = name, events = events.len(), "command run complete");
                if let Ok(pretty) = serde_json::to_string_pretty(&events) {
                    log.print(&format!("Events: {pretty}\n"));
                }
                self.replayer.begin(events)
            }
            Err(err) => {
                error!(command = name, %err, "command run failed");
                log.print(&format!("Error: {err}"));
                None
            }
        }
    }

    /// Performs one replay step; see [`Replayer::step`].
    ///
    /// # Errors
    ///
    /// Propagates [`Replayer::step`] errors, which end the run.
    pub fn step(
        &mut self,
        surface: &mut dyn Surface,
        run: RunId,
    ) -> Result<Option<Scheduled>, crate::common::ReplayError> {
        self.replayer.step(surface, run)
    }

    /// Clear, invoke, fetch, decode. The caller releases the buffer.
    fn execute(
        module: &mut M,
        command: Command<M>,
        name: &str,
        buf: &M::Buf,
        log: &mut dyn OutputLog,
    ) -> Result<Vec<SimEvent>, RunError> {
        module.clear_simulation_events();
        log.print(&format!("\nExecute: {name}\n"));
        command(module, buf)?;
        let json = module.simulation_events();
        Ok(event::decode_events(&json)?)
    }
}
