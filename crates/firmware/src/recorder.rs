//! Simulation event buffer.
//!
//! Owned by the firmware module and replaced between runs: the driver clears
//! it before every invocation, the HAL shims append to it, and the driver
//! fetches it back as one JSON stream after the command returns.

use tracing::error;

use pinsim_core::event::SimEvent;

/// Ordered buffer of the events one command run emitted.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Vec<SimEvent>,
}

impl EventRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one event.
    pub fn record(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Drops all buffered events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of buffered events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The buffered events, in emission order.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Serializes the buffer to the JSON wire format.
    ///
    /// Event serialization is infallible for the recorded variants; if it
    /// ever fails the error is logged and an empty stream is returned.
    pub fn to_json(&self) -> String {
        match serde_json::to_string(&self.events) {
            Ok(json) => json,
            Err(err) => {
                error!(%err, "simulation event serialization failed");
                "[]".to_owned()
            }
        }
    }
}
