//! Simulation event model and wire codec.
//!
//! The firmware reports what it did as a JSON array of single-key objects:
//!
//! ```json
//! [ { "gpio_output_set": { "pin": 11, "value": 1 } },
//!   { "time_delay": { "ticks": 1000 } } ]
//! ```
//!
//! The codec is hand-written rather than a derived externally-tagged enum for
//! one reason: an unrecognized tag must *decode* successfully and only fail
//! once the replayer reaches it, so that well-formed events ahead of it still
//! replay. [`SimEvent::Unknown`] carries the offending tag for that purpose.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One simulated hardware action emitted by the firmware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    /// A GPIO output pin was driven to a value (0 = low, 1 = high).
    GpioOutputSet {
        /// GPIO pin number.
        pin: u8,
        /// Output value; only 0 and 1 are replayable.
        value: u8,
    },

    /// The firmware slept for a number of ticks (1 tick = 1 ms).
    TimeDelay {
        /// Simulated wait in ticks.
        ticks: u32,
    },

    /// An event tag this driver does not recognize.
    ///
    /// Produced by the decoder, never by the firmware shims. Reaching one
    /// during replay aborts the run with
    /// [`ReplayError::UnknownEventType`](crate::common::ReplayError::UnknownEventType).
    Unknown(String),
}

/// Decodes a JSON event stream into an ordered event list.
///
/// Malformed JSON, a non-array top level, a multi-key event object, or a bad
/// payload shape for a recognized tag all fail here; unrecognized tags do not.
pub fn decode_events(json: &str) -> Result<Vec<SimEvent>, serde_json::Error> {
    serde_json::from_str(json)
}

const GPIO_OUTPUT_SET: &str = "gpio_output_set";
const TIME_DELAY: &str = "time_delay";

#[derive(Serialize, Deserialize)]
struct GpioPayload {
    pin: u8,
    value: u8,
}

#[derive(Serialize, Deserialize)]
struct DelayPayload {
    ticks: u32,
}

/// Serializes as `{}`; the payload written for unknown tags.
struct EmptyPayload;

impl Serialize for EmptyPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}

impl Serialize for SimEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::GpioOutputSet { pin, value } => {
                map.serialize_entry(
                    GPIO_OUTPUT_SET,
                    &GpioPayload {
                        pin: *pin,
                        value: *value,
                    },
                )?;
            }
            Self::TimeDelay { ticks } => {
                map.serialize_entry(TIME_DELAY, &DelayPayload { ticks: *ticks })?;
            }
            Self::Unknown(tag) => map.serialize_entry(tag, &EmptyPayload)?,
        }
        map.end()
    }
}

struct EventVisitor;

impl<'de> Visitor<'de> for EventVisitor {
    type Value = SimEvent;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a single-key simulation event object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SimEvent, A::Error> {
        let Some(tag) = map.next_key::<String>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };

        let event = match tag.as_str() {
            GPIO_OUTPUT_SET => {
                let GpioPayload { pin, value } = map.next_value()?;
                SimEvent::GpioOutputSet { pin, value }
            }
            TIME_DELAY => {
                let DelayPayload { ticks } = map.next_value()?;
                SimEvent::TimeDelay { ticks }
            }
            _ => {
                // Payload shape of an unknown tag is irrelevant; the tag
                // alone is enough to fail the replay step that reaches it.
                let IgnoredAny = map.next_value()?;
                SimEvent::Unknown(tag)
            }
        };

        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(
                "simulation event object must have exactly one key",
            ));
        }

        Ok(event)
    }
}

impl<'de> Deserialize<'de> for SimEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EventVisitor)
    }
}
