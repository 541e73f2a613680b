//! Event queue replay.
//!
//! The replayer owns the event queue for the current run and drains it one
//! event per step. Timing lives in the frontend: each successful step hands
//! back a [`Scheduled`] naming the run and the delay before the next step,
//! and the frontend turns that into a timer. The delay is simulated time
//! (1 tick = 1 ms), not a rendering optimization.
//!
//! Runs are generational: starting a new run invalidates whatever step the
//! previous run still had in flight, so an orphaned timer cannot repaint the
//! canvas with stale events.

use std::collections::VecDeque;

use crate::common::ReplayError;
use crate::common::constants::{BASE_TICK_MS, GPIO_HIGH_COLOR, GPIO_LOW_COLOR};
use crate::event::SimEvent;

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// The simulated LED footprint on the rendered board picture.
pub const LED_RECT: Rect = Rect {
    x: 315.0,
    y: 116.0,
    width: 35.0,
    height: 74.0,
};

/// Drawing seam implemented by each frontend.
pub trait Surface {
    /// Fills `rect` with a CSS color.
    fn fill_rect(&mut self, rect: Rect, color: &str);
}

/// LED fill color for a replayed GPIO value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColor {
    /// GPIO driven low; the LED is lit.
    Low,
    /// GPIO driven high; the LED is off.
    High,
}

impl LedColor {
    /// Maps a GPIO output value to its LED color.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::UnknownGpioValue`] for anything but 0 or 1.
    pub fn from_gpio(value: u8) -> Result<Self, ReplayError> {
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::High),
            other => Err(ReplayError::UnknownGpioValue(other)),
        }
    }

    /// CSS color painted for this state.
    pub const fn css(self) -> &'static str {
        match self {
            Self::Low => GPIO_LOW_COLOR,
            Self::High => GPIO_HIGH_COLOR,
        }
    }
}

/// Identifies one replay run; stale ids make scheduled steps no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunId(u64);

/// A step the frontend should perform after `delay_ms` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    /// Run this step belongs to.
    pub run: RunId,
    /// Delay before the step, in milliseconds.
    pub delay_ms: u32,
}

/// Replay driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    /// No step pending.
    Idle,
    /// Exactly one step pending.
    Replaying,
}

/// Owns the event queue of the current run and pops one event per step.
#[derive(Debug, Default)]
pub struct Replayer {
    queue: VecDeque<SimEvent>,
    run: u64,
    pending: bool,
}

impl Replayer {
    /// Creates an idle replayer with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the two-state machine.
    pub fn state(&self) -> ReplayState {
        if self.pending {
            ReplayState::Replaying
        } else {
            ReplayState::Idle
        }
    }

    /// Events still queued; an aborted run leaves its remainder here.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Starts a new run, replacing the queue wholesale.
    ///
    /// Returns the schedule for the first step, or `None` for an empty
    /// stream (the replayer stays idle). Any step still in flight from the
    /// previous run is invalidated by the generation bump.
    pub fn begin(&mut self, events: Vec<SimEvent>) -> Option<Scheduled> {
        self.run += 1;
        self.queue = events.into();
        self.pending = !self.queue.is_empty();
        self.pending.then(|| Scheduled {
            run: RunId(self.run),
            delay_ms: BASE_TICK_MS,
        })
    }

    /// Performs one replay step for run `run`.
    ///
    /// Pops the front event and renders it: a `gpio_output_set` paints the
    /// LED rectangle and schedules the next step after the base tick; a
    /// `time_delay` schedules it after `ticks` additional milliseconds.
    /// Returns `Ok(None)` once the queue is drained, or immediately for a
    /// stale `run`.
    ///
    /// # Errors
    ///
    /// [`ReplayError::UnknownGpioValue`] for a GPIO value other than 0 or 1
    /// (nothing is painted) and [`ReplayError::UnknownEventType`] for an
    /// unrecognized tag. Either error ends the run with the remaining
    /// events left undrained.
    pub fn step(
        &mut self,
        surface: &mut dyn Surface,
        run: RunId,
    ) -> Result<Option<Scheduled>, ReplayError> {
        if run.0 != self.run {
            return Ok(None);
        }
        self.pending = false;

        let Some(event) = self.queue.pop_front() else {
            return Ok(None);
        };

        let mut delay_ms = BASE_TICK_MS;
        match event {
            SimEvent::GpioOutputSet { value, .. } => {
                let color = LedColor::from_gpio(value)?;
                surface.fill_rect(LED_RECT, color.css());
            }
            SimEvent::TimeDelay { ticks } => {
                delay_ms = delay_ms.saturating_add(ticks);
            }
            SimEvent::Unknown(tag) => return Err(ReplayError::UnknownEventType(tag)),
        }

        if self.queue.is_empty() {
            return Ok(None);
        }
        self.pending = true;
        Ok(Some(Scheduled {
            run: RunId(self.run),
            delay_ms,
        }))
    }
}
