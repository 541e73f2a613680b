//! Run-generation tests.
//!
//! A timer from a superseded run may still fire after a new run starts; its
//! step must be a no-op so stale events never repaint the canvas.

use pretty_assertions::assert_eq;

use pinsim_core::common::constants::GPIO_HIGH_COLOR;
use pinsim_core::{ReplayState, Replayer, SimEvent};

use crate::common::mocks::RecordingSurface;

#[test]
fn stale_run_step_is_a_no_op() {
    let mut replayer = Replayer::new();
    let mut surface = RecordingSurface::new();

    let first = replayer
        .begin(vec![SimEvent::GpioOutputSet { pin: 11, value: 0 }])
        .unwrap();
    let second = replayer
        .begin(vec![
            SimEvent::GpioOutputSet { pin: 11, value: 1 },
            SimEvent::TimeDelay { ticks: 1 },
        ])
        .unwrap();

    // The orphaned timer from the first run fires late.
    assert_eq!(replayer.step(&mut surface, first.run), Ok(None));
    assert!(surface.fills.is_empty());
    assert_eq!(replayer.remaining(), 2);
    assert_eq!(replayer.state(), ReplayState::Replaying);

    // The current run is unaffected.
    let next = replayer.step(&mut surface, second.run).unwrap();
    assert!(next.is_some());
    assert_eq!(surface.colors(), vec![GPIO_HIGH_COLOR]);
}

#[test]
fn new_run_replaces_the_queue_wholesale() {
    let mut replayer = Replayer::new();

    let first = replayer
        .begin(vec![
            SimEvent::TimeDelay { ticks: 1 },
            SimEvent::TimeDelay { ticks: 2 },
            SimEvent::TimeDelay { ticks: 3 },
        ])
        .unwrap();
    assert_eq!(replayer.remaining(), 3);

    let second = replayer
        .begin(vec![SimEvent::TimeDelay { ticks: 9 }])
        .unwrap();
    assert_eq!(replayer.remaining(), 1);
    assert_ne!(first.run, second.run);
}

#[test]
fn empty_restart_invalidates_the_previous_run() {
    let mut replayer = Replayer::new();
    let mut surface = RecordingSurface::new();

    let first = replayer
        .begin(vec![SimEvent::GpioOutputSet { pin: 11, value: 0 }])
        .unwrap();

    // A command that emitted no events still starts a fresh (empty) run.
    assert_eq!(replayer.begin(vec![]), None);
    assert_eq!(replayer.state(), ReplayState::Idle);

    assert_eq!(replayer.step(&mut surface, first.run), Ok(None));
    assert!(surface.fills.is_empty());
}
