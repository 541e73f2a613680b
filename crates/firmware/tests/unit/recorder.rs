//! Event recorder tests.

use pretty_assertions::assert_eq;

use pinsim_core::SimEvent;
use pinsim_firmware::EventRecorder;

#[test]
fn records_in_emission_order() {
    let mut recorder = EventRecorder::new();
    recorder.record(SimEvent::GpioOutputSet { pin: 11, value: 0 });
    recorder.record(SimEvent::TimeDelay { ticks: 1000 });

    assert_eq!(recorder.len(), 2);
    assert_eq!(
        recorder.events(),
        &[
            SimEvent::GpioOutputSet { pin: 11, value: 0 },
            SimEvent::TimeDelay { ticks: 1000 },
        ]
    );
}

#[test]
fn empty_buffer_serializes_to_an_empty_stream() {
    assert_eq!(EventRecorder::new().to_json(), "[]");
}

#[test]
fn serializes_the_wire_format() {
    let mut recorder = EventRecorder::new();
    recorder.record(SimEvent::GpioOutputSet { pin: 11, value: 1 });
    recorder.record(SimEvent::TimeDelay { ticks: 500 });

    assert_eq!(
        recorder.to_json(),
        r#"[{"gpio_output_set":{"pin":11,"value":1}},{"time_delay":{"ticks":500}}]"#
    );
}

#[test]
fn clear_drops_everything() {
    let mut recorder = EventRecorder::new();
    recorder.record(SimEvent::TimeDelay { ticks: 1 });
    recorder.clear();

    assert!(recorder.is_empty());
    assert_eq!(recorder.to_json(), "[]");
}

#[test]
fn stream_decodes_back_to_the_recorded_events() {
    let mut recorder = EventRecorder::new();
    recorder.record(SimEvent::GpioOutputSet { pin: 11, value: 0 });
    recorder.record(SimEvent::TimeDelay { ticks: 1000 });

    let decoded = pinsim_core::event::decode_events(&recorder.to_json()).unwrap();
    assert_eq!(decoded, recorder.events());
}
