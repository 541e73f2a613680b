//! Event stream decode tests.

use pretty_assertions::assert_eq;
use pinsim_core::SimEvent;
use pinsim_core::event::decode_events;

#[test]
fn decodes_gpio_and_delay_stream() {
    let json = r#"[
        { "gpio_output_set": { "pin": 11, "value": 0 } },
        { "time_delay": { "ticks": 500 } }
    ]"#;
    let events = decode_events(json).unwrap();
    assert_eq!(
        events,
        vec![
            SimEvent::GpioOutputSet { pin: 11, value: 0 },
            SimEvent::TimeDelay { ticks: 500 },
        ]
    );
}

#[test]
fn decodes_empty_stream() {
    assert_eq!(decode_events("[]").unwrap(), vec![]);
}

#[test]
fn unknown_tag_decodes_and_keeps_the_tag() {
    let json = r#"[ { "foo": { "anything": true } } ]"#;
    let events = decode_events(json).unwrap();
    assert_eq!(events, vec![SimEvent::Unknown("foo".to_owned())]);
}

#[test]
fn unknown_tag_does_not_poison_earlier_events() {
    let json = r#"[
        { "gpio_output_set": { "pin": 11, "value": 1 } },
        { "spi_transfer": [1, 2, 3] }
    ]"#;
    let events = decode_events(json).unwrap();
    assert_eq!(
        events,
        vec![
            SimEvent::GpioOutputSet { pin: 11, value: 1 },
            SimEvent::Unknown("spi_transfer".to_owned()),
        ]
    );
}

#[test]
fn rejects_malformed_json() {
    assert!(decode_events("not json").is_err());
}

#[test]
fn rejects_non_array_top_level() {
    assert!(decode_events(r#"{ "time_delay": { "ticks": 1 } }"#).is_err());
}

#[test]
fn rejects_multi_key_event_object() {
    let json = r#"[ { "gpio_output_set": { "pin": 1, "value": 0 }, "time_delay": { "ticks": 1 } } ]"#;
    assert!(decode_events(json).is_err());
}

#[test]
fn rejects_empty_event_object() {
    assert!(decode_events("[ {} ]").is_err());
}

#[test]
fn rejects_bad_payload_for_recognized_tag() {
    assert!(decode_events(r#"[ { "time_delay": { "pin": 1 } } ]"#).is_err());
    assert!(decode_events(r#"[ { "gpio_output_set": { "pin": 1 } } ]"#).is_err());
}
