//! Built-in command tests.

use pretty_assertions::assert_eq;
use rstest::rstest;

use pinsim_core::{Driver, Firmware, OutputLog, ReplayState, SimEvent};
use pinsim_firmware::apps::LED_GPIO;
use pinsim_firmware::{SimFirmware, command_registry};

/// Output log discarding everything; these tests assert on events, not text.
#[derive(Debug, Default)]
struct NullLog;

impl OutputLog for NullLog {
    fn print(&mut self, _line: &str) {}
}

type BlinkCommand = pinsim_core::registry::Command<SimFirmware>;

fn run(command: BlinkCommand) -> SimFirmware {
    let mut fw = SimFirmware::new();
    let buf = fw.alloc_command("test");
    command(&mut fw, &buf).unwrap();
    fw.free_command(buf);
    fw
}

#[rstest]
#[case::rust_main(pinsim_firmware::apps::rust_main, 10, 1000)]
#[case::rust_script(pinsim_firmware::apps::rust_script, 6, 500)]
fn blink_commands_alternate_from_low(
    #[case] command: BlinkCommand,
    #[case] toggles: u32,
    #[case] pause_ticks: u32,
) {
    let fw = run(command);
    let events = fw.recorder().events();

    assert_eq!(events.len(), (toggles as usize) * 2);
    for (i, pair) in events.chunks(2).enumerate() {
        let expected_value = u8::try_from(i % 2).unwrap();
        assert_eq!(
            pair,
            &[
                SimEvent::GpioOutputSet {
                    pin: LED_GPIO,
                    value: expected_value,
                },
                SimEvent::TimeDelay { ticks: pause_ticks },
            ]
        );
    }
    assert!(fw.output_pins().any(|pin| pin == LED_GPIO));
}

#[test]
fn registry_carries_the_builtin_commands() {
    let registry = command_registry().unwrap();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["rust_main", "rust_script"]);
}

#[test]
fn full_run_through_the_driver() {
    let mut driver = Driver::new(command_registry().unwrap());
    let mut fw = SimFirmware::new();
    let mut log = NullLog;

    let scheduled = driver.run_command(&mut fw, "rust_main", &mut log);

    assert!(scheduled.is_some());
    assert_eq!(driver.state(), ReplayState::Replaying);
    assert_eq!(driver.remaining(), 20);
    assert_eq!(fw.live_buffers(), 0);
}

#[test]
fn rerun_does_not_accumulate_events() {
    let mut driver = Driver::new(command_registry().unwrap());
    let mut fw = SimFirmware::new();
    let mut log = NullLog;

    driver.run_command(&mut fw, "rust_main", &mut log);
    driver.run_command(&mut fw, "rust_script", &mut log);

    assert_eq!(fw.recorder().len(), 12);
    assert_eq!(driver.remaining(), 12);
    assert_eq!(fw.live_buffers(), 0);
}

#[test]
fn unknown_command_leaves_the_module_untouched() {
    let mut driver = Driver::new(command_registry().unwrap());
    let mut fw = SimFirmware::new();
    let mut log = NullLog;

    let scheduled = driver.run_command(&mut fw, "frobnicate", &mut log);

    assert_eq!(scheduled, None);
    assert!(fw.recorder().is_empty());
    assert_eq!(fw.live_buffers(), 0);
}
