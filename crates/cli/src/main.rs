//! pinsim terminal frontend.
//!
//! Runs a firmware command and replays its simulation events in the
//! terminal, sleeping out the scheduled delay between steps the same way the
//! browser frontend waits on its timers. Useful for poking at the firmware
//! without building the wasm module.

use std::process;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pinsim_core::Driver;
use pinsim_core::common::constants::{GPIO_HIGH_COLOR, GPIO_LOW_COLOR};
use pinsim_core::module::{Firmware, OutputLog};
use pinsim_core::replay::{Rect, Surface};
use pinsim_firmware::{SimFirmware, command_registry};

#[derive(Parser, Debug)]
#[command(
    name = "pinsim",
    version,
    about = "Replay firmware GPIO simulation events in the terminal",
    long_about = "Run a registered firmware command and replay the simulation events it \
emitted. Delays are simulated in real time; pass --no-delay to drain the queue \
immediately.\n\nExamples:\n  pinsim list\n  pinsim run rust_main\n  pinsim run rust_script --no-delay --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered firmware commands.
    List,

    /// Run a firmware command and replay its events.
    Run {
        /// Command name, e.g. `rust_main`.
        command: String,

        /// Also print the raw JSON event stream after the run.
        #[arg(long)]
        json: bool,

        /// Skip the simulated delays between replay steps.
        #[arg(long)]
        no_delay: bool,
    },
}

/// Output log printing to stdout, like the page log in the browser.
struct StdoutLog;

impl OutputLog for StdoutLog {
    fn print(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Terminal stand-in for the canvas: paints become LED state lines.
struct TermSurface;

impl Surface for TermSurface {
    fn fill_rect(&mut self, _rect: Rect, color: &str) {
        let state = match color {
            GPIO_LOW_COLOR => "LED on",
            GPIO_HIGH_COLOR => "LED off",
            other => other,
        };
        println!("[led] {state}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List => cmd_list(),
        Commands::Run {
            command,
            json,
            no_delay,
        } => cmd_run(&command, json, no_delay),
    }
}

fn build_driver() -> Driver<SimFirmware> {
    match command_registry() {
        Ok(registry) => Driver::new(registry),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

fn cmd_list() {
    let driver = build_driver();
    for name in driver.registry().names() {
        println!("{name}");
    }
}

fn cmd_run(command: &str, json: bool, no_delay: bool) {
    let mut driver = build_driver();
    let mut firmware = SimFirmware::new();
    let mut log = StdoutLog;
    let mut surface = TermSurface;

    if driver.registry().get(command.trim()).is_none() {
        // Still goes through run_command so the report matches the browser.
        let _ = driver.run_command(&mut firmware, command, &mut log);
        process::exit(2);
    }

    let mut next = driver.run_command(&mut firmware, command, &mut log);
    if json {
        println!("{}", firmware.simulation_events());
    }

    while let Some(step) = next {
        if !no_delay {
            thread::sleep(Duration::from_millis(u64::from(step.delay_ms)));
        }
        next = match driver.step(&mut surface, step.run) {
            Ok(next) => next,
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        };
    }
}
