//! Common constants and error types shared across the replay driver.
//!
//! This module provides the building blocks the rest of the crate leans on:
//! 1. **Constants:** Canvas geometry, LED colors, the base tick, the auto-run marker.
//! 2. **Error Handling:** Typed errors for registration, command runs, and replay steps.

/// Constants for canvas geometry, colors, and timing.
pub mod constants;

/// Error types for registration, command runs, and replay.
pub mod error;

pub use constants::{AUTO_RUN_MARKER, BASE_TICK_MS, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use error::{CommandFault, RegistryError, ReplayError, RunError};
