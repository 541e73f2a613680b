//! Replay driver constants.
//!
//! Geometry and colors match the board picture the browser frontend draws:
//! the LED rectangle sits over the PineCone's blue LED in a 400x300 render.

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 400;

/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 300;

/// Fill color for a GPIO driven low (LED lit).
pub const GPIO_LOW_COLOR: &str = "#B0B0FF";

/// Fill color for a GPIO driven high (LED off).
pub const GPIO_HIGH_COLOR: &str = "#CCCCCC";

/// Base delay between replay steps, in milliseconds.
///
/// Every step schedules its successor at least this far in the future;
/// `time_delay` events add their ticks on top (1 tick = 1 ms).
pub const BASE_TICK_MS: u32 = 1;

/// Page-address substring that triggers an automatic run of the command of
/// the same name once the board image has rendered.
pub const AUTO_RUN_MARKER: &str = "rust_script";
