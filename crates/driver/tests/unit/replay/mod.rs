//! Replay state machine tests.

/// Run-generation invalidation.
pub mod runs;
