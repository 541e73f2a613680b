//! Event wire codec tests.

/// Decoding JSON event streams.
pub mod decode;
