//! Unit tests for common types.
