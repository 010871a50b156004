//! In-memory implementations for testing.
//!
//! Available behind the `test-utils` feature flag.

mod recording_sink;

pub use recording_sink::RecordingSink;
