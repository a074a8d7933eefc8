//! Event Sink Implementations
//!
//! Provides concrete implementations of SubstitutionEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable per-entry progress

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
