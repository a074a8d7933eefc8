//! Terminal UI
//!
//! Design tokens, capability detection and the per-invocation UI context
//! shared by the console event sink and the summary renderer.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
