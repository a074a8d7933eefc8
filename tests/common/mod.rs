//! Common test utilities for Scaffold CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp workspace
//! - Assertion macros: `assert_exists!`, `assert_missing!`
//! - Fixtures: a miniature Kotlin agent template

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
