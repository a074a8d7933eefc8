//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Summary renderers
//!
//! ## Usage
//!
//! ```ignore
//! use scaffold::presentation::factory;
//!
//! let use_case = factory::create_substitution_use_case();
//! let report = use_case.execute(&root, &rules, &options, &events)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_event_sink, create_new_project_use_case, create_substitution_use_case};
pub use output::{create_renderer, ReportRenderer};
