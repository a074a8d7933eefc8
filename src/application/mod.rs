//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports, value objects)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SubstitutionUseCase` - Applies an ordered rule set to an existing tree
//! - `NewProjectUseCase` - Fetches a template, substitutes, resets history

pub mod new_project;
pub mod substitution;

pub use new_project::{NewProjectOptions, NewProjectReport, NewProjectUseCase};
pub use substitution::{
    PathOutcome, RuleOutcome, SubstitutionOptions, SubstitutionReport, SubstitutionUseCase,
};
