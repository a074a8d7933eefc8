//! Domain Layer
//!
//! The substitution engine: rules, namespaces and the operations that apply
//! them to a project tree.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (SubstitutionRule, Namespace, ExtensionAllowlist)
//! - `services/` - Content replacement, name replacement, package relocation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **Ports & Adapters** - All I/O goes through trait-defined ports
//! 2. **Per-entry isolation** - Services report failures and keep going
//! 3. **Explicit inputs** - Rules are passed in, never read from global state

pub mod ports;
pub mod services;
pub mod value_objects;
