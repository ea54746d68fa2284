//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! FNOL triage test suite.
//!
//! # Modules
//!
//! - `fixtures`: Scenario documents and canned amounts
//! - `builders`: Builder for loss notice documents
//! - `assertions`: Report assertion helpers
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
