//! Intake domain errors
//!
//! Data-quality problems in a document never surface here; they degrade
//! into missing fields and manual review. These variants cover broken
//! configuration and defects in the rule or pattern tables.

use thiserror::Error;

/// Errors that can occur in the intake domain
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Invalid routing configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid recognizer pattern for {field}: {message}")]
    InvalidPattern { field: String, message: String },

    #[error("No routing rule matched; the rule table has no default rule")]
    NoRuleMatched,
}

impl IntakeError {
    pub fn configuration(message: impl Into<String>) -> Self {
        IntakeError::InvalidConfiguration(message.into())
    }
}
