//! FNOL Intake Domain
//!
//! This crate turns the decoded text of a First Notice of Loss into a
//! normalized field set and a routing recommendation.
//!
//! # Pipeline
//!
//! ```text
//! raw text -> normalize -> extract -> validate -> route -> report
//! ```
//!
//! Recognizers and routing rules are static tables; keywords, placeholder
//! tokens and the fast-track threshold come from [`IntakeSettings`].
//!
//! # Example
//!
//! ```rust
//! use domain_intake::{process_document, Route};
//!
//! let report = process_document(
//!     "Policy Number: AC-1001\n\
//!      Policyholder Name: J. Doe\n\
//!      Incident Date: 2023-05-01\n\
//!      Incident Description: Rear-end collision, minor scrape\n\
//!      Estimated Damage: $1,200",
//! )?;
//! assert_eq!(report.route(), Route::FastTrack);
//! # Ok::<(), domain_intake::IntakeError>(())
//! ```

pub mod error;
pub mod extractor;
pub mod field;
pub mod noise;
pub mod normalize;
pub mod patterns;
pub mod pipeline;
pub mod report;
pub mod routing;
pub mod validator;

pub use error::IntakeError;
pub use extractor::FieldExtractor;
pub use field::{ExtractedFields, FieldName};
pub use normalize::NormalizedText;
pub use pipeline::{process_document, IntakePipeline, IntakeSettings};
pub use report::ClaimReport;
pub use routing::{Route, RoutingConfig, RoutingDecision, RoutingRule, RuleEngine};
pub use validator::{FieldValidator, ValidatedFields, ValidationConfig};
