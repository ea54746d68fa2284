//! FNOL Triage CLI
//!
//! The thin adapter around the intake engine: it loads a decoded document,
//! builds the pipeline from configuration and renders the report as JSON.
//! The binary in `src/bin/fnol_triage.rs` adds argument parsing and
//! logging setup.

pub mod config;
pub mod document;
pub mod error;

use domain_intake::{ClaimReport, IntakePipeline};

pub use crate::config::{CliConfig, LogFormat};
pub use crate::document::DocumentSource;
pub use crate::error::CliError;

/// Triages one document and returns the rendered report
pub fn run(source: &DocumentSource, config: &CliConfig) -> Result<String, CliError> {
    let text = source.load()?;
    let pipeline = IntakePipeline::new(&config.intake_settings())?;
    let report = pipeline.process(&text)?;
    render(&report, config.pretty)
}

/// Renders a report as JSON
pub fn render(report: &ClaimReport, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        report.to_json_pretty()?
    } else {
        report.to_json()?
    };
    Ok(json)
}
