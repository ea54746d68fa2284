//! The intake pipeline
//!
//! normalize -> extract -> validate -> route -> report. Each stage reads
//! its predecessor's output and builds a fresh value.

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;
use crate::extractor::FieldExtractor;
use crate::normalize::NormalizedText;
use crate::report::ClaimReport;
use crate::routing::{RoutingConfig, RuleEngine};
use crate::validator::{FieldValidator, ValidationConfig};

/// Tunable data for the intake engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeSettings {
    pub routing: RoutingConfig,
    pub validation: ValidationConfig,
}

/// A compiled, reusable triage pipeline.
///
/// Holds no mutable state; one instance may process any number of
/// documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct IntakePipeline {
    extractor: FieldExtractor,
    validator: FieldValidator,
    engine: RuleEngine,
}

impl IntakePipeline {
    /// Builds a pipeline from settings.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidConfiguration` if the routing settings
    /// fail validation.
    pub fn new(settings: &IntakeSettings) -> Result<Self, IntakeError> {
        Ok(Self {
            extractor: FieldExtractor::standard()?,
            validator: FieldValidator::new(&settings.validation),
            engine: RuleEngine::new(settings.routing.clone())?,
        })
    }

    /// Builds a pipeline with default settings
    pub fn standard() -> Result<Self, IntakeError> {
        Self::new(&IntakeSettings::default())
    }

    /// Replaces the recognizer table
    pub fn with_extractor(mut self, extractor: FieldExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replaces the routing engine
    pub fn with_engine(mut self, engine: RuleEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Triages one decoded document
    #[tracing::instrument(skip_all, fields(bytes = raw.len()))]
    pub fn process(&self, raw: &str) -> Result<ClaimReport, IntakeError> {
        let text = NormalizedText::new(raw);
        if text.is_empty() {
            tracing::debug!("document has no text");
        }

        let extracted = self.extractor.extract(&text);
        let validated = self.validator.validate(&extracted);
        let decision = self.engine.evaluate(
            &validated.fields,
            &validated.missing,
            validated.estimated_damage.as_ref(),
        )?;

        tracing::info!(
            route = %decision.route,
            rule = decision.rule,
            threshold = %self.engine.config().fast_track_threshold,
            fields_present = validated.fields.present_count(),
            missing = validated.missing.len(),
            "claim routed"
        );

        Ok(ClaimReport::assemble(validated, decision))
    }
}

/// Triages one document with default settings
pub fn process_document(raw: &str) -> Result<ClaimReport, IntakeError> {
    IntakePipeline::standard()?.process(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldName;
    use crate::patterns::{FieldPatterns, Recognizer};
    use crate::routing::{Route, RoutingRule, RuleContext, STANDARD_RULES};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_pipeline_is_shareable() {
        assert_send_sync::<IntakePipeline>();
    }

    #[test]
    fn test_empty_document_goes_to_manual_review() {
        let report = process_document("").unwrap();
        assert_eq!(report.route(), Route::ManualReview);
        assert_eq!(report.missing_fields().len(), 4);
        assert_eq!(report.extracted_fields().present_count(), 0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = IntakeSettings::default();
        settings.routing.fraud_keywords.push("   ".to_string());
        assert!(matches!(
            IntakePipeline::new(&settings),
            Err(IntakeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: IntakeSettings =
            serde_json::from_str(r#"{"routing": {"fast_track_threshold": "10000"}}"#).unwrap();
        assert_eq!(settings.routing.fast_track_threshold, rust_decimal_macros::dec!(10000));
        assert_eq!(settings.validation, ValidationConfig::default());
        assert!(!settings.routing.fraud_keywords.is_empty());
    }

    const COMPLETE: &str = "Policy Number: AC-1001\n\
                            Policyholder Name: J. Doe\n\
                            Incident Date: 2023-05-01\n\
                            Incident Description: Hail dented the hood\n\
                            Claim Type: Hail\n\
                            Estimated Damage: $900";

    fn seasonal_peril(ctx: &RuleContext<'_>) -> Option<String> {
        ctx.fields
            .get(FieldName::ClaimType)
            .filter(|claim_type| claim_type.eq_ignore_ascii_case("hail"))
            .map(str::to_string)
    }

    #[test]
    fn test_custom_engine() {
        let mut rules = STANDARD_RULES.to_vec();
        rules.push(RoutingRule {
            priority: 0,
            name: "seasonal-peril",
            route: Route::SpecialistQueue,
            predicate: seasonal_peril,
            reasoning: "Seasonal peril: {detail}.",
        });
        let engine = RuleEngine::with_rules(RoutingConfig::default(), rules).unwrap();
        let pipeline = IntakePipeline::standard().unwrap().with_engine(engine);

        let report = pipeline.process(COMPLETE).unwrap();
        assert_eq!(report.route(), Route::SpecialistQueue);
        assert_eq!(report.reasoning(), "Seasonal peril: Hail.");

        let report = pipeline.process(&COMPLETE.replace("Hail\n", "Collision\n")).unwrap();
        assert_eq!(report.route(), Route::FastTrack);
    }

    #[test]
    fn test_custom_extractor() {
        let table = [FieldPatterns {
            field: FieldName::PolicyNumber,
            candidates: &[Recognizer::Line(&["Contract"])],
        }];
        let extractor = FieldExtractor::from_patterns(&table).unwrap();
        let pipeline = IntakePipeline::standard().unwrap().with_extractor(extractor);

        let report = pipeline.process("Contract: ZX-900\nPolicyholder Name: J. Doe").unwrap();
        assert_eq!(report.extracted_fields().get(FieldName::PolicyNumber), Some("ZX-900"));
        assert_eq!(report.extracted_fields().get(FieldName::PolicyholderName), None);
        assert_eq!(
            report.missing_fields(),
            &[
                FieldName::PolicyholderName,
                FieldName::IncidentDate,
                FieldName::IncidentDescription
            ]
        );
        assert_eq!(report.route(), Route::ManualReview);
    }
}
