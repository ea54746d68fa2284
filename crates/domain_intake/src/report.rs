//! Triage report

use serde::{Deserialize, Serialize};

use crate::field::{ExtractedFields, FieldName};
use crate::routing::{Route, RoutingDecision};
use crate::validator::ValidatedFields;

/// The result of triaging one loss notice.
///
/// Every field label is present in `extractedFields`, absent values as
/// `null`, so all reports share one key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReport {
    extracted_fields: ExtractedFields,
    missing_fields: Vec<FieldName>,
    recommended_route: Route,
    reasoning: String,
}

impl ClaimReport {
    /// Packages validated fields and a routing decision
    pub fn assemble(validated: ValidatedFields, decision: RoutingDecision) -> Self {
        Self {
            extracted_fields: validated.fields,
            missing_fields: validated.missing,
            recommended_route: decision.route,
            reasoning: decision.reasoning,
        }
    }

    pub fn extracted_fields(&self) -> &ExtractedFields {
        &self.extracted_fields
    }

    pub fn missing_fields(&self) -> &[FieldName] {
        &self.missing_fields
    }

    pub fn route(&self) -> Route {
        self.recommended_route
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// Serializes the report as compact JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the report as indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn report() -> ClaimReport {
        let fields: ExtractedFields = [(FieldName::PolicyholderName, "J. Doe".to_string())]
            .into_iter()
            .collect();
        ClaimReport::assemble(
            ValidatedFields {
                fields,
                estimated_damage: None,
                missing: vec![FieldName::PolicyNumber],
            },
            RoutingDecision {
                route: Route::ManualReview,
                reasoning: "Missing mandatory field(s): Policy Number.".to_string(),
                rule: "missing-mandatory-fields",
            },
        )
    }

    #[test]
    fn test_json_shape() {
        let json: Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        let extracted = json["extractedFields"].as_object().unwrap();
        assert_eq!(extracted.len(), 9);
        assert_eq!(extracted["Policyholder Name"], "J. Doe");
        assert!(extracted["Attachments"].is_null());
        assert_eq!(json["missingFields"], serde_json::json!(["Policy Number"]));
        assert_eq!(json["recommendedRoute"], "Manual Review");
        assert_eq!(json["reasoning"], "Missing mandatory field(s): Policy Number.");
    }

    #[test]
    fn test_fields_in_canonical_order() {
        let json = report().to_json().unwrap();
        let positions: Vec<usize> = FieldName::ALL
            .iter()
            .map(|f| json.find(&format!("\"{}\"", f.label())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_deserializes_back() {
        let original = report();
        let parsed: ClaimReport = serde_json::from_str(&original.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, original);
    }
}
