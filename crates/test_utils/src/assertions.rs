//! Custom Test Assertions
//!
//! Assertion helpers for triage reports that print the whole report on
//! failure.

use domain_intake::{ClaimReport, FieldName, Route};
use serde_json::Value;

/// Asserts the report recommends `expected`
///
/// # Panics
///
/// Panics with the report's reasoning if the route differs
pub fn assert_route(report: &ClaimReport, expected: Route) {
    assert_eq!(
        report.route(),
        expected,
        "Expected route {}, got {} ({})",
        expected,
        report.route(),
        report.reasoning()
    );
}

/// Asserts the missing field list equals `expected`, in order
pub fn assert_missing(report: &ClaimReport, expected: &[FieldName]) {
    assert_eq!(
        report.missing_fields(),
        expected,
        "Missing fields mismatch for report: {:?}",
        report
    );
}

/// Asserts a field holds exactly `expected`
pub fn assert_field(report: &ClaimReport, field: FieldName, expected: Option<&str>) {
    assert_eq!(
        report.extracted_fields().get(field),
        expected,
        "Field {} mismatch for report: {:?}",
        field,
        report
    );
}

/// Asserts the serialized report has the fixed shape: all nine field
/// labels, a missing list, a route and non-empty reasoning
pub fn assert_report_shape(json: &str) {
    let value: Value = serde_json::from_str(json).expect("report is valid JSON");
    let object = value.as_object().expect("report is a JSON object");
    assert_eq!(object.len(), 4, "Unexpected top-level keys: {}", json);

    let extracted = object["extractedFields"]
        .as_object()
        .expect("extractedFields is an object");
    assert_eq!(extracted.len(), FieldName::ALL.len());
    for field in FieldName::ALL {
        let slot = extracted
            .get(field.label())
            .unwrap_or_else(|| panic!("Missing key {} in {}", field, json));
        assert!(slot.is_string() || slot.is_null(), "Bad value for {}: {}", field, slot);
    }

    assert!(object["missingFields"].is_array());
    assert!(object["recommendedRoute"].is_string());
    assert!(
        object["reasoning"].as_str().is_some_and(|r| !r.is_empty()),
        "Empty reasoning in {}",
        json
    );
}
