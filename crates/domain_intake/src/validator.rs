//! Field validation
//!
//! Turns the raw extraction into the values the router may trust. Anything
//! that is a placeholder, a form caption or a swallowed chunk of the form
//! becomes absent; the validator never fails.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;

use crate::field::{ExtractedFields, FieldName};
use crate::noise::{is_filler, is_noise, looks_like_label};

/// Validation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Values that mean "nothing was entered", compared case-insensitively
    pub placeholder_tokens: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            placeholder_tokens: [
                "n/a",
                "na",
                "n.a.",
                "none",
                "null",
                "nil",
                "unknown",
                "not provided",
                "not applicable",
                "tbd",
                "tba",
                "-",
                "--",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Why a raw value was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Placeholder,
    Filler,
    FormLabel,
    FormNoise,
    NoDigits,
    NotAName,
    InvalidDate,
    Boilerplate,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::Placeholder => "placeholder token",
            Rejection::Filler => "filler characters only",
            Rejection::FormLabel => "echoes a form label",
            Rejection::FormNoise => "form noise",
            Rejection::NoDigits => "no digits",
            Rejection::NotAName => "not a person's name",
            Rejection::InvalidDate => "not a calendar date",
            Rejection::Boilerplate => "form boilerplate",
        };
        f.write_str(reason)
    }
}

/// Length cap and label-hit limit for fields prone to swallowing the form
fn noise_limits(field: FieldName) -> Option<(usize, usize)> {
    match field {
        FieldName::IncidentLocation => Some((180, 2)),
        FieldName::IncidentDescription => Some((400, 3)),
        FieldName::ClaimType => Some((60, 2)),
        FieldName::EstimatedDamage => Some((80, 2)),
        FieldName::Attachments => Some((120, 2)),
        _ => None,
    }
}

const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y", "%m-%d-%Y", "%m/%d/%y", "%m-%d-%y", "%Y-%m-%d", "%Y/%m/%d", "%B %d %Y", "%b %d %Y",
    "%d %B %Y", "%d %b %Y",
];

/// Parses the date layouts the extractor recognizes
pub fn parse_incident_date(value: &str) -> Option<NaiveDate> {
    let cleaned = value
        .replace(',', " ")
        .split_whitespace()
        .map(|word| if word.eq_ignore_ascii_case("sept") { "Sep" } else { word })
        .collect::<Vec<_>>()
        .join(" ");

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}

fn is_person_name(value: &str) -> bool {
    let lower = value.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();

    if words.iter().any(|w| matches!(*w, "insured" | "policy" | "name")) {
        return false;
    }
    if words.contains(&"first") && words.contains(&"last") {
        return false;
    }
    words.iter().filter(|w| w.chars().all(char::is_alphabetic)).count() >= 2
}

/// The validated document
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    pub fields: ExtractedFields,
    /// Parsed damage amount; `None` when absent or unparseable
    pub estimated_damage: Option<Money>,
    /// Absent mandatory fields, in mandatory order
    pub missing: Vec<FieldName>,
}

/// Applies placeholder, noise and field-specific checks
#[derive(Debug, Clone)]
pub struct FieldValidator {
    placeholders: Vec<String>,
}

impl FieldValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            placeholders: config
                .placeholder_tokens
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Validates every extracted value
    pub fn validate(&self, raw: &ExtractedFields) -> ValidatedFields {
        let mut fields = ExtractedFields::new();

        for (field, value) in raw.iter() {
            let Some(value) = value else { continue };
            match self.check(field, value) {
                Ok(kept) => fields.insert(field, Some(kept)),
                Err(reason) => {
                    tracing::debug!(
                        field = %field,
                        mandatory = field.is_mandatory(),
                        value,
                        %reason,
                        "value rejected"
                    );
                }
            }
        }

        let estimated_damage = fields.get(FieldName::EstimatedDamage).and_then(|text| {
            match Money::parse(text) {
                Ok(amount) => {
                    tracing::debug!(%amount, "estimated damage parsed");
                    Some(amount)
                }
                Err(e) => {
                    tracing::debug!(error = %e, "estimated damage has no usable amount");
                    None
                }
            }
        });

        let missing = FieldName::MANDATORY
            .into_iter()
            .filter(|f| !fields.is_present(*f))
            .collect();

        ValidatedFields {
            fields,
            estimated_damage,
            missing,
        }
    }

    /// Checks one value, returning the trimmed value to keep
    pub fn check(&self, field: FieldName, value: &str) -> Result<String, Rejection> {
        let value = value.trim();
        if value.is_empty() || self.is_placeholder(value) {
            return Err(Rejection::Placeholder);
        }
        if is_filler(value) {
            return Err(Rejection::Filler);
        }
        if looks_like_label(value, field) {
            return Err(Rejection::FormLabel);
        }
        if let Some((max_len, label_hits)) = noise_limits(field) {
            if is_noise(value, max_len, label_hits) {
                return Err(Rejection::FormNoise);
            }
        }

        match field {
            FieldName::PolicyNumber if !value.chars().any(|c| c.is_ascii_digit()) => {
                Err(Rejection::NoDigits)
            }
            FieldName::PolicyholderName if !is_person_name(value) => Err(Rejection::NotAName),
            FieldName::IncidentDate if parse_incident_date(value).is_none() => {
                Err(Rejection::InvalidDate)
            }
            FieldName::Attachments => {
                let lower = value.to_lowercase();
                if lower.contains("may be attached") || lower.contains("schedule") {
                    Err(Rejection::Boilerplate)
                } else {
                    Ok(value.to_string())
                }
            }
            _ => Ok(value.to_string()),
        }
    }

    fn is_placeholder(&self, value: &str) -> bool {
        let lower = value.to_lowercase();
        self.placeholders.iter().any(|t| *t == lower)
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn validator() -> FieldValidator {
        FieldValidator::new(&ValidationConfig::default())
    }

    #[test]
    fn test_placeholders_rejected() {
        let v = validator();
        for token in ["N/A", "na", "TBD", "None", "NULL", "Unknown", "not provided", "-"] {
            assert_eq!(v.check(FieldName::Attachments, token), Err(Rejection::Placeholder));
        }
    }

    #[test]
    fn test_filler_rejected() {
        assert_eq!(validator().check(FieldName::IncidentLocation, "____"), Err(Rejection::Filler));
        assert_eq!(validator().check(FieldName::ClaimType, "..."), Err(Rejection::Filler));
    }

    #[test]
    fn test_policy_number_needs_digit() {
        let v = validator();
        assert_eq!(v.check(FieldName::PolicyNumber, "PENDING"), Err(Rejection::NoDigits));
        assert_eq!(v.check(FieldName::PolicyNumber, "AC-1001"), Ok("AC-1001".to_string()));
    }

    #[test]
    fn test_name_checks() {
        let v = validator();
        assert!(v.check(FieldName::PolicyholderName, "J. Doe").is_ok());
        assert!(v.check(FieldName::PolicyholderName, "Cher").is_err());
        assert!(v.check(FieldName::PolicyholderName, "Insured Party").is_err());
        assert!(v.check(FieldName::PolicyholderName, "First Middle Last").is_err());
    }

    #[test]
    fn test_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2023, 5, 1);
        for text in ["2023-05-01", "05/01/2023", "5-1-2023", "May 1, 2023", "1 May 2023"] {
            assert_eq!(parse_incident_date(text), expected, "{}", text);
        }
        assert_eq!(parse_incident_date("Sept 9, 2022"), NaiveDate::from_ymd_opt(2022, 9, 9));
        assert_eq!(parse_incident_date("9 sept 2022"), NaiveDate::from_ymd_opt(2022, 9, 9));
    }

    #[test]
    fn test_full_month_names() {
        let months = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        for (index, month) in months.iter().enumerate() {
            let expected = NaiveDate::from_ymd_opt(2022, index as u32 + 1, 3);
            assert_eq!(parse_incident_date(&format!("{} 3, 2022", month)), expected, "{}", month);
            assert_eq!(parse_incident_date(&format!("3 {} 2022", month)), expected, "{}", month);
        }
        assert_eq!(parse_incident_date("02/30/2023"), None);
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert_eq!(
            validator().check(FieldName::IncidentDate, "13/45/2023"),
            Err(Rejection::InvalidDate)
        );
    }

    #[test]
    fn test_attachment_boilerplate() {
        let v = validator();
        assert_eq!(
            v.check(FieldName::Attachments, "A diagram may be attached"),
            Err(Rejection::Boilerplate)
        );
        assert!(v.check(FieldName::Attachments, "photos.zip, police_report.pdf").is_ok());
    }

    #[test]
    fn test_unparseable_damage_is_kept() {
        let raw: ExtractedFields = [(FieldName::EstimatedDamage, "see adjuster".to_string())]
            .into_iter()
            .collect();
        let validated = validator().validate(&raw);
        assert_eq!(validated.fields.get(FieldName::EstimatedDamage), Some("see adjuster"));
        assert_eq!(validated.estimated_damage, None);
    }

    #[test]
    fn test_damage_amount_parsed() {
        let raw: ExtractedFields = [(FieldName::EstimatedDamage, "$1,200".to_string())]
            .into_iter()
            .collect();
        let validated = validator().validate(&raw);
        assert_eq!(validated.estimated_damage.map(|m| m.amount()), Some(dec!(1200)));
    }

    #[test]
    fn test_missing_in_mandatory_order() {
        let raw: ExtractedFields = [(FieldName::PolicyholderName, "J. Doe".to_string())]
            .into_iter()
            .collect();
        let validated = validator().validate(&raw);
        assert_eq!(
            validated.missing,
            vec![
                FieldName::PolicyNumber,
                FieldName::IncidentDate,
                FieldName::IncidentDescription
            ]
        );
    }

    #[test]
    fn test_custom_placeholders() {
        let v = FieldValidator::new(&ValidationConfig {
            placeholder_tokens: vec!["  Pending ".to_string()],
        });
        assert_eq!(v.check(FieldName::ClaimType, "PENDING"), Err(Rejection::Placeholder));
        assert!(v.check(FieldName::ClaimType, "N/A").is_ok());
    }
}
