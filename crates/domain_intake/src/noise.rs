//! Heuristics for telling form boilerplate from claimant data

use crate::field::FieldName;
use crate::patterns::{BARE_LABEL, CAPTIONS, FIELD_LABEL_SET};

/// Returns true if `value` reads like a form label or caption rather than
/// an answer to one.
///
/// Descriptions are free narrative ("was on the phone"), so for them only
/// a bare echoed label counts. For other fields the caption list applies,
/// and a digit-free value of three or more all-caps words is read as a
/// printed caption. Names are exempt from that last check: typed forms
/// often spell them in capitals.
pub fn looks_like_label(value: &str, field: FieldName) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if BARE_LABEL.is_match(value) {
        return true;
    }
    if field == FieldName::IncidentDescription {
        return false;
    }
    if CAPTIONS.iter().any(|c| c.is_match(value)) {
        return true;
    }
    if field == FieldName::PolicyholderName || value.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let letters: Vec<char> = value.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return false;
    }
    let upper = letters.iter().filter(|c| c.is_uppercase()).count();
    let caps_words = value
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| w.chars().count() >= 2 && w.chars().all(|c| c.is_uppercase()))
        .count();

    upper as f64 / letters.len() as f64 > 0.95 && caps_words >= 3
}

/// Returns true if `value` is too long for the field, mentions the ACORD
/// form itself, or contains `label_hits` or more distinct field labels.
/// Values like that are a swallowed chunk of the form.
pub fn is_noise(value: &str, max_len: usize, label_hits: usize) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if value.chars().count() > max_len {
        return true;
    }
    if value.to_lowercase().split(|c: char| !c.is_alphanumeric()).any(|w| w == "acord") {
        return true;
    }
    FIELD_LABEL_SET.iter().filter(|l| l.is_match(value)).count() >= label_hits
}

/// Returns true if the value holds no letters or digits (`____`, `--`, `...`)
pub fn is_filler(value: &str) -> bool {
    !value.chars().any(|c| c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_detected() {
        assert!(looks_like_label("NAME OF INSURED (First, Middle, Last)", FieldName::PolicyholderName));
        assert!(looks_like_label("Phone (Cell)", FieldName::Attachments));
        assert!(looks_like_label("Estimated Damage", FieldName::EstimatedDamage));
    }

    #[test]
    fn test_all_caps_caption() {
        assert!(looks_like_label("INSURED MAILING ADDRESS", FieldName::IncidentLocation));
        assert!(!looks_like_label("MARY ANN SMITH", FieldName::PolicyholderName));
        assert!(!looks_like_label("123 MAIN ST SPRINGFIELD IL", FieldName::IncidentLocation));
    }

    #[test]
    fn test_upper_case_description_kept() {
        assert!(!looks_like_label("REAR END COLLISION AT LIGHT", FieldName::IncidentDescription));
        assert!(!looks_like_label("driver was on the phone", FieldName::IncidentDescription));
        assert!(looks_like_label("Incident Description:", FieldName::IncidentDescription));
    }

    #[test]
    fn test_real_values_pass() {
        assert!(!looks_like_label("J. Doe", FieldName::PolicyholderName));
        assert!(!looks_like_label("AC-1001", FieldName::PolicyNumber));
        assert!(!looks_like_label("", FieldName::PolicyNumber));
    }

    #[test]
    fn test_noise_by_length() {
        assert!(is_noise(&"x".repeat(61), 60, 2));
        assert!(!is_noise(&"x".repeat(60), 60, 2));
    }

    #[test]
    fn test_noise_by_acord_mention() {
        assert!(is_noise("ACORD 2 (2016/10)", 200, 3));
        assert!(!is_noise("accordion damaged bumper", 200, 3));
    }

    #[test]
    fn test_noise_by_label_hits() {
        assert!(is_noise("Claim Type Estimated Damage", 200, 2));
        assert!(!is_noise("Collision", 200, 2));
    }

    #[test]
    fn test_filler() {
        assert!(is_filler("____"));
        assert!(is_filler("- - -"));
        assert!(!is_filler("N/A"));
    }
}
