//! Recognizer tables
//!
//! Everything the extractor knows about document layouts lives here as
//! data: the ordered candidate recognizers per field, the value shapes
//! they accept, and the label vocabulary used to bound free-text blocks
//! and to spot form captions masquerading as values.
//!
//! Supporting a new form layout means adding a label variant or a
//! candidate to [`STANDARD_PATTERNS`]; the extractor itself does not change.
//!
//! All patterns are matched case-insensitively. Inline patterns may use
//! the `{DATE}` and `{TIME}` placeholders, which expand to [`DATE_SHAPE`]
//! and [`TIME_SHAPE`] when the table is compiled.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::FieldName;

/// Calendar dates as they appear on US loss notices:
/// `5/1/2023`, `2023-05-01`, `May 1, 2023`, `1 May 2023`.
pub const DATE_SHAPE: &str = concat!(
    r"(?:0?[1-9]|1[0-2])[/\-](?:0?[1-9]|[12]\d|3[01])[/\-](?:\d{4}|\d{2})",
    r"|\d{4}[/\-](?:0?[1-9]|1[0-2])[/\-](?:0?[1-9]|[12]\d|3[01])",
    r"|(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?",
    r"|Sept(?:ember)?|Sep|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+\d{1,2},?\s+\d{4}",
    r"|\d{1,2}\s+(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?",
    r"|Sept(?:ember)?|Sep|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+\d{4}",
);

/// Clock times: `14:05`, `2:05 PM`, `3PM`.
pub const TIME_SHAPE: &str =
    r"(?:[01]?\d|2[0-3]):[0-5]\d(?:\s*[AP]M)?|(?:1[0-2]|0?[1-9])\s*[AP]M";

/// How a field value is located in the text.
#[derive(Debug, Clone, Copy)]
pub enum Recognizer {
    /// One pattern holding both label and value shape; the first capture
    /// group is the value. Tried on the line view, then the flattened view.
    Inline(&'static str),
    /// Label at the start of a line; the value is the rest of that line.
    /// Labels are tried in order.
    Line(&'static [&'static str]),
    /// Label anywhere in a line; the value is the rest of that line.
    Trailing(&'static [&'static str]),
    /// Label anywhere; the value runs until the next line that starts with
    /// a known field label.
    Block(&'static [&'static str]),
    /// Non-empty results of the parts, joined with `", "`.
    Joined(&'static [Recognizer]),
}

/// The ordered candidates for one field
#[derive(Debug, Clone, Copy)]
pub struct FieldPatterns {
    pub field: FieldName,
    pub candidates: &'static [Recognizer],
}

const LOCATION_LABELS: &[&str] = &[
    r"Incident\s*Location",
    r"Location\s*of\s*Loss",
    r"Loss\s*Location",
    r"Accident\s*Location",
    r"Street\s*:?,?\s*Location\s*of\s*Loss",
    r"Address\s*of\s*Loss",
    r"Loss\s*Address",
];

const DESCRIPTION_LABELS: &[&str] = &[
    r"Incident\s*Description",
    r"Description\s*of\s*Loss",
    r"Description\s*of\s*Accident",
    r"Description\s*of\s*Incident",
    r"Describe\s*Damage",
    r"Describe\s*Property",
];

const CLAIM_TYPE_LABELS: &[&str] = &[
    r"Claim\s*Type",
    r"Type\s*of\s*Claim",
    r"Loss\s*Type",
    r"Coverage\s*Type",
    r"Type\s*of\s*Loss",
];

const ATTACHMENT_LABELS: &[&str] = &[
    r"Attachment\(s\)",
    r"Attachments?",
    r"Documents\s*Attached",
];

const COMBINED_DATE_TIME: &str = r"(?:Date\s*/\s*Time\s*of\s*Loss|Loss\s*Date\s*/\s*Time|Date\s*and\s*Time\s*of\s*Loss|Incident\s*Date\s*/\s*Time|Date\s*Time\s*of\s*Incident)";

/// The default recognizer table, one entry per field.
pub static STANDARD_PATTERNS: &[FieldPatterns] = &[
    FieldPatterns {
        field: FieldName::PolicyNumber,
        candidates: &[
            Recognizer::Inline(r"\bPolicy\s*(?:Number|No\.?|#)\s*[:\-]?\s*([A-Z0-9][A-Z0-9\-/]*)"),
            Recognizer::Inline(r"\bPol\.?\s*No\.?\s*[:\-]?\s*([A-Z0-9][A-Z0-9\-/]*)"),
        ],
    },
    FieldPatterns {
        field: FieldName::PolicyholderName,
        candidates: &[
            Recognizer::Inline(r"\bPolicyholder\s*Name\s*[:\-]?\s*([A-Z][A-Za-z ,.'\-]+)"),
            Recognizer::Inline(r"\bPolicy\s*Holder\s*Name\s*[:\-]?\s*([A-Z][A-Za-z ,.'\-]+)"),
            Recognizer::Inline(
                r"\bName\s*of\s*Insured(?:\s*\(.*?\))?\s*[:\-]?\s*([A-Z][A-Za-z ,.'\-]+)",
            ),
            Recognizer::Inline(r"\bNamed\s*Insured\s*[:\-]?\s*([A-Z][A-Za-z ,.'\-]+)"),
            Recognizer::Inline(r"\bInsured\s*Name\s*[:\-]?\s*([A-Z][A-Za-z ,.'\-]+)"),
        ],
    },
    FieldPatterns {
        field: FieldName::IncidentDate,
        candidates: &[
            Recognizer::Inline(
                r"\b(?:Date\s*of\s*Loss|Loss\s*Date|Incident\s*Date|Accident\s*Date|Date\s*of\s*Incident)\s*[:\-]?\s*({DATE})",
            ),
            Recognizer::Inline(concat!(
                r"(?:Date\s*/\s*Time\s*of\s*Loss|Loss\s*Date\s*/\s*Time|Date\s*and\s*Time\s*of\s*Loss",
                r"|Incident\s*Date\s*/\s*Time|Date\s*Time\s*of\s*Incident)\s*[:\-]?\s*({DATE})",
            )),
        ],
    },
    FieldPatterns {
        field: FieldName::IncidentTime,
        candidates: &[
            Recognizer::Inline(
                r"\b(?:Time\s*of\s*Loss|Loss\s*Time|Incident\s*Time|Accident\s*Time|Time\s*of\s*Incident)\s*[:\-]?\s*({TIME})",
            ),
            Recognizer::Inline(concat!(
                r"(?:Date\s*/\s*Time\s*of\s*Loss|Loss\s*Date\s*/\s*Time|Date\s*and\s*Time\s*of\s*Loss",
                r"|Incident\s*Date\s*/\s*Time|Date\s*Time\s*of\s*Incident)\s*[:\-]?\s*(?:{DATE})(?:\s+|,?\s*)({TIME})",
            )),
        ],
    },
    FieldPatterns {
        field: FieldName::IncidentLocation,
        candidates: &[
            Recognizer::Joined(&[
                Recognizer::Line(LOCATION_LABELS),
                Recognizer::Line(&[r"City\s*,?\s*State\s*,?\s*Zip"]),
                Recognizer::Block(&[
                    r"Describe\s*Location\s*of\s*Loss\s*If\s*Not\s*At\s*Specific\s*Street\s*Address",
                    r"Describe\s*Location\s*of\s*Loss",
                ]),
            ]),
            Recognizer::Block(LOCATION_LABELS),
        ],
    },
    FieldPatterns {
        field: FieldName::IncidentDescription,
        candidates: &[Recognizer::Block(DESCRIPTION_LABELS)],
    },
    FieldPatterns {
        field: FieldName::ClaimType,
        candidates: &[
            Recognizer::Line(CLAIM_TYPE_LABELS),
            Recognizer::Inline(
                r"\b(?:claim\s*type|type\s*of\s*claim|loss\s*type)\b[^\n]{0,40}?\b(bodily\s*injury|injury|property\s*damage|collision|comprehensive|theft|fire|liability|vandalism|medical)\b",
            ),
        ],
    },
    FieldPatterns {
        field: FieldName::EstimatedDamage,
        candidates: &[
            Recognizer::Trailing(&[
                r"Total\s*Estimated\s*Damage|Estimated\s*Damage|Estimated\s*Loss|Estimated\s*Amount|Damage\s*Estimate|Estimated\s*Cost|Estimate\s*Amount",
            ]),
            Recognizer::Trailing(&[r"Initial\s*(?:Loss\s*|Damage\s*)?Estimate"]),
        ],
    },
    FieldPatterns {
        field: FieldName::Attachments,
        candidates: &[
            Recognizer::Line(ATTACHMENT_LABELS),
            Recognizer::Block(ATTACHMENT_LABELS),
        ],
    },
];

/// Every label that may open a field on a form. A line starting with one of
/// these ends the preceding block value.
pub const FIELD_LABELS: &[&str] = &[
    r"Policy\s*(?:Number|No\.?|#)",
    r"Pol\.?\s*No\.?",
    r"Policyholder\s*Name",
    r"Policy\s*Holder",
    r"Named\s*Insured",
    r"Insured\s*Name",
    r"Name\s*of\s*Insured",
    r"Incident\s*Date",
    r"Date\s*of\s*Loss",
    r"Loss\s*Date",
    COMBINED_DATE_TIME,
    r"Incident\s*Time",
    r"Time\s*of\s*Loss",
    r"Incident\s*Location",
    r"Location\s*of\s*Loss",
    r"Loss\s*Location",
    r"Accident\s*Location",
    r"Street\s*:?,?\s*Location\s*of\s*Loss",
    r"City\s*,?\s*State\s*,?\s*Zip",
    r"Describe\s*Location\s*of\s*Loss",
    r"Incident\s*Description",
    r"Description\s*of\s*Loss",
    r"Description\s*of\s*Accident",
    r"Claim\s*Type",
    r"Type\s*of\s*Claim",
    r"Loss\s*Type",
    r"Estimated\s*Damage",
    r"Estimated\s*Loss",
    r"Estimated\s*Amount",
    r"Estimate\s*Amount",
    r"Damage\s*Estimate",
    r"Initial\s*Estimate",
    r"Attachments?",
    r"Attachment\(s\)",
    r"Documents\s*Attached",
];

/// Captions printed on blank forms. A value matching one of these is the
/// form talking, not the claimant.
pub const CAPTION_PATTERNS: &[&str] = &[
    r"\bfirst\b.*\bmiddle\b.*\blast\b",
    r"\bcity\b.*\bstate\b.*\bzip\b",
    r"\bname\s*of\s*insured\b",
    r"\binsured'?s\s*mailing\s*address\b",
    r"\bphone\b",
    r"\bfax\b",
    r"\be-?mail\b",
    r"\bdate\s*of\s*birth\b",
    r"\bdrivers?\s*license\b",
    r"\bpolicy\s*number\b",
    r"\bclaim\s*type\b",
    r"\bestimate\s*amount\b",
    r"\bestimated\s*damage\b",
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in label pattern is a valid regex")
}

/// A line break followed by any field label
pub(crate) static NEXT_LABEL_LINE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(r"(?i)\n[ \t]*(?:{})\b", FIELD_LABELS.join("|")))
});

/// Each field label on its own, for counting label hits inside a value
pub(crate) static FIELD_LABEL_SET: Lazy<Vec<Regex>> = Lazy::new(|| {
    FIELD_LABELS
        .iter()
        .map(|label| compile(&format!(r"(?i){}", label)))
        .collect()
});

/// A value that is nothing but a field label
pub(crate) static BARE_LABEL: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(r"(?i)^(?:{})\s*[:\-]?$", FIELD_LABELS.join("|")))
});

pub(crate) static CAPTIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    CAPTION_PATTERNS
        .iter()
        .map(|caption| compile(&format!(r"(?i){}", caption)))
        .collect()
});

/// Expands the value-shape placeholders of an inline pattern
pub fn expand_shapes(pattern: &str) -> String {
    pattern
        .replace("{DATE}", DATE_SHAPE)
        .replace("{TIME}", TIME_SHAPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_candidates() {
        for field in FieldName::ALL {
            let entry = STANDARD_PATTERNS.iter().find(|p| p.field == field);
            assert!(entry.is_some_and(|p| !p.candidates.is_empty()), "{field} has no recognizers");
        }
    }

    #[test]
    fn test_date_shape_prefers_four_digit_years() {
        let re = Regex::new(&format!("^(?:{})", DATE_SHAPE)).unwrap();
        assert_eq!(re.find("12/05/2023").unwrap().as_str(), "12/05/2023");
        assert_eq!(re.find("2023-05-01").unwrap().as_str(), "2023-05-01");
        assert_eq!(re.find("Sept 3, 2022").unwrap().as_str(), "Sept 3, 2022");
    }

    #[test]
    fn test_time_shape() {
        let re = Regex::new(&format!("(?i)^(?:{})$", TIME_SHAPE)).unwrap();
        assert!(re.is_match("23:10"));
        assert!(re.is_match("3:45 PM"));
        assert!(re.is_match("11am"));
        assert!(!re.is_match("25:00"));
    }

    #[test]
    fn test_next_label_line_requires_line_start() {
        assert!(NEXT_LABEL_LINE.is_match("scrape\nEstimated Damage: $10"));
        assert!(!NEXT_LABEL_LINE.is_match("scrape, estimated damage unknown"));
    }

    #[test]
    fn test_bare_label() {
        assert!(BARE_LABEL.is_match("Incident Date"));
        assert!(BARE_LABEL.is_match("claim type:"));
        assert!(!BARE_LABEL.is_match("Collision"));
    }
}
