//! Field extraction
//!
//! The extractor compiles a recognizer table once and then applies it,
//! field by field, to normalized document text. For every field the
//! candidates are tried in table order and the first one yielding a
//! non-empty value that is not itself a form label wins.

use regex::{Regex, RegexBuilder};

use crate::error::IntakeError;
use crate::field::{ExtractedFields, FieldName};
use crate::noise::looks_like_label;
use crate::normalize::NormalizedText;
use crate::patterns::{expand_shapes, FieldPatterns, Recognizer, NEXT_LABEL_LINE, STANDARD_PATTERNS};

/// Separator allowed between a label and its value
const SEPARATOR: &str = r"[ \t]*[:\-]?[ \t]*";

/// A recognizer with its patterns compiled
#[derive(Debug, Clone)]
enum Matcher {
    Inline(Regex),
    Line(Vec<Regex>),
    Trailing(Vec<Regex>),
    Block(Vec<Regex>),
    Joined(Vec<Matcher>),
}

fn build(pattern: &str, field: FieldName) -> Result<Regex, IntakeError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| IntakeError::InvalidPattern {
            field: field.label().to_string(),
            message: e.to_string(),
        })
}

fn build_all(
    labels: &[&str],
    field: FieldName,
    template: fn(&str) -> String,
) -> Result<Vec<Regex>, IntakeError> {
    labels.iter().map(|label| build(&template(label), field)).collect()
}

impl Matcher {
    fn compile(recognizer: &Recognizer, field: FieldName) -> Result<Self, IntakeError> {
        Ok(match *recognizer {
            Recognizer::Inline(pattern) => Matcher::Inline(build(&expand_shapes(pattern), field)?),
            Recognizer::Line(labels) => Matcher::Line(build_all(labels, field, |label| {
                format!(r"(?m)^[ \t]*(?:{}){}([^\n]+)", label, SEPARATOR)
            })?),
            Recognizer::Trailing(labels) => Matcher::Trailing(build_all(labels, field, |label| {
                format!(r"\b(?:{}){}([^\n]+)", label, SEPARATOR)
            })?),
            Recognizer::Block(labels) => Matcher::Block(build_all(labels, field, |label| {
                format!(r"(?:{}){}", label, SEPARATOR)
            })?),
            Recognizer::Joined(parts) => Matcher::Joined(
                parts
                    .iter()
                    .map(|part| Matcher::compile(part, field))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        })
    }

    /// Runs this matcher, returning a cleaned value or `None`
    fn find(&self, text: &NormalizedText, field: FieldName) -> Option<String> {
        let accept = |raw: &str| clean_value(raw).filter(|v| !looks_like_label(v, field));

        match self {
            Matcher::Inline(re) => [text.as_str(), text.flattened()].into_iter().find_map(|haystack| {
                re.captures(haystack)
                    .and_then(|c| c.get(1))
                    .and_then(|m| accept(m.as_str()))
            }),
            Matcher::Line(patterns) | Matcher::Trailing(patterns) => patterns.iter().find_map(|re| {
                re.captures(text.as_str())
                    .and_then(|c| c.get(1))
                    .and_then(|m| accept(m.as_str()))
            }),
            Matcher::Block(labels) => labels.iter().find_map(|re| {
                let label = re.find(text.as_str())?;
                accept(block_after(text.as_str(), label.end()))
            }),
            Matcher::Joined(parts) => {
                let found: Vec<String> = parts.iter().filter_map(|p| p.find(text, field)).collect();
                if found.is_empty() {
                    None
                } else {
                    Some(found.join(", "))
                }
            }
        }
    }
}

/// The text from `start` up to the next line opening with a field label
fn block_after(text: &str, start: usize) -> &str {
    let rest = &text[start..];
    let end = NEXT_LABEL_LINE.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    &rest[..end]
}

/// Collapses whitespace and strips separator punctuation from both ends.
///
/// Returns `None` when nothing is left.
pub fn clean_value(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed.trim_matches(|c: char| matches!(c, ' ' | ':' | ';' | '-' | '\t'));
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Locates raw field values in normalized text
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    fields: Vec<(FieldName, Vec<Matcher>)>,
}

impl FieldExtractor {
    /// Compiles the built-in recognizer table
    pub fn standard() -> Result<Self, IntakeError> {
        Self::from_patterns(STANDARD_PATTERNS)
    }

    /// Compiles a custom recognizer table.
    ///
    /// Fields without an entry are always reported absent.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidPattern` if a pattern fails to compile
    /// or a field appears twice.
    pub fn from_patterns(table: &[FieldPatterns]) -> Result<Self, IntakeError> {
        let mut fields: Vec<(FieldName, Vec<Matcher>)> = Vec::with_capacity(table.len());

        for entry in table {
            if fields.iter().any(|(f, _)| *f == entry.field) {
                return Err(IntakeError::InvalidPattern {
                    field: entry.field.label().to_string(),
                    message: "field listed more than once".to_string(),
                });
            }
            let matchers = entry
                .candidates
                .iter()
                .map(|r| Matcher::compile(r, entry.field))
                .collect::<Result<Vec<_>, _>>()?;
            fields.push((entry.field, matchers));
        }

        Ok(Self { fields })
    }

    /// Extracts every field from `text`
    pub fn extract(&self, text: &NormalizedText) -> ExtractedFields {
        let mut extracted = ExtractedFields::new();

        for (field, matchers) in &self.fields {
            let hit = matchers
                .iter()
                .enumerate()
                .find_map(|(index, m)| m.find(text, *field).map(|v| (index, v)));

            match hit {
                Some((candidate, value)) => {
                    tracing::debug!(field = %field, candidate, "field matched");
                    extracted.insert(*field, Some(value));
                }
                None => tracing::debug!(field = %field, "no candidate matched"),
            }
        }

        extracted
    }
}
