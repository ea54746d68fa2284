//! Text normalization
//!
//! Decoded loss notices carry layout noise: carriage returns, runs of
//! spaces and tabs from column alignment, blank lines between form
//! sections and page breaks. Normalization reduces this to one trimmed,
//! single-spaced line per text line so that labels and values sit next to
//! each other.

/// Line separators found in decoded documents, page breaks included
fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0B}' | '\u{0C}')
}

/// Normalizes raw document text.
///
/// Whitespace runs inside a line collapse to one space, each line is
/// trimmed, and blank lines fold away so consecutive lines are separated
/// by exactly one `\n`.
pub fn normalize(raw: &str) -> String {
    raw.split(is_line_break)
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapses all whitespace, line breaks included, into single spaces
pub fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A document in both views the extractor searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    lines: String,
    flat: String,
}

impl NormalizedText {
    /// Normalizes `raw` and derives the flattened view
    pub fn new(raw: &str) -> Self {
        let lines = normalize(raw);
        let flat = flatten(&lines);
        Self { lines, flat }
    }

    /// The line-oriented view
    pub fn as_str(&self) -> &str {
        &self.lines
    }

    /// The single-line view
    pub fn flattened(&self) -> &str {
        &self.flat
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
