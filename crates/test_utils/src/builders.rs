//! Test Data Builders
//!
//! Builds loss notice text with sensible defaults so tests only spell out
//! the lines they care about. The default document is a complete,
//! low-damage collision notice that routes to fast-track.

use std::fmt::Display;

use domain_intake::FieldName;

use crate::fixtures::StringFixtures;

/// Builder for FNOL document text
#[derive(Debug, Clone)]
pub struct FnolDocumentBuilder {
    fields: Vec<(FieldName, Option<String>)>,
    extra_lines: Vec<String>,
}

impl Default for FnolDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FnolDocumentBuilder {
    /// Creates a builder holding the four mandatory fields and a low
    /// damage estimate
    pub fn new() -> Self {
        let defaults = [
            (FieldName::PolicyNumber, StringFixtures::policy_number()),
            (FieldName::PolicyholderName, StringFixtures::policyholder_name()),
            (FieldName::IncidentDate, StringFixtures::incident_date()),
            (FieldName::IncidentDescription, StringFixtures::minor_description()),
            (FieldName::EstimatedDamage, "$1,200"),
        ];
        let fields = FieldName::ALL
            .into_iter()
            .map(|field| {
                let value = defaults
                    .iter()
                    .find(|(f, _)| *f == field)
                    .map(|(_, v)| v.to_string());
                (field, value)
            })
            .collect();

        Self {
            fields,
            extra_lines: Vec::new(),
        }
    }

    /// Creates a builder with no fields at all
    pub fn empty() -> Self {
        Self {
            fields: FieldName::ALL.into_iter().map(|f| (f, None)).collect(),
            extra_lines: Vec::new(),
        }
    }

    /// Sets a field's value, written as `<label>: <value>`
    pub fn with_field(mut self, field: FieldName, value: impl Into<String>) -> Self {
        if let Some(slot) = self.fields.iter_mut().find(|(f, _)| *f == field) {
            slot.1 = Some(value.into());
        }
        self
    }

    /// Removes a field's line entirely
    pub fn without(mut self, field: FieldName) -> Self {
        if let Some(slot) = self.fields.iter_mut().find(|(f, _)| *f == field) {
            slot.1 = None;
        }
        self
    }

    /// Sets the incident description
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_field(FieldName::IncidentDescription, description)
    }

    /// Sets the damage estimate as a dollar amount
    pub fn with_damage(self, amount: impl Display) -> Self {
        self.with_field(FieldName::EstimatedDamage, format!("${}", amount))
    }

    /// Sets the claim type
    pub fn with_claim_type(self, claim_type: impl Into<String>) -> Self {
        self.with_field(FieldName::ClaimType, claim_type)
    }

    /// Appends a free-form line after the field lines
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.extra_lines.push(line.into());
        self
    }

    /// Renders the document text
    pub fn build(&self) -> String {
        self.fields
            .iter()
            .filter_map(|(field, value)| {
                value.as_ref().map(|v| format!("{}: {}", field.label(), v))
            })
            .chain(self.extra_lines.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
