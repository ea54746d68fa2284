//! Claim fields recognized on a loss notice

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of fields the intake engine looks for.
///
/// Declaration order is the canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "Policy Number")]
    PolicyNumber,
    #[serde(rename = "Policyholder Name")]
    PolicyholderName,
    #[serde(rename = "Incident Date")]
    IncidentDate,
    #[serde(rename = "Incident Time")]
    IncidentTime,
    #[serde(rename = "Incident Location")]
    IncidentLocation,
    #[serde(rename = "Incident Description")]
    IncidentDescription,
    #[serde(rename = "Claim Type")]
    ClaimType,
    #[serde(rename = "Estimated Damage")]
    EstimatedDamage,
    #[serde(rename = "Attachments")]
    Attachments,
}

impl FieldName {
    /// Every field, in canonical order
    pub const ALL: [FieldName; 9] = [
        FieldName::PolicyNumber,
        FieldName::PolicyholderName,
        FieldName::IncidentDate,
        FieldName::IncidentTime,
        FieldName::IncidentLocation,
        FieldName::IncidentDescription,
        FieldName::ClaimType,
        FieldName::EstimatedDamage,
        FieldName::Attachments,
    ];

    /// Fields a claim cannot be routed without, in reporting order
    pub const MANDATORY: [FieldName; 4] = [
        FieldName::PolicyNumber,
        FieldName::PolicyholderName,
        FieldName::IncidentDate,
        FieldName::IncidentDescription,
    ];

    /// Returns the canonical label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::PolicyNumber => "Policy Number",
            FieldName::PolicyholderName => "Policyholder Name",
            FieldName::IncidentDate => "Incident Date",
            FieldName::IncidentTime => "Incident Time",
            FieldName::IncidentLocation => "Incident Location",
            FieldName::IncidentDescription => "Incident Description",
            FieldName::ClaimType => "Claim Type",
            FieldName::EstimatedDamage => "Estimated Damage",
            FieldName::Attachments => "Attachments",
        }
    }

    /// Looks up a field by its canonical label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// Returns true if the field belongs to the mandatory set
    pub fn is_mandatory(&self) -> bool {
        Self::MANDATORY.contains(self)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value slot per field, absent slots included.
///
/// The map always holds all nine fields so that every report carries the
/// same key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<FieldName, Option<String>>",
    into = "BTreeMap<FieldName, Option<String>>"
)]
pub struct ExtractedFields {
    values: BTreeMap<FieldName, Option<String>>,
}

impl ExtractedFields {
    /// Creates a map with every field absent
    pub fn new() -> Self {
        Self {
            values: FieldName::ALL.into_iter().map(|f| (f, None)).collect(),
        }
    }

    /// Returns the value of a field, if present
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.values.get(&field).and_then(|v| v.as_deref())
    }

    /// Returns true if the field holds a value
    pub fn is_present(&self, field: FieldName) -> bool {
        self.get(field).is_some()
    }

    /// Iterates over all fields in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, Option<&str>)> + '_ {
        self.values.iter().map(|(f, v)| (*f, v.as_deref()))
    }

    /// Number of fields holding a value
    pub fn present_count(&self) -> usize {
        self.values.values().filter(|v| v.is_some()).count()
    }

    pub(crate) fn insert(&mut self, field: FieldName, value: Option<String>) {
        self.values.insert(field, value);
    }
}

impl Default for ExtractedFields {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<FieldName, Option<String>>> for ExtractedFields {
    fn from(map: BTreeMap<FieldName, Option<String>>) -> Self {
        let mut fields = Self::new();
        for (field, value) in map {
            fields.insert(field, value);
        }
        fields
    }
}

impl From<ExtractedFields> for BTreeMap<FieldName, Option<String>> {
    fn from(fields: ExtractedFields) -> Self {
        fields.values
    }
}

impl FromIterator<(FieldName, String)> for ExtractedFields {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (field, value) in iter {
            fields.insert(field, Some(value));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holds_every_field() {
        let fields = ExtractedFields::new();
        assert_eq!(fields.iter().count(), 9);
        assert_eq!(fields.present_count(), 0);
    }

    #[test]
    fn test_from_label_round_trips() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_label(field.label()), Some(field));
        }
        assert_eq!(FieldName::from_label("Initial Estimate"), None);
    }

    #[test]
    fn test_mandatory_membership() {
        let mandatory: Vec<FieldName> =
            FieldName::ALL.into_iter().filter(FieldName::is_mandatory).collect();
        assert_eq!(mandatory, FieldName::MANDATORY.to_vec());
        assert!(!FieldName::EstimatedDamage.is_mandatory());
    }

    #[test]
    fn test_partial_map_is_completed() {
        let mut partial = BTreeMap::new();
        partial.insert(FieldName::ClaimType, Some("Collision".to_string()));
        let fields = ExtractedFields::from(partial);
        assert_eq!(fields.iter().count(), 9);
        assert_eq!(fields.get(FieldName::ClaimType), Some("Collision"));
    }
}
