//! Property-Based Test Generators
//!
//! Provides proptest strategies for loss notice text, from well-formed
//! documents with random field subsets to arbitrary noise.

use domain_intake::FieldName;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::FnolDocumentBuilder;

/// Words that trip neither the fraud nor the injury keyword defaults
const NEUTRAL_WORDS: &[&str] = &[
    "vehicle", "parked", "rear", "bumper", "scratched", "lot", "mirror", "dented", "door",
    "windshield", "cracked", "hail", "tree", "branch", "fell", "garage", "slid", "ice", "curb",
    "backed", "pole", "minor", "scrape", "fence",
];

/// Strategy for whole-dollar damage amounts up to ten million
pub fn damage_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(Decimal::from)
}

/// Strategy for damage amounts with cents
pub fn damage_with_cents_strategy() -> impl Strategy<Value = Decimal> {
    (100i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for descriptions free of routing keywords
pub fn neutral_description_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(NEUTRAL_WORDS), 2..12)
        .prop_map(|words| words.join(" "))
}

/// Strategy for a complete, keyword-free document with the given damage
pub fn complete_document_strategy() -> impl Strategy<Value = (String, Decimal)> {
    (neutral_description_strategy(), damage_amount_strategy()).prop_map(|(description, damage)| {
        let doc = FnolDocumentBuilder::new()
            .with_description(description)
            .with_damage(damage)
            .build();
        (doc, damage)
    })
}

/// Strategy for documents where each field line is present or not
pub fn partial_document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), FieldName::ALL.len()).prop_map(|keep| {
        FieldName::ALL
            .into_iter()
            .zip(keep)
            .filter(|(_, keep)| !keep)
            .fold(FnolDocumentBuilder::new(), |builder, (field, _)| builder.without(field))
            .build()
    })
}

/// Strategy for arbitrary text, including control characters and labels
pub fn noisy_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[ \t\r\n:\\-_A-Za-z0-9$,./]{0,300}",
        partial_document_strategy().prop_map(|doc| doc.replace('\n', "\r\n\r\n\t")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn damage_is_positive(amount in damage_amount_strategy()) {
            prop_assert!(amount > Decimal::ZERO);
        }

        #[test]
        fn neutral_description_has_no_keywords(description in neutral_description_strategy()) {
            for keyword in ["fraud", "staged", "injur", "hospital", "medical"] {
                prop_assert!(!description.contains(keyword));
            }
        }
    }
}
