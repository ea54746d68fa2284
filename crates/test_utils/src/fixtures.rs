//! Pre-built Test Fixtures
//!
//! Ready-to-use loss notices and amounts. The scenario documents are the
//! reference cases every routing outcome is checked against.

use core_kernel::{Currency, Money};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A small collision estimate
    pub fn usd_minor_damage() -> Money {
        Money::new(dec!(1200.00), Currency::USD)
    }

    /// One dollar under the default fast-track threshold
    pub fn usd_just_below_threshold() -> Money {
        Money::new(dec!(24999), Currency::USD)
    }

    /// Exactly the default fast-track threshold
    pub fn usd_at_threshold() -> Money {
        Money::new(dec!(25000), Currency::USD)
    }
}

/// Fixture for common field values
pub struct StringFixtures;

impl StringFixtures {
    pub fn policy_number() -> &'static str {
        "AC-1001"
    }

    pub fn policyholder_name() -> &'static str {
        "J. Doe"
    }

    pub fn incident_date() -> &'static str {
        "2023-05-01"
    }

    pub fn minor_description() -> &'static str {
        "Rear-end collision, minor scrape"
    }

    pub fn injury_description() -> &'static str {
        "driver taken to hospital with injury"
    }

    pub fn fraud_description() -> &'static str {
        "claim appears staged, inconsistent statements"
    }
}

/// Reference loss notices
pub struct ScenarioDocuments;

impl ScenarioDocuments {
    /// Complete notice with a $1,200 estimate; routes to fast-track
    pub fn minor_collision() -> &'static str {
        "Policy Number: AC-1001\n\
         Policyholder Name: J. Doe\n\
         Incident Date: 2023-05-01\n\
         Incident Description: Rear-end collision, minor scrape\n\
         Estimated Damage: $1,200\n"
    }

    /// Injury mentioned in the description; routes to the specialist queue
    pub fn injury() -> &'static str {
        "Policy Number: AC-1002\n\
         Policyholder Name: Maria Lopez\n\
         Incident Date: 2023-06-12\n\
         Incident Description: driver taken to hospital with injury\n\
         Estimated Damage: $8,000\n"
    }

    /// Fraud indicators in the description; routes to investigation
    pub fn suspected_fraud() -> &'static str {
        "Policy Number: AC-1003\n\
         Policyholder Name: Sam Carter\n\
         Incident Date: 2023-07-04\n\
         Incident Description: claim appears staged, inconsistent statements\n\
         Estimated Damage: $3,500\n"
    }

    /// No policy number; routes to manual review
    pub fn missing_policy_number() -> &'static str {
        "Policyholder Name: J. Doe\n\
         Incident Date: 2023-05-01\n\
         Incident Description: Rear-end collision, minor scrape\n\
         Estimated Damage: $1,200\n"
    }

    /// Damage written as N/A; routes to standard processing
    pub fn damage_not_available() -> &'static str {
        "Policy Number: AC-1005\n\
         Policyholder Name: J. Doe\n\
         Incident Date: 2023-05-01\n\
         Incident Description: Side mirror clipped in parking lot\n\
         Estimated Damage: N/A\n"
    }

    /// A typed ACORD-style form with captions, column padding and blanks
    pub fn acord_style_form() -> &'static str {
        "ACORD 2 AUTOMOBILE LOSS NOTICE\r\n\
         \r\n\
         POLICY NUMBER:    PA-778812\r\n\
         NAME OF INSURED (First, Middle, Last):   Dana   R. Whitfield\r\n\
         Date/Time of Loss: 03/14/2024 4:30 PM\r\n\
         Location of Loss: 1800 Harbor Blvd\r\n\
         City, State, Zip: Tacoma, WA 98402\r\n\
         Description of Accident: Insured vehicle backed into a light pole\r\n\
         while leaving the garage. Rear bumper and tailgate dented.\r\n\
         Claim Type: Collision\r\n\
         Estimated Damage: USD 4,250.00\r\n\
         Attachments: photos_1-6.jpg, repair_quote.pdf\r\n"
    }
}
