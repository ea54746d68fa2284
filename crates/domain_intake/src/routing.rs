//! Claim routing
//!
//! Routing is a decision table evaluated with a first-hit policy: rules are
//! checked in priority order and the first whose predicate fires decides
//! the route. The last standard rule always fires, so evaluation of the
//! standard table is total.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;

use crate::error::IntakeError;
use crate::field::{ExtractedFields, FieldName};

/// Where a claim goes next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "Fast-track")]
    FastTrack,
    #[serde(rename = "Standard Processing")]
    StandardProcessing,
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,
    #[serde(rename = "Manual Review")]
    ManualReview,
    #[serde(rename = "Investigation Flag")]
    InvestigationFlag,
}

impl Route {
    /// Returns the label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Route::FastTrack => "Fast-track",
            Route::StandardProcessing => "Standard Processing",
            Route::SpecialistQueue => "Specialist Queue",
            Route::ManualReview => "Manual Review",
            Route::InvestigationFlag => "Investigation Flag",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Routing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Damage strictly below this amount is fast-tracked
    pub fast_track_threshold: Decimal,
    pub fraud_keywords: Vec<String>,
    pub injury_keywords: Vec<String>,
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fast_track_threshold: dec!(25000),
            fraud_keywords: keywords(&["fraud", "staged", "inconsistent", "fabricated", "misrepresent"]),
            injury_keywords: keywords(&[
                "injury",
                "injuries",
                "injured",
                "hospital",
                "medical",
                "ambulance",
                "whiplash",
                "fracture",
                "paramedic",
                "bodily",
            ]),
        }
    }
}

impl RoutingConfig {
    /// Checks the configuration before use.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidConfiguration` for a non-positive
    /// threshold or a blank keyword.
    pub fn validate(&self) -> Result<(), IntakeError> {
        if self.fast_track_threshold <= Decimal::ZERO {
            return Err(IntakeError::configuration(format!(
                "fast_track_threshold must be positive, got {}",
                self.fast_track_threshold
            )));
        }
        for (list, words) in [
            ("fraud_keywords", &self.fraud_keywords),
            ("injury_keywords", &self.injury_keywords),
        ] {
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(IntakeError::configuration(format!(
                    "{} contains a blank entry",
                    list
                )));
            }
        }
        Ok(())
    }

    /// Trims and lowercases keywords for case-insensitive matching
    fn normalized(&self) -> Self {
        let fold = |words: &[String]| -> Vec<String> {
            words.iter().map(|w| w.trim().to_lowercase()).collect()
        };
        Self {
            fast_track_threshold: self.fast_track_threshold,
            fraud_keywords: fold(&self.fraud_keywords),
            injury_keywords: fold(&self.injury_keywords),
        }
    }
}

/// Everything a rule predicate may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub fields: &'a ExtractedFields,
    pub missing: &'a [FieldName],
    pub estimated_damage: Option<&'a Money>,
    pub config: &'a RoutingConfig,
}

/// A rule predicate. Returns the detail that fills the reasoning template
/// when the rule fires.
pub type Predicate = fn(&RuleContext<'_>) -> Option<String>;

/// One row of the routing table
#[derive(Clone, Copy)]
pub struct RoutingRule {
    pub priority: u32,
    pub name: &'static str,
    pub route: Route,
    pub predicate: Predicate,
    /// Reasoning sentence; `{detail}` is replaced by the predicate's output
    pub reasoning: &'static str,
}

impl fmt::Debug for RoutingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingRule")
            .field("priority", &self.priority)
            .field("name", &self.name)
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}

impl RoutingRule {
    fn apply(&self, context: &RuleContext<'_>) -> Option<RoutingDecision> {
        (self.predicate)(context).map(|detail| RoutingDecision {
            route: self.route,
            reasoning: self.reasoning.replace("{detail}", &detail),
            rule: self.name,
        })
    }
}

/// Fields searched for indicator keywords, in search order
const KEYWORD_FIELDS: [FieldName; 2] = [FieldName::IncidentDescription, FieldName::ClaimType];

/// Finds the first keyword mentioned in the description or claim type.
/// Keywords must already be lowercase.
fn keyword_hit(fields: &ExtractedFields, keywords: &[String]) -> Option<String> {
    KEYWORD_FIELDS.iter().find_map(|field| {
        let text = fields.get(*field)?.to_lowercase();
        keywords
            .iter()
            .find(|k| text.contains(k.as_str()))
            .map(|k| format!("{} mentions '{}'", field, k))
    })
}

fn missing_mandatory(ctx: &RuleContext<'_>) -> Option<String> {
    if ctx.missing.is_empty() {
        return None;
    }
    Some(
        ctx.missing
            .iter()
            .map(FieldName::label)
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn fraud_indicator(ctx: &RuleContext<'_>) -> Option<String> {
    keyword_hit(ctx.fields, &ctx.config.fraud_keywords)
}

fn injury_indicator(ctx: &RuleContext<'_>) -> Option<String> {
    keyword_hit(ctx.fields, &ctx.config.injury_keywords)
}

fn low_damage(ctx: &RuleContext<'_>) -> Option<String> {
    let threshold = ctx.config.fast_track_threshold;
    ctx.estimated_damage
        .filter(|damage| damage.is_below(threshold))
        .map(|_| threshold.normalize().to_string())
}

fn always(_: &RuleContext<'_>) -> Option<String> {
    Some(String::new())
}

/// The standard routing table
pub static STANDARD_RULES: &[RoutingRule] = &[
    RoutingRule {
        priority: 1,
        name: "missing-mandatory-fields",
        route: Route::ManualReview,
        predicate: missing_mandatory,
        reasoning: "Missing mandatory field(s): {detail}.",
    },
    RoutingRule {
        priority: 2,
        name: "fraud-indicator",
        route: Route::InvestigationFlag,
        predicate: fraud_indicator,
        reasoning: "Fraud indicator found: {detail}.",
    },
    RoutingRule {
        priority: 3,
        name: "injury-indicator",
        route: Route::SpecialistQueue,
        predicate: injury_indicator,
        reasoning: "Injury indicator found: {detail}.",
    },
    RoutingRule {
        priority: 4,
        name: "low-damage",
        route: Route::FastTrack,
        predicate: low_damage,
        reasoning: "Estimated damage below {detail}.",
    },
    RoutingRule {
        priority: 5,
        name: "standard",
        route: Route::StandardProcessing,
        predicate: always,
        reasoning: "All mandatory fields present and no special routing rules matched.",
    },
];

/// The outcome of routing one claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    pub route: Route,
    pub reasoning: String,
    /// Name of the rule that fired
    pub rule: &'static str,
}

/// Evaluates a routing table
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<RoutingRule>,
    config: RoutingConfig,
}

impl RuleEngine {
    /// Creates an engine over the standard table
    pub fn new(config: RoutingConfig) -> Result<Self, IntakeError> {
        Self::with_rules(config, STANDARD_RULES.to_vec())
    }

    /// Creates an engine over a custom table, ordered by priority
    pub fn with_rules(config: RoutingConfig, mut rules: Vec<RoutingRule>) -> Result<Self, IntakeError> {
        config.validate()?;
        if rules.is_empty() {
            return Err(IntakeError::configuration("routing table has no rules"));
        }
        rules.sort_by_key(|r| r.priority);
        Ok(Self {
            rules,
            config: config.normalized(),
        })
    }

    /// Returns the settings in effect, keywords lowercased and trimmed
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Routes a claim; the first rule that fires wins.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::NoRuleMatched` if the table has no rule that
    /// fires for this claim.
    pub fn evaluate(
        &self,
        fields: &ExtractedFields,
        missing: &[FieldName],
        estimated_damage: Option<&Money>,
    ) -> Result<RoutingDecision, IntakeError> {
        let context = RuleContext {
            fields,
            missing,
            estimated_damage,
            config: &self.config,
        };

        self.rules
            .iter()
            .find_map(|rule| rule.apply(&context))
            .ok_or(IntakeError::NoRuleMatched)
    }
}
