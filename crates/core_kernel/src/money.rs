//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal, plus the parser that recovers an amount from the
//! loosely formatted text found in loss notices ("$1,200", "USD 3500.00",
//! "approx. 24,999 CAD").

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    USD,
    CAD,
    EUR,
    GBP,
}

impl Currency {
    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "C$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Resolves a symbol or code as written in a document
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker.trim().to_ascii_uppercase().as_str() {
            "$" | "US$" | "USD" => Some(Currency::USD),
            "C$" | "CA$" | "CAD" => Some(Currency::CAD),
            "€" | "EUR" => Some(Currency::EUR),
            "£" | "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("No amount found in: {0:?}")]
    Unparseable(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

// The grouped form needs at least one comma group, otherwise `[0-9]{1,3}`
// takes "250" out of "25000".
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?P<prefix>US\$|CA?\$|USD|CAD|EUR|GBP|\$|€|£)?\s*(?P<number>[0-9]{1,3}(?:,[0-9]{3})+(?:\.[0-9]+)?|[0-9]+(?:\.[0-9]+)?)(?:\s*(?P<suffix>USD|CAD|EUR|GBP)\b)?",
    )
    .expect("amount pattern is a valid regex")
});

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Parses the first amount written in `text`.
    ///
    /// Currency symbols and codes (before or after the number) select the
    /// currency, defaulting to USD. Thousands separators are dropped. The
    /// amount is kept exactly as written, so threshold checks see every
    /// digit.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Unparseable` when the text holds no number.
    pub fn parse(text: &str) -> Result<Self, MoneyError> {
        let captures = AMOUNT_PATTERN
            .captures(text)
            .ok_or_else(|| MoneyError::Unparseable(text.to_string()))?;

        let digits = captures
            .name("number")
            .map(|m| m.as_str().replace(',', ""))
            .ok_or_else(|| MoneyError::Unparseable(text.to_string()))?;

        let amount = Decimal::from_str(&digits)
            .map_err(|e| MoneyError::InvalidAmount(format!("{}: {}", digits, e)))?;

        let currency = captures
            .name("prefix")
            .or_else(|| captures.name("suffix"))
            .and_then(|m| Currency::from_marker(m.as_str()))
            .unwrap_or_default();

        Ok(Self { amount, currency })
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is strictly below `threshold`
    pub fn is_below(&self, threshold: Decimal) -> bool {
        self.amount < threshold
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency.symbol(), self.amount)
    }
}
