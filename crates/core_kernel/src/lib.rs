//! Core Kernel - Foundational types for the FNOL intake system
//!
//! This crate provides the building blocks shared by the intake engine and
//! its adapters:
//! - Money types with precise decimal arithmetic
//! - Parsing of monetary amounts out of free-text form values

pub mod money;

pub use money::{Money, Currency, MoneyError};
