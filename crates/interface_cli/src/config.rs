//! CLI configuration
//!
//! Settings come from built-in defaults, then an optional config file, then
//! `FNOL_`-prefixed environment variables, each overriding the last. Nested
//! keys use `__`, and list values are comma separated:
//!
//! ```text
//! FNOL_ROUTING__FAST_TRACK_THRESHOLD=10000
//! FNOL_ROUTING__FRAUD_KEYWORDS=fraud,staged
//! FNOL_LOG_FORMAT=json
//! ```

use std::path::Path;

use domain_intake::{IntakeSettings, RoutingConfig, ValidationConfig};
use serde::Deserialize;

/// Keys whose environment values are comma-separated lists
const LIST_KEYS: [&str; 3] = [
    "routing.fraud_keywords",
    "routing.injury_keywords",
    "validation.placeholder_tokens",
];

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub routing: RoutingConfig,
    pub validation: ValidationConfig,
    /// Log level or filter directive; `RUST_LOG` takes precedence
    pub log_level: String,
    pub log_format: LogFormat,
    /// Pretty-print the report
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            routing: RoutingConfig::default(),
            validation: ValidationConfig::default(),
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from an optional file and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with(path, Self::environment())
    }

    /// Loads configuration from an optional file and the given environment
    /// source
    pub fn load_with(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// The `FNOL_` environment source
    pub fn environment() -> config::Environment {
        LIST_KEYS.iter().fold(
            config::Environment::with_prefix("FNOL")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .try_parsing(true),
            |env, key| env.with_list_parse_key(key),
        )
    }

    /// The intake engine's share of the configuration
    pub fn intake_settings(&self) -> IntakeSettings {
        IntakeSettings {
            routing: self.routing.clone(),
            validation: self.validation.clone(),
        }
    }
}
