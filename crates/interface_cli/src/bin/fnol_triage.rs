//! FNOL Triage - Command Line Binary
//!
//! Reads a decoded First Notice of Loss document, extracts the claim
//! fields, routes the claim and prints the report as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! # Triage a text document
//! fnol-triage notice.txt
//!
//! # Read from stdin, compact output, custom configuration
//! cat notice.txt | fnol-triage --compact --config triage.toml -
//!
//! # Override settings from the environment
//! FNOL_ROUTING__FAST_TRACK_THRESHOLD=10000 fnol-triage notice.txt
//! ```
//!
//! # Environment Variables
//!
//! * `FNOL_CONFIG` - Config file path when `--config` is not given
//! * `FNOL_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)
//! * `FNOL_LOG_FORMAT` - `text` or `json` (default: text)
//! * `RUST_LOG` - Filter directive, overrides `FNOL_LOG_LEVEL`
//!
//! Logs always go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use interface_cli::{CliConfig, DocumentSource, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "fnol-triage", version, about = "Extract claim fields from an FNOL document and route the claim")]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report on one line
    #[arg(long)]
    compact: bool,

    /// Text document to triage, or `-` for stdin
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .or_else(|| std::env::var_os("FNOL_CONFIG").map(PathBuf::from));

    let mut config = CliConfig::load(config_path.as_deref())
        .context("Failed to load configuration")?;
    if cli.compact {
        config.pretty = false;
    }

    init_tracing(&config.log_level, config.log_format);

    let source = DocumentSource::from_arg(&cli.input);
    tracing::debug!(?source, "triaging document");

    let report = interface_cli::run(&source, &config)
        .with_context(|| format!("Failed to triage {}", cli.input.display()))?;

    println!("{}", report);
    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// # Arguments
///
/// * `log_level` - Fallback filter when `RUST_LOG` is unset
/// * `format` - Text or JSON lines
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
