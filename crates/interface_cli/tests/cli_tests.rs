//! Tests for the fnol-triage command line adapter

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use rust_decimal_macros::dec;
use serde_json::Value;

use interface_cli::{run, CliConfig, CliError, DocumentSource, LogFormat};
use test_utils::{assert_report_shape, ScenarioDocuments};

/// Writes `contents` to a file unique to this test process
fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fnol-triage-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn empty_environment() -> config::Environment {
    CliConfig::environment().source(Some(config::Map::new()))
}

fn environment(vars: &[(&str, &str)]) -> config::Environment {
    let map = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    CliConfig::environment().source(Some(map))
}

// ============================================================================
// Document Loading Tests
// ============================================================================

mod document_tests {
    use super::*;

    #[test]
    fn test_run_renders_report() {
        let path = temp_file("minor.txt", ScenarioDocuments::minor_collision().as_bytes());
        let output = run(&DocumentSource::File(path), &CliConfig::default()).unwrap();

        assert_report_shape(&output);
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["recommendedRoute"], "Fast-track");
        assert_eq!(json["extractedFields"]["Policy Number"], "AC-1001");
    }

    #[test]
    fn test_upper_case_extension_accepted() {
        let path = temp_file("NOTICE.TXT", ScenarioDocuments::injury().as_bytes());
        let output = run(&DocumentSource::File(path), &CliConfig::default()).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["recommendedRoute"], "Specialist Queue");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut bytes = ScenarioDocuments::minor_collision().as_bytes().to_vec();
        bytes.extend_from_slice(b"Attachments: photo\xff.jpg\n");
        let path = temp_file("latin1.txt", &bytes);
        let output = run(&DocumentSource::File(path), &CliConfig::default()).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["extractedFields"]["Attachments"], "photo\u{FFFD}.jpg");
    }

    #[test]
    fn test_pdf_unsupported() {
        let path = temp_file("scan.pdf", b"%PDF-1.7");
        let result = run(&DocumentSource::File(path), &CliConfig::default());
        assert!(matches!(result, Err(CliError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("fnol-triage-no-such-file.txt");
        let result = run(&DocumentSource::File(path), &CliConfig::default());
        assert!(matches!(result, Err(CliError::Io { .. })));
    }

    #[test]
    fn test_compact_output() {
        let path = temp_file("compact.txt", ScenarioDocuments::minor_collision().as_bytes());
        let config = CliConfig {
            pretty: false,
            ..CliConfig::default()
        };
        let output = run(&DocumentSource::File(path), &config).unwrap();
        assert!(!output.contains('\n'));
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::load_with(None, empty_environment()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, "warn");
        assert!(config.pretty);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = temp_file(
            "triage.toml",
            b"log_format = \"json\"\n\n[routing]\nfast_track_threshold = 5000\nfraud_keywords = [\"suspicious\"]\n",
        );
        let config = CliConfig::load_with(Some(&path), empty_environment()).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.routing.fast_track_threshold, dec!(5000));
        assert_eq!(config.routing.fraud_keywords, vec!["suspicious".to_string()]);
        assert!(!config.routing.injury_keywords.is_empty());
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = temp_file("threshold.toml", b"[routing]\nfast_track_threshold = 5000\n");
        let env = environment(&[
            ("FNOL_ROUTING__FAST_TRACK_THRESHOLD", "10000"),
            ("FNOL_ROUTING__INJURY_KEYWORDS", "whiplash,concussion"),
            ("FNOL_PRETTY", "false"),
        ]);
        let config = CliConfig::load_with(Some(&path), env).unwrap();
        assert_eq!(config.routing.fast_track_threshold, dec!(10000));
        assert_eq!(
            config.routing.injury_keywords,
            vec!["whiplash".to_string(), "concussion".to_string()]
        );
        assert!(!config.pretty);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let path = std::env::temp_dir().join("fnol-triage-missing-config.toml");
        assert!(CliConfig::load_with(Some(&path), empty_environment()).is_err());
    }

    #[test]
    fn test_invalid_routing_config_fails_run() {
        let path = temp_file("valid.txt", ScenarioDocuments::minor_collision().as_bytes());
        let mut config = CliConfig::default();
        config.routing.fast_track_threshold = dec!(-1);
        let result = run(&DocumentSource::File(path), &config);
        assert!(matches!(result, Err(CliError::Intake(_))));
    }

    #[test]
    fn test_configured_threshold_changes_route() {
        let path = temp_file("threshold.txt", ScenarioDocuments::minor_collision().as_bytes());
        let env = environment(&[("FNOL_ROUTING__FAST_TRACK_THRESHOLD", "1000")]);
        let config = CliConfig::load_with(None, env).unwrap();
        let output = run(&DocumentSource::File(path), &config).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["recommendedRoute"], "Standard Processing");
    }
}

// ============================================================================
// Binary Tests
// ============================================================================

mod binary_tests {
    use super::*;

    fn fnol_triage() -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_fnol-triage"));
        command.env_remove("RUST_LOG").env_remove("FNOL_CONFIG");
        command
    }

    #[test]
    fn test_prints_report_on_stdout() {
        let path = temp_file("bin-fraud.txt", ScenarioDocuments::suspected_fraud().as_bytes());
        let output = fnol_triage().arg("--compact").arg(&path).output().unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        let json: Value = serde_json::from_str(stdout.trim()).unwrap();
        assert_eq!(json["recommendedRoute"], "Investigation Flag");
    }

    #[test]
    fn test_unsupported_format_exits_non_zero() {
        let path = temp_file("bin-scan.pdf", b"%PDF-1.7");
        let output = fnol_triage().arg(&path).output().unwrap();

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unsupported document format"));
    }

    #[test]
    fn test_missing_file_exits_non_zero() {
        let output = fnol_triage()
            .arg(std::env::temp_dir().join("fnol-triage-absent.txt"))
            .output()
            .unwrap();
        assert!(!output.status.success());
    }
}
