//! # polcheck-contracts
//!
//! Shared types for the polcheck inline-policy validator.
//!
//! All crates in the workspace import from here. No validation logic lives in
//! this crate, only the error taxonomy and the diagnostic report shapes.

pub mod error;
pub mod report;

#[cfg(test)]
mod tests {
    use super::*;
    use error::PolcheckError;
    use report::{FailureKind, ValidationFailure, ValidationReport};

    fn failure(kind: FailureKind, path: &str) -> ValidationFailure {
        ValidationFailure {
            kind,
            path: path.to_string(),
            message: "check failed".to_string(),
        }
    }

    // ── ValidationReport ─────────────────────────────────────────────────────

    #[test]
    fn report_without_failures_is_valid() {
        let report = ValidationReport::from_failures(vec![]);
        assert!(report.valid);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn report_with_failures_is_invalid() {
        let report = ValidationReport::from_failures(vec![failure(
            FailureKind::Effect,
            "/PolicyDocument/Statement/0/Effect",
        )]);
        assert!(!report.valid);
        assert_eq!(report.failures.len(), 1);
    }

    // ── FailureKind wire format ──────────────────────────────────────────────

    #[test]
    fn failure_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&FailureKind::PolicyDocument).unwrap();
        assert_eq!(json, "\"policy-document\"");

        let decoded: FailureKind = serde_json::from_str("\"policy-name\"").unwrap();
        assert_eq!(decoded, FailureKind::PolicyName);
    }

    #[test]
    fn report_serializes_with_failure_fields() {
        let report = ValidationReport::from_failures(vec![failure(
            FailureKind::Resource,
            "/PolicyDocument/Statement/0/Resource/1",
        )]);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["valid"], false);
        assert_eq!(value["failures"][0]["kind"], "resource");
        assert_eq!(
            value["failures"][0]["path"],
            "/PolicyDocument/Statement/0/Resource/1"
        );
    }

    // ── PolcheckError display messages ───────────────────────────────────────

    #[test]
    fn error_file_not_found_display() {
        let err = PolcheckError::FileNotFound {
            path: "policy.json".to_string(),
            reason: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("policy.json"));
    }

    #[test]
    fn error_malformed_input_display() {
        let err = PolcheckError::MalformedInput {
            reason: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("malformed input"));
        assert!(msg.contains("line 1 column 1"));
    }

    #[test]
    fn error_config_error_display() {
        let err = PolcheckError::ConfigError {
            reason: "unknown output format".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("unknown output format"));
    }

    #[test]
    fn error_output_error_display() {
        let err = PolcheckError::OutputError {
            reason: "broken pipe".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("output error"));
        assert!(msg.contains("broken pipe"));
    }
}
