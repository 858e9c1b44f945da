//! # polcheck-core
//!
//! Document loading and the verifier seam for polcheck.
//!
//! This crate provides:
//! - The `DocumentVerifier` trait implemented by concrete validators
//! - The loader (`load_document`, `parse_document`) that produces a `Document`
//! - `verify_file` / `explain_file`, which load a path and delegate
//!
//! I/O and parse failures are returned as `PolcheckError`; they are never
//! folded into a `false` verdict.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use polcheck_core::verify_file;
//! use polcheck_verify::InlinePolicyVerifier;
//!
//! let valid = verify_file(&InlinePolicyVerifier, Path::new("policy.json"))?;
//! ```

pub mod source;
pub mod traits;

use std::path::Path;

use tracing::debug;

use polcheck_contracts::{error::PolcheckResult, report::ValidationReport};

pub use source::{load_document, parse_document};
pub use traits::{Document, DocumentVerifier};

/// Load the document at `path` and return the verifier's verdict.
pub fn verify_file(verifier: &dyn DocumentVerifier, path: &Path) -> PolcheckResult<bool> {
    let document = load_document(path)?;
    let valid = verifier.verify(&document);
    debug!(path = %path.display(), valid, "verification complete");
    Ok(valid)
}

/// Load the document at `path` and return the verifier's full report.
pub fn explain_file(verifier: &dyn DocumentVerifier, path: &Path) -> PolcheckResult<ValidationReport> {
    let document = load_document(path)?;
    let report = verifier.explain(&document);
    debug!(
        path = %path.display(),
        valid = report.valid,
        failure_count = report.failures.len(),
        "explanation complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use polcheck_contracts::{
        error::PolcheckError,
        report::{FailureKind, ValidationFailure},
    };

    use super::*;

    /// Accepts any document that carries a `PolicyName` key.
    struct HasNameVerifier;

    impl DocumentVerifier for HasNameVerifier {
        fn verify(&self, document: &Document) -> bool {
            document.contains_key("PolicyName")
        }

        fn explain(&self, document: &Document) -> ValidationReport {
            let mut failures = Vec::new();
            if !document.contains_key("PolicyName") {
                failures.push(ValidationFailure {
                    kind: FailureKind::PolicyName,
                    path: String::new(),
                    message: "missing PolicyName".to_string(),
                });
            }
            ValidationReport::from_failures(failures)
        }
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn verify_file_delegates_to_verifier() {
        let good = write_temp(r#"{"PolicyName": "root"}"#);
        let bad = write_temp(r#"{"Name": "root"}"#);

        assert!(verify_file(&HasNameVerifier, good.path()).unwrap());
        assert!(!verify_file(&HasNameVerifier, bad.path()).unwrap());
    }

    /// A missing file must be an error, distinguishable from `Ok(false)`.
    #[test]
    fn verify_file_missing_path_is_error_not_false() {
        let dir = tempfile::tempdir().unwrap();
        let result = verify_file(&HasNameVerifier, &dir.path().join("absent.json"));
        assert!(matches!(result, Err(PolcheckError::FileNotFound { .. })));
    }

    #[test]
    fn explain_file_returns_report() {
        let bad = write_temp(r#"{"Name": "root"}"#);
        let report = explain_file(&HasNameVerifier, bad.path()).unwrap();

        assert!(!report.valid);
        assert_eq!(report.failures[0].kind, FailureKind::PolicyName);
    }

    #[test]
    fn explain_file_malformed_input_is_error() {
        let bad = write_temp("[1, 2");
        let result = explain_file(&HasNameVerifier, bad.path());
        assert!(matches!(result, Err(PolcheckError::MalformedInput { .. })));
    }
}
