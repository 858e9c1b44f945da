//! Diagnostic report types.
//!
//! `verify` answers a single yes/no question. When the caller wants to know
//! *why* a document was rejected, the verifier produces a `ValidationReport`
//! that lists every failing facet along with a JSON pointer to it.

use serde::{Deserialize, Serialize};

/// The facet of the document a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    PolicyName,
    PolicyDocument,
    Statement,
    Effect,
    Action,
    Resource,
}

/// A single failed check within a `ValidationReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub kind: FailureKind,
    /// RFC 6901 JSON pointer to the offending value, or to the mapping that
    /// is missing a required key. The document root is `""`.
    pub path: String,
    /// Human-readable explanation of why the check failed.
    pub message: String,
}

/// The result of running every check against one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True only if no check failed.
    pub valid: bool,
    /// Every failure found. Empty when `valid` is true.
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    /// Build a report from collected failures; `valid` is derived from them.
    pub fn from_failures(failures: Vec<ValidationFailure>) -> Self {
        Self {
            valid: failures.is_empty(),
            failures,
        }
    }
}
