//! # polcheck-verify
//!
//! Structural validation for IAM-style inline policy documents.
//!
//! This crate provides [`engine::InlinePolicyVerifier`], which implements the
//! [`polcheck_core::traits::DocumentVerifier`] trait on top of the pure
//! predicate tree in [`rules`]. A document is valid when:
//!
//! - `PolicyName` is a 1..=128 character string starting with `[A-Za-z0-9_+=,.@-]`
//! - `PolicyDocument.Statement` is a sequence
//! - every statement has an `Effect` of `Allow`/`Deny`, a non-empty `Action`
//!   string or a sequence of strings, and `Resource` string(s) that are
//!   non-empty and do not begin with `*`
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! let valid = polcheck_verify::verify_path(Path::new("policy.json"))?;
//! ```

pub mod engine;
pub mod rules;
pub mod shape;

use std::path::Path;

use polcheck_contracts::{error::PolcheckResult, report::ValidationReport};
use polcheck_core::traits::{Document, DocumentVerifier};

pub use engine::InlinePolicyVerifier;

/// Verify an already-parsed document.
pub fn verify(document: &Document) -> bool {
    InlinePolicyVerifier.verify(document)
}

/// Load and verify the policy document at `path`.
///
/// Returns `FileNotFound` or `MalformedInput` when the file cannot be
/// evaluated; `Ok(false)` means it was evaluated and rejected.
pub fn verify_path(path: &Path) -> PolcheckResult<bool> {
    polcheck_core::verify_file(&InlinePolicyVerifier, path)
}

/// Load the policy document at `path` and explain every failed check.
pub fn explain_path(path: &Path) -> PolcheckResult<ValidationReport> {
    polcheck_core::explain_file(&InlinePolicyVerifier, path)
}
