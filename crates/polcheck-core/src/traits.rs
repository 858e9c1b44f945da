//! The verifier seam.
//!
//! The loader in this crate knows how to turn a path into a `Document`; it
//! knows nothing about what makes a policy valid. Implementations of
//! `DocumentVerifier` supply that knowledge.

use polcheck_contracts::report::ValidationReport;
use serde_json::{Map, Value};

/// A parsed top-level JSON mapping.
pub type Document = Map<String, Value>;

/// A structural checker for one kind of JSON document.
///
/// Implementations must be pure: the same document always yields the same
/// answer, and `explain(doc).valid == verify(doc)` holds for every input.
/// Structural mismatches are never errors, which is why neither method
/// returns a `Result`.
pub trait DocumentVerifier: Send + Sync {
    /// Return true if the document passes every check.
    fn verify(&self, document: &Document) -> bool;

    /// Run every check without short-circuiting and report each failure.
    fn explain(&self, document: &Document) -> ValidationReport;
}
