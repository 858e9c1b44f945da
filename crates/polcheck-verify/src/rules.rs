//! The predicate tree for inline policy documents.
//!
//! ```text
//! verify
//! ├── policy_name_valid
//! ├── policy_document_shape_valid
//! └── all_statements_valid
//!     └── statement_valid (per entry)
//!         ├── effect_valid
//!         ├── actions_valid
//!         └── resources_valid
//!             └── resource_valid (per entry)
//! ```
//!
//! Every function here is pure and total: malformed input yields `false`,
//! never a panic or an error.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::shape::Shape;

pub const POLICY_NAME: &str = "PolicyName";
pub const POLICY_DOCUMENT: &str = "PolicyDocument";
pub const STATEMENT: &str = "Statement";
pub const EFFECT: &str = "Effect";
pub const ACTION: &str = "Action";
pub const RESOURCE: &str = "Resource";

pub const MAX_POLICY_NAME_LEN: usize = 128;

pub const EFFECTS: [&str; 2] = ["Allow", "Deny"];

// Anchored at the start only. The tail of the name is not checked.
static POLICY_NAME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_+=,.@-]+").expect("policy name pattern compiles"));

/// True if `name` is 1..=128 characters long and starts with at least one
/// character from `[A-Za-z0-9_+=,.@-]`.
pub fn policy_name_format_valid(name: &str) -> bool {
    let len = name.chars().count();
    (1..=MAX_POLICY_NAME_LEN).contains(&len) && POLICY_NAME_PREFIX.is_match(name)
}

pub fn policy_name_valid(document: &Map<String, Value>) -> bool {
    match document.get(POLICY_NAME).map(Shape::of) {
        Some(Shape::Text(name)) => policy_name_format_valid(name),
        _ => false,
    }
}

/// The inner policy document, if `PolicyDocument` is a mapping.
pub fn inner_document(document: &Map<String, Value>) -> Option<&Map<String, Value>> {
    match document.get(POLICY_DOCUMENT).map(Shape::of) {
        Some(Shape::Mapping(inner)) => Some(inner),
        _ => None,
    }
}

/// The `Statement` sequence of an inner policy document, if it is one.
pub fn statements(inner: &Map<String, Value>) -> Option<&[Value]> {
    match inner.get(STATEMENT).map(Shape::of) {
        Some(Shape::Sequence(items)) => Some(items),
        _ => None,
    }
}

pub fn policy_document_shape_valid(document: &Map<String, Value>) -> bool {
    inner_document(document).and_then(statements).is_some()
}

/// True if every statement passes `statement_valid`. An empty sequence is
/// valid; a missing or non-sequence `Statement` is not.
pub fn all_statements_valid(inner: &Map<String, Value>) -> bool {
    statements(inner).is_some_and(|items| items.iter().all(statement_valid))
}

pub fn statement_valid(statement: &Value) -> bool {
    let Shape::Mapping(fields) = Shape::of(statement) else {
        return false;
    };

    match (fields.get(EFFECT), fields.get(ACTION), fields.get(RESOURCE)) {
        (Some(effect), Some(action), Some(resource)) => {
            effect_valid(effect) && actions_valid(action) && resources_valid(resource)
        }
        _ => false,
    }
}

pub fn effect_valid(effect: &Value) -> bool {
    matches!(Shape::of(effect), Shape::Text(s) if EFFECTS.contains(&s))
}

/// A non-empty string, or a sequence of strings. Elements of a sequence may
/// be empty strings.
pub fn actions_valid(action: &Value) -> bool {
    match Shape::of(action) {
        Shape::Sequence(items) => items.iter().all(|a| Shape::of(a).is_text()),
        Shape::Text(s) => !s.is_empty(),
        _ => false,
    }
}

pub fn resources_valid(resource: &Value) -> bool {
    match Shape::of(resource) {
        Shape::Sequence(items) => items.iter().all(resource_valid),
        _ => resource_valid(resource),
    }
}

/// A non-empty string that does not begin with `*`. Wildcards elsewhere in
/// the string are accepted.
pub fn resource_valid(resource: &Value) -> bool {
    match Shape::of(resource) {
        Shape::Text(s) => !s.is_empty() && !s.starts_with('*'),
        _ => false,
    }
}
