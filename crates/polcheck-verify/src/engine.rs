//! Inline policy verifier.
//!
//! `InlinePolicyVerifier` implements the `DocumentVerifier` trait from
//! `polcheck-core`. It answers two questions:
//!
//! 1. **verify**: does the document pass? Evaluated with the boolean
//!    predicates in [`crate::rules`], short-circuiting on the first failure.
//! 2. **explain**: what exactly is wrong? Walks the same tree without
//!    short-circuiting and records every failure with a JSON pointer, so
//!    operators see the full failure set in one pass.
//!
//! Statement-level checks only run when the document wrapper has the right
//! shape; otherwise there are no statements to locate.

use serde_json::{Map, Value};
use tracing::debug;

use polcheck_contracts::report::{FailureKind, ValidationFailure, ValidationReport};
use polcheck_core::traits::{Document, DocumentVerifier};

use crate::rules::{
    self, ACTION, EFFECT, EFFECTS, MAX_POLICY_NAME_LEN, POLICY_DOCUMENT, POLICY_NAME, RESOURCE,
    STATEMENT,
};
use crate::shape::Shape;

/// The verifier for IAM-style inline policy documents. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlinePolicyVerifier;

impl DocumentVerifier for InlinePolicyVerifier {
    fn verify(&self, document: &Document) -> bool {
        let valid = rules::policy_name_valid(document)
            && rules::policy_document_shape_valid(document)
            && rules::inner_document(document).is_some_and(rules::all_statements_valid);

        debug!(valid, "policy verified");
        valid
    }

    fn explain(&self, document: &Document) -> ValidationReport {
        let mut collector = Collector::default();

        collector.policy_name(document);
        if let Some(items) = rules::inner_document(document).and_then(rules::statements) {
            let base = pointer(&pointer("", POLICY_DOCUMENT), STATEMENT);
            debug!(statements = items.len(), "explaining statements");
            for (index, statement) in items.iter().enumerate() {
                collector.statement(statement, &pointer(&base, &index.to_string()));
            }
        } else {
            collector.policy_document(document);
        }

        let report = ValidationReport::from_failures(collector.failures);
        debug!(
            valid = report.valid,
            failure_count = report.failures.len(),
            "policy explained"
        );
        report
    }
}

/// Append an RFC 6901 reference token to `base`.
fn pointer(base: &str, token: &str) -> String {
    format!("{base}/{}", token.replace('~', "~0").replace('/', "~1"))
}

#[derive(Default)]
struct Collector {
    failures: Vec<ValidationFailure>,
}

impl Collector {
    fn push(&mut self, kind: FailureKind, path: String, message: String) {
        debug!(?kind, %path, %message, "check failed");
        self.failures.push(ValidationFailure { kind, path, message });
    }

    fn missing(&mut self, kind: FailureKind, path: &str, key: &str) {
        self.push(kind, path.to_string(), format!("missing required key '{key}'"));
    }

    fn policy_name(&mut self, document: &Document) {
        let Some(value) = document.get(POLICY_NAME) else {
            self.missing(FailureKind::PolicyName, "", POLICY_NAME);
            return;
        };
        if rules::policy_name_valid(document) {
            return;
        }

        let message = match Shape::of(value) {
            Shape::Text(name) => {
                let len = name.chars().count();
                if (1..=MAX_POLICY_NAME_LEN).contains(&len) {
                    "policy name must start with a character in [A-Za-z0-9_+=,.@-]".to_string()
                } else {
                    format!("policy name length {len} is outside 1..={MAX_POLICY_NAME_LEN}")
                }
            }
            other => format!("policy name must be a string, found {}", other.describe()),
        };
        self.push(FailureKind::PolicyName, pointer("", POLICY_NAME), message);
    }

    /// Only called when the wrapper shape is wrong; reports the outermost cause.
    fn policy_document(&mut self, document: &Document) {
        let path = pointer("", POLICY_DOCUMENT);
        match document.get(POLICY_DOCUMENT).map(Shape::of) {
            None => self.missing(FailureKind::PolicyDocument, "", POLICY_DOCUMENT),
            Some(Shape::Mapping(inner)) => match inner.get(STATEMENT).map(Shape::of) {
                None => self.missing(FailureKind::PolicyDocument, &path, STATEMENT),
                Some(other) => {
                    let message =
                        format!("statements must be a sequence, found {}", other.describe());
                    self.push(FailureKind::PolicyDocument, pointer(&path, STATEMENT), message);
                }
            },
            Some(other) => {
                let message =
                    format!("policy document must be a mapping, found {}", other.describe());
                self.push(FailureKind::PolicyDocument, path, message);
            }
        }
    }

    fn statement(&mut self, statement: &Value, path: &str) {
        let fields: &Map<String, Value> = match Shape::of(statement) {
            Shape::Mapping(fields) => fields,
            other => {
                let message = format!("statement must be a mapping, found {}", other.describe());
                self.push(FailureKind::Statement, path.to_string(), message);
                return;
            }
        };

        match fields.get(EFFECT) {
            Some(effect) => self.effect(effect, &pointer(path, EFFECT)),
            None => self.missing(FailureKind::Statement, path, EFFECT),
        }
        match fields.get(ACTION) {
            Some(action) => self.actions(action, &pointer(path, ACTION)),
            None => self.missing(FailureKind::Statement, path, ACTION),
        }
        match fields.get(RESOURCE) {
            Some(resource) => self.resources(resource, &pointer(path, RESOURCE)),
            None => self.missing(FailureKind::Statement, path, RESOURCE),
        }
    }

    fn effect(&mut self, effect: &Value, path: &str) {
        if rules::effect_valid(effect) {
            return;
        }
        let message = match Shape::of(effect) {
            Shape::Text(s) => format!("effect '{s}' is not one of {}", EFFECTS.join(", ")),
            other => format!("effect must be a string, found {}", other.describe()),
        };
        self.push(FailureKind::Effect, path.to_string(), message);
    }

    fn actions(&mut self, action: &Value, path: &str) {
        match Shape::of(action) {
            Shape::Sequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_shape = Shape::of(item);
                    if !item_shape.is_text() {
                        let message =
                            format!("action must be a string, found {}", item_shape.describe());
                        self.push(FailureKind::Action, pointer(path, &index.to_string()), message);
                    }
                }
            }
            Shape::Text("") => {
                self.push(FailureKind::Action, path.to_string(), "action must not be empty".to_string());
            }
            Shape::Text(_) => {}
            other => {
                let message = format!(
                    "action must be a string or a sequence of strings, found {}",
                    other.describe()
                );
                self.push(FailureKind::Action, path.to_string(), message);
            }
        }
    }

    fn resources(&mut self, resource: &Value, path: &str) {
        match Shape::of(resource) {
            Shape::Sequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.resource(item, &pointer(path, &index.to_string()));
                }
            }
            _ => self.resource(resource, path),
        }
    }

    fn resource(&mut self, resource: &Value, path: &str) {
        if rules::resource_valid(resource) {
            return;
        }
        let message = match Shape::of(resource) {
            Shape::Text("") => "resource must not be empty".to_string(),
            Shape::Text(_) => "resource must not begin with '*'".to_string(),
            other => format!("resource must be a string, found {}", other.describe()),
        };
        self.push(FailureKind::Resource, path.to_string(), message);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
