//! Document loading.
//!
//! Reads raw bytes and hands them to `serde_json`, so a file that is not
//! UTF-8 surfaces as `MalformedInput` rather than as an I/O failure. Any
//! failure to read the path at all is `FileNotFound`.
//!
//! `serde_json` stops at 128 levels of nesting. Deeper documents are
//! reported as `MalformedInput` rather than evaluated.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use polcheck_contracts::error::{PolcheckError, PolcheckResult};

use crate::traits::Document;

/// Parse `text` as JSON and require a mapping at the top level.
pub fn parse_document(text: &str) -> PolcheckResult<Document> {
    parse_slice(text.as_bytes())
}

/// Read the file at `path` and parse it as a policy document.
pub fn load_document(path: &Path) -> PolcheckResult<Document> {
    let bytes = std::fs::read(path).map_err(|e| PolcheckError::FileNotFound {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "read policy document");

    parse_slice(&bytes).map_err(|e| match e {
        PolcheckError::MalformedInput { reason } => PolcheckError::MalformedInput {
            reason: format!("'{}': {}", path.display(), reason),
        },
        other => other,
    })
}

fn parse_slice(bytes: &[u8]) -> PolcheckResult<Document> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| PolcheckError::MalformedInput {
        reason: format!("could not parse JSON: {e}"),
    })?;

    match value {
        Value::Object(map) => {
            debug!(keys = map.len(), "parsed policy document");
            Ok(map)
        }
        other => Err(PolcheckError::MalformedInput {
            reason: format!("top-level value must be a mapping, found {}", kind_name(&other)),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
