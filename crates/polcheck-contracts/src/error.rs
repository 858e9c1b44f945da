//! Error types for the polcheck pipeline.
//!
//! Only conditions that stop a document from being evaluated at all are
//! errors. A document that parses but fails a structural check is reported
//! as `false` (or as entries in a `ValidationReport`), never as an error.

use thiserror::Error;

/// The unified error type for polcheck.
#[derive(Debug, Error)]
pub enum PolcheckError {
    /// The source path could not be read.
    #[error("file '{path}' not found: {reason}")]
    FileNotFound { path: String, reason: String },

    /// The source is not valid JSON, not UTF-8, or its top level is not a mapping.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// The CLI configuration file is missing, unreadable, or not valid TOML.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The result could not be rendered or written to the output stream.
    #[error("output error: {reason}")]
    OutputError { reason: String },
}

/// Convenience alias used throughout the polcheck crates.
pub type PolcheckResult<T> = Result<T, PolcheckError>;
