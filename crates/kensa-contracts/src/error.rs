//! Error types for the kensa validation pipeline.
//!
//! All fallible operations return `KensaResult<T>`. Per-reference and
//! per-evidence problems are findings inside a `CheckResult`, not errors:
//! only conditions that prevent a document from being checked at all, or
//! that make the rule registry unusable, surface here.

use thiserror::Error;

/// The unified error type for kensa.
#[derive(Debug, Error)]
pub enum KensaError {
    /// The supplied value is not a traversable article (the root is not an object).
    #[error("input error: {reason}")]
    InputError { reason: String },

    /// The document nests deeper than the walker's recursion cap.
    #[error("document too deep at '{path}': nesting exceeds {limit} levels")]
    DocumentTooDeep { path: String, limit: usize },

    /// The rule registry failed its load-time self-test.
    ///
    /// Fatal at startup: no document may be checked against a registry that
    /// cannot guarantee idempotent remediation.
    #[error("rule registry error: {reason}")]
    RuleRegistry { reason: String },

    /// Registry configuration could not be read or deserialized.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A document source could not produce a parsed document.
    #[error("failed to parse document '{source_id}': {reason}")]
    ParseError { source_id: String, reason: String },

    /// A document source was given the same id twice.
    #[error("duplicate document id '{id}'")]
    DuplicateDocument { id: String },

    /// A report or summary could not be written out.
    #[error("output write failed: {reason}")]
    OutputError { reason: String },
}

/// Convenience alias used throughout the kensa crates.
pub type KensaResult<T> = Result<T, KensaError>;
