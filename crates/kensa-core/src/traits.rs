//! Core trait definitions for the kensa pipeline.
//!
//! These four traits are the seams between crates:
//!
//! - `Checker`        — one scored category (pure, registry passed by reference)
//! - `Validator`      — runs every checker and grades the document
//! - `Remediator`     — rewrites regulated terms into a new document
//! - `DocumentSource` — the only I/O boundary; supplies parsed documents
//!
//! The batch runner wires them together. Implementations of the first three
//! must be deterministic and free of side effects so documents can be
//! processed on any number of threads.

use kensa_contracts::{
    document::Document,
    error::KensaResult,
    remediation::RemediationResult,
    report::{Category, CheckResult, CompositeReport},
    rule::Severity,
};
use kensa_rules::RuleRegistry;

/// A single scoring category.
pub trait Checker: Send + Sync {
    /// The category this checker scores.
    fn category(&self) -> Category;

    /// Inspect the whole document and return a bounded score plus findings.
    ///
    /// Only structural failures of the document itself (excessive depth) are
    /// errors; everything the checker dislikes is a finding.
    fn check(&self, document: &Document, registry: &RuleRegistry) -> KensaResult<CheckResult>;
}

/// Validation of one document into a graded report.
pub trait Validator: Send + Sync {
    /// Produce the composite report for `document`.
    ///
    /// Fails fast with `InputError` when the document root is not an object;
    /// no partial check results are returned in that case.
    fn validate(&self, document: &Document) -> KensaResult<CompositeReport>;
}

/// Auto-remediation of regulated terminology.
pub trait Remediator: Send + Sync {
    /// Rewrite every rule at or above `threshold` and record each substitution.
    ///
    /// Must be idempotent: remediating `result.fixed` again yields no changes.
    fn remediate(&self, document: &Document, threshold: Severity) -> KensaResult<RemediationResult>;
}

/// Supplies documents to the batch runner.
///
/// This is the one place I/O happens. A failure to load one document is
/// reported as `KensaError::ParseError` and isolated to that document.
pub trait DocumentSource: Send + Sync {
    /// Identifiers of every document, in processing order.
    fn ids(&self) -> Vec<String>;

    /// Load and parse the document named `id`.
    fn load(&self, id: &str) -> KensaResult<Document>;
}
