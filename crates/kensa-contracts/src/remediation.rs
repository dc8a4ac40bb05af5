//! Remediation result types.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::rule::Severity;

/// One substitution performed by the remediation transformer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub field_path: String,
    pub rule_id: String,
    pub severity: Severity,
    /// The text the rule matched.
    pub original: String,
    /// The canonical replacement inserted in its place.
    pub replacement: String,
    pub rationale: String,
}

/// The outcome of remediating one document.
///
/// `original` is the caller's input, untouched. `change_count` is the number
/// of substituted matches and always equals `changes.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationResult {
    pub original: Document,
    pub fixed: Document,
    pub changes: Vec<Change>,
    pub change_count: usize,
}

impl RemediationResult {
    pub fn new(original: Document, fixed: Document, changes: Vec<Change>) -> Self {
        let change_count = changes.len();
        Self {
            original,
            fixed,
            changes,
            change_count,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.change_count == 0
    }
}
