//! Batch summary types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::report::{CompositeReport, Grade, Status};

/// What happened to one document in a batch.
///
/// A document that could not be loaded or validated is recorded as `Failed`;
/// the rest of the batch is unaffected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DocumentOutcome {
    Validated {
        id: String,
        report: CompositeReport,
        /// Substitutions applied before validation, when batch remediation is on.
        remediated_changes: Option<usize>,
    },
    Failed {
        id: String,
        error: String,
    },
}

impl DocumentOutcome {
    pub fn id(&self) -> &str {
        match self {
            DocumentOutcome::Validated { id, .. } | DocumentOutcome::Failed { id, .. } => id,
        }
    }

    pub fn report(&self) -> Option<&CompositeReport> {
        match self {
            DocumentOutcome::Validated { report, .. } => Some(report),
            DocumentOutcome::Failed { .. } => None,
        }
    }
}

/// Distribution summary over a batch of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub validated: usize,
    pub failed: usize,
    pub grade_histogram: BTreeMap<Grade, usize>,
    /// Fraction of all documents (failed ones included) whose status is `Pass`.
    pub pass_rate: f64,
    /// Critical-severity compliance violations across the batch.
    pub critical_issue_count: usize,
    /// One outcome per document, in input order.
    pub per_document: Vec<DocumentOutcome>,
}

impl BatchSummary {
    /// Fold per-document outcomes into a summary.
    pub fn from_outcomes(per_document: Vec<DocumentOutcome>) -> Self {
        let total = per_document.len();
        let mut grade_histogram = BTreeMap::new();
        let mut validated = 0;
        let mut passed = 0;
        let mut critical_issue_count = 0;

        for report in per_document.iter().filter_map(DocumentOutcome::report) {
            validated += 1;
            *grade_histogram.entry(report.grade).or_insert(0) += 1;
            if report.status == Status::Pass {
                passed += 1;
            }
            critical_issue_count += report.critical_issue_count();
        }

        let pass_rate = if total == 0 {
            0.0
        } else {
            passed as f64 / total as f64
        };

        Self {
            total,
            validated,
            failed: total - validated,
            grade_histogram,
            pass_rate,
            critical_issue_count,
            per_document,
        }
    }
}
