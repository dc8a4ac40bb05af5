//! The batch orchestrator.
//!
//! For every document the source names:
//!
//!   load → [remediate] → validate → outcome
//!
//! A load or validation error is recorded as `DocumentOutcome::Failed` for
//! that document only; the batch always runs to the end. With
//! `BatchOptions::parallel` the documents are processed on the rayon pool;
//! outcomes are returned in source order either way.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use kensa_contracts::{
    batch::{BatchSummary, DocumentOutcome},
    document::Document,
    error::{KensaError, KensaResult},
    report::CompositeReport,
    rule::Severity,
};

use crate::traits::{DocumentSource, Remediator, Validator};

/// Options for a batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Process documents concurrently.
    pub parallel: bool,
}

/// Runs the validation pipeline over every document of a `DocumentSource`.
pub struct BatchRunner<'a> {
    validator: &'a dyn Validator,
    remediation: Option<(&'a dyn Remediator, Severity)>,
    options: BatchOptions,
}

impl<'a> BatchRunner<'a> {
    pub fn new(validator: &'a dyn Validator, options: BatchOptions) -> Self {
        Self {
            validator,
            remediation: None,
            options,
        }
    }

    /// Remediate each document at `threshold` before validating the result.
    pub fn with_remediation(mut self, remediator: &'a dyn Remediator, threshold: Severity) -> Self {
        self.remediation = Some((remediator, threshold));
        self
    }

    /// Process every document and summarize the outcomes.
    pub fn run(&self, source: &dyn DocumentSource) -> BatchSummary {
        let ids = source.ids();
        info!(documents = ids.len(), parallel = self.options.parallel, "batch starting");

        let outcomes: Vec<DocumentOutcome> = if self.options.parallel {
            ids.par_iter().map(|id| self.process(source, id)).collect()
        } else {
            ids.iter().map(|id| self.process(source, id)).collect()
        };

        let summary = BatchSummary::from_outcomes(outcomes);
        info!(
            total = summary.total,
            failed = summary.failed,
            pass_rate = summary.pass_rate,
            critical_issues = summary.critical_issue_count,
            "batch complete"
        );
        summary
    }

    fn process(&self, source: &dyn DocumentSource, id: &str) -> DocumentOutcome {
        match self.validate_one(source, id) {
            Ok((report, remediated_changes)) => {
                debug!(
                    document = id,
                    score = report.total_score,
                    grade = %report.grade,
                    "document validated"
                );
                DocumentOutcome::Validated {
                    id: id.to_string(),
                    report,
                    remediated_changes,
                }
            }
            Err(e) => {
                warn!(document = id, error = %e, "document failed; continuing batch");
                DocumentOutcome::Failed {
                    id: id.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    fn validate_one(
        &self,
        source: &dyn DocumentSource,
        id: &str,
    ) -> KensaResult<(CompositeReport, Option<usize>)> {
        let document = source.load(id)?;
        match self.remediation {
            Some((remediator, threshold)) => {
                let result = remediator.remediate(&document, threshold)?;
                let report = self.validator.validate(&result.fixed)?;
                Ok((report, Some(result.change_count)))
            }
            None => Ok((self.validator.validate(&document)?, None)),
        }
    }
}

/// A document held in memory, either parsed or as raw JSON text.
#[derive(Debug, Clone)]
enum Entry {
    Parsed(Document),
    Raw(String),
}

/// A `DocumentSource` over documents already in memory.
///
/// Raw JSON entries are parsed on load, so malformed text surfaces as a
/// per-document `ParseError` exactly like a file-backed source would.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    entries: Vec<(String, Entry)>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parsed document. Ids are unique within a source.
    pub fn push(&mut self, id: impl Into<String>, document: Document) -> KensaResult<()> {
        self.insert(id.into(), Entry::Parsed(document))
    }

    /// Add raw JSON text, parsed when the batch loads it.
    pub fn push_json(&mut self, id: impl Into<String>, json: impl Into<String>) -> KensaResult<()> {
        self.insert(id.into(), Entry::Raw(json.into()))
    }

    fn insert(&mut self, id: String, entry: Entry) -> KensaResult<()> {
        if self.entries.iter().any(|(existing, _)| *existing == id) {
            return Err(KensaError::DuplicateDocument { id });
        }
        self.entries.push((id, entry));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocumentSource for InMemorySource {
    fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|(id, _)| id.clone()).collect()
    }

    fn load(&self, id: &str) -> KensaResult<Document> {
        let entry = self
            .entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, entry)| entry)
            .ok_or_else(|| KensaError::ParseError {
                source_id: id.to_string(),
                reason: "no such document".to_string(),
            })?;

        match entry {
            Entry::Parsed(document) => Ok(document.clone()),
            Entry::Raw(text) => serde_json::from_str::<serde_json::Value>(text)
                .map(Document::from)
                .map_err(|e| KensaError::ParseError {
                    source_id: id.to_string(),
                    reason: e.to_string(),
                }),
        }
    }
}
