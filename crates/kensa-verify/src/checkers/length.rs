//! Length bounds for scalar fields, array items, and the article as a whole.
//!
//! Lengths are counted with [`char_count`](super::char_count). Fields that are
//! absent or not text are skipped; absence belongs to the structure checker.

use tracing::debug;

use kensa_contracts::{
    document::{Document, FieldPath},
    error::KensaResult,
    report::{Category, CheckResult, Finding, IssueLevel},
};
use kensa_core::traits::Checker;
use kensa_rules::RuleRegistry;

use super::char_count;

const ERROR_DEDUCTION: f64 = 5.0;
const WARNING_DEDUCTION: f64 = 2.0;

/// Scores field lengths against the registry's `[length]` bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthChecker;

/// Accumulates findings and the running total across every measured field.
#[derive(Default)]
struct Tally {
    findings: Vec<Finding>,
    total: usize,
    errors: usize,
    warnings: usize,
}

impl Tally {
    fn measure(&mut self, path: FieldPath, text: &str, min: Option<usize>, max: Option<usize>) {
        let count = char_count(text);
        self.total += count;

        let level = if min.is_some_and(|m| count < m) {
            self.errors += 1;
            IssueLevel::Error
        } else if max.is_some_and(|m| count > m) {
            self.warnings += 1;
            IssueLevel::Warning
        } else {
            return;
        };
        self.findings.push(Finding::Length {
            field_path: path.to_string(),
            level,
            count,
            min,
            max,
        });
    }
}

impl Checker for LengthChecker {
    fn category(&self) -> Category {
        Category::Length
    }

    fn check(&self, document: &Document, registry: &RuleRegistry) -> KensaResult<CheckResult> {
        let config = &registry.length;
        let mut tally = Tally::default();

        for rule in &config.fields {
            if let Some(text) = document.get(&rule.field).and_then(Document::as_text) {
                tally.measure(FieldPath::root().key(rule.field.as_str()), text, rule.min, rule.max);
            }
        }

        for rule in &config.items {
            let Some(items) = document.get(&rule.field).and_then(Document::as_list) else {
                continue;
            };
            let base = FieldPath::root().key(rule.field.as_str());
            for (i, item) in items.iter().enumerate() {
                let (path, value) = match &rule.subfield {
                    Some(sub) => (base.index(i).key(sub.as_str()), item.get(sub)),
                    None => (base.index(i), Some(item)),
                };
                if let Some(text) = value.and_then(Document::as_text) {
                    tally.measure(path, text, rule.min, rule.max);
                }
            }
        }

        if tally.total < config.total_min {
            tally.errors += 1;
            tally.findings.push(Finding::Length {
                field_path: FieldPath::root().to_string(),
                level: IssueLevel::Error,
                count: tally.total,
                min: Some(config.total_min),
                max: None,
            });
        }

        let score = Category::Length.max_score()
            - ERROR_DEDUCTION * tally.errors as f64
            - WARNING_DEDUCTION * tally.warnings as f64;
        debug!(
            total = tally.total,
            errors = tally.errors,
            warnings = tally.warnings,
            score,
            "length check complete"
        );

        Ok(CheckResult::new(Category::Length, tally.errors == 0, score, tally.findings)
            .with_description(format!("{} characters in measured fields", tally.total)))
    }
}
