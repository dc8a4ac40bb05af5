//! Structural completeness: required fields and array minima.

use tracing::debug;

use kensa_contracts::{
    document::Document,
    error::KensaResult,
    report::{Category, CheckResult, Finding},
};
use kensa_core::traits::Checker;
use kensa_rules::RuleRegistry;

/// Counts missing required fields and under-populated arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureChecker;

fn is_absent(value: Option<&Document>) -> bool {
    value.map_or(true, Document::is_null)
}

impl Checker for StructureChecker {
    fn category(&self) -> Category {
        Category::Structure
    }

    fn check(&self, document: &Document, registry: &RuleRegistry) -> KensaResult<CheckResult> {
        let config = &registry.structure;
        let mut findings = Vec::new();

        for field in &config.required_fields {
            if is_absent(document.get(field)) {
                findings.push(Finding::MissingField {
                    field: field.clone(),
                });
            }
        }

        for array in &config.arrays {
            let value = document.get(&array.field);
            // An absent required array is already a missing field.
            if is_absent(value) && config.required_fields.contains(&array.field) {
                continue;
            }
            let actual = value.and_then(Document::as_list).map_or(0, <[Document]>::len);
            if actual < array.min {
                findings.push(Finding::UnderPopulated {
                    field: array.field.clone(),
                    minimum: array.min,
                    actual,
                });
            }
        }

        let issues = findings.len();
        let score = Category::Structure.max_score() - config.deduction_per_issue * issues as f64;
        debug!(issues, score, "structure check complete");

        Ok(
            CheckResult::new(Category::Structure, issues == 0, score, findings)
                .with_description(format!("{} structural issue(s)", issues)),
        )
    }
}
