//! Evidence-strength rating.

use tracing::debug;

use kensa_contracts::{
    document::Document,
    error::KensaResult,
    report::{Category, CheckResult, Finding},
};
use kensa_core::traits::Checker;
use kensa_rules::RuleRegistry;

/// Looks the article's evidence label up in the registry taxonomy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvidenceChecker;

impl Checker for EvidenceChecker {
    fn category(&self) -> Category {
        Category::Evidence
    }

    fn check(&self, document: &Document, registry: &RuleRegistry) -> KensaResult<CheckResult> {
        let taxonomy = &registry.evidence;
        let value = document.get(&taxonomy.field).filter(|v| !v.is_null());

        let Some(value) = value else {
            debug!(field = %taxonomy.field, "evidence level absent");
            let finding = Finding::Evidence {
                value: None,
                suggestion: None,
            };
            return Ok(CheckResult::new(Category::Evidence, false, 0.0, vec![finding]));
        };

        let label = value.as_text();
        if let Some(level) = label.and_then(|l| taxonomy.lookup(l)) {
            debug!(label = %level.label, score = level.score, "evidence level recognised");
            let finding = Finding::Evidence {
                value: Some(level.label.clone()),
                suggestion: None,
            };
            return Ok(CheckResult::new(Category::Evidence, true, level.score, vec![finding])
                .with_description(format!("{}: {}", level.label, level.description)));
        }

        let shown = match label {
            Some(text) => text.to_string(),
            None => value.to_json().to_string(),
        };
        let valid: Vec<&str> = taxonomy.labels().collect();
        debug!(value = %shown, "unrecognised evidence level");
        let finding = Finding::Evidence {
            value: Some(shown.clone()),
            suggestion: Some(format!("use one of: {}", valid.join(", "))),
        };
        Ok(CheckResult::new(Category::Evidence, false, 0.0, vec![finding])
            .with_description(format!("'{}' is not a recognised evidence level", shown)))
    }
}
