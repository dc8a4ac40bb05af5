//! Target-language purity.
//!
//! A leak is a run of Latin-script words, at least `min_run_words` long,
//! separated only by whitespace. Single loan words and product codes such as
//! "DHA" or "Vitamin C" are normal in Japanese copy and are not flagged.

use tracing::{debug, warn};

use kensa_contracts::{
    document::Document,
    error::KensaResult,
    report::{Category, CheckResult, Finding},
};
use kensa_core::{traits::Checker, walker::walk};
use kensa_rules::RuleRegistry;

use super::truncate_chars;

const DEDUCTION_PER_LEAK: f64 = 1.0;

/// Flags untranslated foreign-language runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageChecker;

fn preview(run: &str, max_chars: usize) -> String {
    let head = truncate_chars(run, max_chars);
    if head.len() < run.len() {
        format!("{}…", head)
    } else {
        head.to_string()
    }
}

impl Checker for LanguageChecker {
    fn category(&self) -> Category {
        Category::Language
    }

    fn check(&self, document: &Document, registry: &RuleRegistry) -> KensaResult<CheckResult> {
        let policy = &registry.language;
        let mut findings = Vec::new();

        for field in walk(document, &policy.excluded_fields) {
            let field = field?;
            for run in policy.leak_pattern.find_iter(field.text) {
                let words = run.as_str().split_whitespace().count();
                warn!(field = %field.path, words, "foreign-language run found");
                findings.push(Finding::ForeignLanguage {
                    field_path: field.path.to_string(),
                    words,
                    preview: preview(run.as_str(), policy.preview_chars),
                });
            }
        }

        let leaks = findings.len();
        let score = Category::Language.max_score() - DEDUCTION_PER_LEAK * leaks as f64;
        debug!(leaks, score, "language check complete");

        Ok(CheckResult::new(Category::Language, leaks == 0, score, findings))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn check(doc: serde_json::Value) -> CheckResult {
        let registry = RuleRegistry::builtin().unwrap();
        LanguageChecker.check(&Document::from(doc), &registry).unwrap()
    }

    #[test]
    fn short_latin_terms_are_allowed() {
        let result = check(json!({
            "summary": "DHAやVitamin Cを含むサプリメントです。",
            "faq": [{ "answer": "1日2粒を目安にお召し上がりください。" }]
        }));
        assert!(result.passed);
        assert_eq!(result.score, 5.0);
    }

    #[test]
    fn each_long_run_is_one_leak() {
        let result = check(json!({
            "description": "この成分は、this is an untranslated sentence from the source です。",
            "mechanism": "作用機序: It supports normal immune function in adults."
        }));

        assert_eq!(result.findings.len(), 2);
        assert_eq!(result.score, 3.0);
        match &result.findings[0] {
            Finding::ForeignLanguage { field_path, words, preview } => {
                assert_eq!(field_path, "description");
                assert_eq!(*words, 8);
                assert_eq!(preview, "this is an untranslated sentence from th…");
            }
            other => panic!("expected language finding, got {:?}", other),
        }
    }

    #[test]
    fn excluded_fields_may_be_english() {
        let result = check(json!({
            "name_en": "Coenzyme Q ten reduced form ubiquinol",
            "references": ["Effects of vitamin C on the common cold in adults"]
        }));
        assert!(result.passed);
    }

    #[test]
    fn score_floors_at_zero() {
        let leak = "one two three four five";
        let result = check(json!({ "faq": vec![leak; 7] }));
        assert_eq!(result.findings.len(), 7);
        assert_eq!(result.score, 0.0);
        assert!(!result.passed);
    }
}
