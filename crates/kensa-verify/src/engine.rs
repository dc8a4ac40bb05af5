//! The validation engine.
//!
//! `ContentVerifier` implements the `Validator` trait from `kensa-core`. It
//! borrows a compiled `RuleRegistry`, runs the six category checkers in
//! reporting order, and folds their results into a `CompositeReport`.
//!
//! The root must be an object. Any other shape fails fast with
//! `KensaError::InputError` before a single checker runs.

use tracing::debug;

use kensa_contracts::{document::Document, error::KensaResult, report::CompositeReport, rule::Severity};
use kensa_core::{
    traits::{Checker, Validator},
    walker::require_object,
};
use kensa_rules::RuleRegistry;

use crate::{checkers::default_checkers, scoring::aggregate};

/// The kensa article validator.
pub struct ContentVerifier<'r> {
    registry: &'r RuleRegistry,
    checkers: Vec<Box<dyn Checker>>,
}

impl<'r> ContentVerifier<'r> {
    /// A verifier using the registry's configured compliance threshold.
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self {
            registry,
            checkers: default_checkers(None),
        }
    }

    /// A verifier that evaluates only compliance tiers at or above `severity`.
    pub fn with_min_severity(registry: &'r RuleRegistry, severity: Severity) -> Self {
        Self {
            registry,
            checkers: default_checkers(Some(severity)),
        }
    }

    pub fn registry(&self) -> &RuleRegistry {
        self.registry
    }
}

impl Validator for ContentVerifier<'_> {
    fn validate(&self, document: &Document) -> KensaResult<CompositeReport> {
        require_object(document)?;

        let mut checks = Vec::with_capacity(self.checkers.len());
        for checker in &self.checkers {
            let result = checker.check(document, self.registry)?;
            debug!(
                category = %result.category,
                score = result.score,
                max = result.max_score,
                passed = result.passed,
                issues = result.issue_count(),
                "check finished"
            );
            checks.push(result);
        }

        let report = aggregate(checks);
        debug!(
            total = report.total_score,
            grade = %report.grade,
            status = %report.status,
            "document graded"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use kensa_contracts::{
        error::KensaError,
        report::{Category, Grade, Status},
    };

    use super::*;
    use crate::scoring::READY_MESSAGE;

    /// 16 counted characters.
    const SENTENCE: &str = "バランスのよい食事を続けましょう。";

    fn repeat(n: usize) -> String {
        SENTENCE.repeat(n)
    }

    /// An article that satisfies every check.
    fn exemplary() -> serde_json::Value {
        let benefit = json!({ "title": "肌のうるおい", "description": repeat(3) });
        let faq = json!({ "question": "いつ飲むのがよいですか？", "answer": repeat(3) });
        let references: Vec<String> = (1..=6)
            .map(|i| format!("https://pubmed.ncbi.nlm.nih.gov/{}/", 3000 + i))
            .collect();
        json!({
            "name": "ビタミンC",
            "name_en": "Vitamin C (ascorbic acid) water soluble essential nutrient",
            "summary": repeat(4),
            "description": repeat(12),
            "benefits": [benefit.clone(), benefit.clone(), benefit],
            "mechanism": repeat(6),
            "recommended_intake": repeat(1),
            "side_effects": [repeat(1)],
            "faq": [faq.clone(), faq.clone(), faq],
            "references": references,
            "evidence_level": "A"
        })
    }

    // ── 1. end to end ─────────────────────────────────────────────────────────

    #[test]
    fn exemplary_article_scores_perfect() {
        let registry = RuleRegistry::builtin().unwrap();
        let report = ContentVerifier::new(&registry)
            .validate(&Document::from(exemplary()))
            .unwrap();

        for check in &report.checks {
            assert!(check.passed, "{} failed: {:?}", check.category, check.findings);
        }
        assert_eq!(report.total_score, 100.0);
        assert_eq!(report.grade, Grade::A);
        assert_eq!(report.status, Status::Pass);
        assert_eq!(report.recommendations, vec![READY_MESSAGE.to_string()]);
    }

    #[test]
    fn checks_are_reported_in_category_order() {
        let registry = RuleRegistry::builtin().unwrap();
        let report = ContentVerifier::new(&registry)
            .validate(&Document::from(json!({})))
            .unwrap();

        let order: Vec<Category> = report.checks.iter().map(|c| c.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert_eq!(report.grade, Grade::F);
    }

    #[test]
    fn regulated_terms_lower_the_grade() {
        let registry = RuleRegistry::builtin().unwrap();
        let mut article = exemplary();
        article["summary"] = json!(format!("{}飲むだけでがんを予防できます。", repeat(3)));

        let report = ContentVerifier::new(&registry)
            .validate(&Document::from(article))
            .unwrap();

        assert!(report.category_score(Category::Compliance) < 30.0);
        assert!(report.critical_issue_count() >= 1);
        assert!(report.recommendations[0].starts_with("Compliance"));
    }

    // ── 2. input errors ───────────────────────────────────────────────────────

    #[test]
    fn non_object_root_fails_fast() {
        let registry = RuleRegistry::builtin().unwrap();
        let verifier = ContentVerifier::new(&registry);

        for root in [json!(["a"]), json!("text"), json!(null)] {
            assert!(matches!(
                verifier.validate(&Document::from(root)),
                Err(KensaError::InputError { .. })
            ));
        }
    }

    #[test]
    fn excessive_depth_is_an_error() {
        let registry = RuleRegistry::builtin().unwrap();
        let mut nested = json!("leaf");
        for _ in 0..80 {
            nested = json!([nested]);
        }

        let result = ContentVerifier::new(&registry).validate(&Document::from(json!({ "faq": nested })));
        assert!(matches!(result, Err(KensaError::DocumentTooDeep { .. })));
    }

    // ── 3. severity threshold ─────────────────────────────────────────────────

    #[test]
    fn lenient_verifier_ignores_low_tiers() {
        let registry = RuleRegistry::builtin().unwrap();
        let mut article = exemplary();
        article["summary"] = json!(format!("{}最高の品質です。", repeat(3)));
        let doc = Document::from(article);

        let strict = ContentVerifier::new(&registry).validate(&doc).unwrap();
        let lenient = ContentVerifier::with_min_severity(&registry, Severity::High)
            .validate(&doc)
            .unwrap();

        assert_eq!(strict.category_score(Category::Compliance), 29.0);
        assert_eq!(lenient.category_score(Category::Compliance), 30.0);
    }
}
