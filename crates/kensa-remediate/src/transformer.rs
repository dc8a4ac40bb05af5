//! Regex-driven rewrite of regulated terminology.
//!
//! `RuleRemediator` implements the `Remediator` trait from `kensa-core`. For
//! every non-excluded string it applies each rule at or above the threshold:
//!
//!   critical tier → high tier → medium tier → low tier
//!
//! so a lower-tier rule only ever sees text that higher tiers have already
//! rewritten. Every match becomes one `Change`, and the replacement is
//! inserted literally (no `$` group expansion).
//!
//! Idempotence rests on the registry self-test: no replacement matches any
//! rule pattern, so a second pass over `fixed` finds nothing to do.

use regex::NoExpand;
use tracing::{debug, info};

use kensa_contracts::{
    document::{Document, FieldPath},
    error::KensaResult,
    remediation::{Change, RemediationResult},
    rule::Severity,
};
use kensa_core::{
    traits::Remediator,
    walker::{map_text, require_object},
};
use kensa_rules::{CompliancePolicy, RuleRegistry};

/// Rewrites regulated terms using the canonical replacements of a registry.
pub struct RuleRemediator<'r> {
    registry: &'r RuleRegistry,
}

impl<'r> RuleRemediator<'r> {
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }
}

/// Rewrite one string, appending a `Change` per match.
fn rewrite(
    policy: &CompliancePolicy,
    threshold: Severity,
    path: &FieldPath,
    text: &str,
    changes: &mut Vec<Change>,
) -> String {
    let mut current = text.to_string();

    for tier in policy.tiers_at_or_above(threshold) {
        for rule in &tier.rules {
            let before = changes.len();
            for m in rule.pattern.find_iter(&current) {
                changes.push(Change {
                    field_path: path.to_string(),
                    rule_id: rule.id.clone(),
                    severity: rule.severity,
                    original: m.as_str().to_string(),
                    replacement: rule.replacement.clone(),
                    rationale: rule.rationale.clone(),
                });
            }
            if changes.len() > before {
                debug!(
                    field = %path,
                    rule_id = %rule.id,
                    matches = changes.len() - before,
                    "rule applied"
                );
                current = rule
                    .pattern
                    .replace_all(&current, NoExpand(&rule.replacement))
                    .into_owned();
            }
        }
    }
    current
}

impl Remediator for RuleRemediator<'_> {
    fn remediate(&self, document: &Document, threshold: Severity) -> KensaResult<RemediationResult> {
        require_object(document)?;
        let policy = &self.registry.compliance;

        let mut changes = Vec::new();
        let fixed = map_text(document, &policy.excluded_fields, |path, text| {
            rewrite(policy, threshold, path, text, &mut changes)
        })?;

        info!(
            threshold = %threshold,
            changes = changes.len(),
            "remediation complete"
        );
        Ok(RemediationResult::new(document.clone(), fixed, changes))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use kensa_contracts::error::KensaError;

    use super::*;

    fn registry() -> RuleRegistry {
        RuleRegistry::builtin().unwrap()
    }

    fn text_at<'d>(doc: &'d Document, key: &str) -> &'d str {
        doc.get(key).and_then(Document::as_text).unwrap()
    }

    // ── 1. substitution ───────────────────────────────────────────────────────

    #[test]
    fn replaces_every_match_with_canonical_text() {
        let registry = registry();
        let doc = Document::from(json!({
            "summary": "がんに効くと話題。飲めば治る。"
        }));

        let result = RuleRemediator::new(&registry).remediate(&doc, Severity::Low).unwrap();

        assert_eq!(text_at(&result.fixed, "summary"), "健康をサポートと話題。飲めば健康維持をサポート。");
        assert_eq!(result.change_count, 2);
        assert_eq!(result.changes[0].rule_id, "cancer-claim");
        assert_eq!(result.changes[0].original, "がんに効く");
        assert_eq!(result.changes[0].severity, Severity::Critical);
        assert_eq!(result.changes[1].rule_id, "disease-cure");
        assert_eq!(result.changes[1].field_path, "summary");
    }

    #[test]
    fn repeated_matches_each_record_a_change() {
        let registry = registry();
        let doc = Document::from(json!({ "faq": [{ "answer": "最高級素材と最高級製法。" }] }));

        let result = RuleRemediator::new(&registry).remediate(&doc, Severity::Low).unwrap();

        assert_eq!(result.change_count, 2);
        assert!(result.changes.iter().all(|c| c.field_path == "faq[0].answer"));
        assert_eq!(
            result.fixed.get("faq").and_then(Document::as_list).unwrap()[0]
                .get("answer")
                .and_then(Document::as_text),
            Some("こだわりの素材とこだわりの製法。")
        );
    }

    #[test]
    fn higher_tiers_rewrite_first() {
        let registry = registry();
        // "がんに効く" is a critical phrase that contains the high-tier "効く".
        let doc = Document::from(json!({ "summary": "がんに効く。" }));

        let result = RuleRemediator::new(&registry).remediate(&doc, Severity::Low).unwrap();

        assert_eq!(result.change_count, 1);
        assert_eq!(result.changes[0].severity, Severity::Critical);
    }

    // ── 2. threshold and exclusions ───────────────────────────────────────────

    #[test]
    fn threshold_limits_rewritten_tiers() {
        let registry = registry();
        let doc = Document::from(json!({ "summary": "最高品質で、病気が治る。" }));

        let result = RuleRemediator::new(&registry)
            .remediate(&doc, Severity::Critical)
            .unwrap();

        assert_eq!(text_at(&result.fixed, "summary"), "最高品質で、病気が健康維持をサポート。");
        assert_eq!(result.change_count, 1);
    }

    #[test]
    fn excluded_fields_and_original_are_untouched() {
        let registry = registry();
        let doc = Document::from(json!({
            "name_en": "No.1 Detox",
            "references": ["https://example.com/治る"],
            "summary": "デトックスで痩せる。"
        }));

        let result = RuleRemediator::new(&registry).remediate(&doc, Severity::Low).unwrap();

        assert_eq!(result.original, doc);
        assert_eq!(text_at(&result.fixed, "name_en"), "No.1 Detox");
        assert_eq!(result.fixed.get("references"), doc.get("references"));
        assert_eq!(text_at(&result.fixed, "summary"), "スッキリ習慣で体づくりを応援。");
    }

    // ── 3. idempotence ────────────────────────────────────────────────────────

    #[test]
    fn second_pass_makes_no_changes() {
        let registry = registry();
        let remediator = RuleRemediator::new(&registry);
        let doc = Document::from(json!({
            "summary": "医薬品並みの効果で血圧を下げる。副作用なし、若返る、日本一の免疫力アップ!",
            "benefits": [{ "description": "疲労回復に必ず効きます。NO.1の品質。" }]
        }));

        let first = remediator.remediate(&doc, Severity::Low).unwrap();
        assert!(first.change_count > 0);

        let second = remediator.remediate(&first.fixed, Severity::Low).unwrap();
        assert!(second.is_unchanged(), "second pass changed: {:?}", second.changes);
        assert_eq!(second.fixed, first.fixed);
    }

    #[test]
    fn clean_document_is_unchanged() {
        let registry = registry();
        let doc = Document::from(json!({ "summary": "毎日の栄養補給に。" }));

        let result = RuleRemediator::new(&registry).remediate(&doc, Severity::Low).unwrap();
        assert!(result.is_unchanged());
        assert_eq!(result.fixed, doc);
    }

    #[test]
    fn non_object_root_is_rejected() {
        let registry = registry();
        let result = RuleRemediator::new(&registry).remediate(&Document::from("治る"), Severity::Low);
        assert!(matches!(result, Err(KensaError::InputError { .. })));
    }
}
