use kensa_contracts::{document::Document, rule::Severity};
use kensa_rules::RuleRegistry;
use kensa_remediate::remediate;
use proptest::prelude::*;
use serde_json::json;

/// Neutral copy.
const NEUTRAL: &[&str] = &[
    "毎日の食事",
    "ビタミンC",
    "バランスよく",
    "水と一緒に",
    "朝食のあとに",
    "お試しください",
    "。",
    "、",
    " ",
    "DHA",
];

/// Phrases every rule tier recognises.
const REGULATED: &[&str] = &[
    "がんに効く",
    "癌を防ぐ",
    "完治します",
    "治療できる",
    "治ります",
    "予防効果",
    "医薬品と同等の効果",
    "効きます",
    "効果抜群",
    "改善します",
    "コレステロールを下げる",
    "副作用ゼロ",
    "若返り",
    "やせます",
    "デトックス",
    "免疫力を高める",
    "疲労回復",
    "最高品質",
    "最強",
    "絶対に",
    "必ず",
    "No. 1",
    "ナンバーワン",
    "日本一",
];

const THRESHOLDS: [Severity; 4] = [Severity::Low, Severity::Medium, Severity::High, Severity::Critical];

/// Regex syntax characters, skipped when harvesting literals from patterns.
const PATTERN_SYNTAX: &str = r"()?:|[]\+*.^${}";

/// Every single character that occurs in a builtin pattern or replacement.
/// Mixed into the input, these build partial matches around rewritten text.
fn rule_chars() -> Vec<String> {
    let registry = RuleRegistry::builtin().unwrap();
    let mut chars: Vec<char> = registry
        .compliance
        .rules()
        .flat_map(|rule| {
            rule.replacement
                .chars()
                .chain(rule.pattern.as_str().chars().filter(|c| !PATTERN_SYNTAX.contains(*c)))
                .collect::<Vec<_>>()
        })
        .collect();
    chars.sort_unstable();
    chars.dedup();
    chars.into_iter().map(String::from).collect()
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(NEUTRAL).prop_map(str::to_string),
        2 => prop::sample::select(REGULATED).prop_map(str::to_string),
        3 => prop::sample::select(rule_chars()),
    ]
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 0..16).prop_map(|tokens| tokens.concat())
}

// ── A second pass over the fixed document changes nothing ─────────────────

proptest! {
    #[test]
    fn remediation_is_idempotent(
        summary in text(),
        answers in prop::collection::vec(text(), 0..4),
        threshold in prop::sample::select(THRESHOLDS.to_vec()),
    ) {
        let registry = RuleRegistry::builtin().unwrap();
        let faq: Vec<_> = answers.iter().map(|a| json!({ "answer": a })).collect();
        let doc = Document::from(json!({ "summary": summary, "faq": faq }));

        let first = remediate(&registry, &doc, threshold).unwrap();
        let second = remediate(&registry, &first.fixed, threshold).unwrap();

        prop_assert_eq!(
            second.change_count,
            0,
            "second pass changed {:?}",
            second.changes
        );
        prop_assert_eq!(&second.fixed, &first.fixed);
        prop_assert_eq!(first.change_count, first.changes.len());
    }
}

// ── Remediation never touches the input ───────────────────────────────────

proptest! {
    #[test]
    fn original_is_preserved(summary in text()) {
        let registry = RuleRegistry::builtin().unwrap();
        let doc = Document::from(json!({ "summary": summary }));

        let result = remediate(&registry, &doc, Severity::Low).unwrap();

        prop_assert_eq!(&result.original, &doc);
        if result.change_count == 0 {
            prop_assert_eq!(&result.fixed, &doc);
        }
    }
}
