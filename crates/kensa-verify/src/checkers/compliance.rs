//! Regulated-terminology checker.
//!
//! Every non-excluded string is tested against every rule whose tier is at or
//! above the threshold. Each match is one `Violation`. When a safe expression
//! appears in the same sentence as the match, the violation is kept but its
//! score impact is halved.
//!
//! A mitigated violation still fails the check: `passed` is true only when no
//! rule matched at all.

use std::ops::Range;

use tracing::{debug, warn};

use kensa_contracts::{
    document::Document,
    error::KensaResult,
    report::{Category, CheckResult, Finding, Violation},
    rule::Severity,
};
use kensa_core::{traits::Checker, walker::walk};
use kensa_rules::RuleRegistry;

use super::truncate_chars;

/// Characters that end a sentence-like unit.
const SENTENCE_TERMINATORS: [char; 6] = ['。', '！', '？', '!', '?', '\n'];

/// Length of the fallback unit when a text has no sentence terminator.
const FALLBACK_UNIT_CHARS: usize = 100;

/// Scores regulated-term usage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceChecker {
    /// Overrides `compliance.min_severity` from the registry when set.
    min_severity: Option<Severity>,
}

impl ComplianceChecker {
    /// Use the registry's configured threshold.
    pub fn new() -> Self {
        Self { min_severity: None }
    }

    /// Evaluate only tiers at or above `severity`, e.g. `Critical` for a
    /// lenient pass.
    pub fn with_min_severity(severity: Severity) -> Self {
        Self {
            min_severity: Some(severity),
        }
    }
}

impl Checker for ComplianceChecker {
    fn category(&self) -> Category {
        Category::Compliance
    }

    fn check(&self, document: &Document, registry: &RuleRegistry) -> KensaResult<CheckResult> {
        let policy = &registry.compliance;
        let threshold = self.min_severity.unwrap_or(policy.min_severity);
        let mut violations = Vec::new();

        for field in walk(document, &policy.excluded_fields) {
            let field = field?;
            for tier in policy.tiers_at_or_above(threshold) {
                for rule in &tier.rules {
                    for m in rule.pattern.find_iter(field.text) {
                        let context = sentence_containing(field.text, m.range());
                        let mitigated = policy
                            .safe_expressions
                            .iter()
                            .any(|safe| context.contains(safe.as_str()));
                        let effective = if mitigated {
                            rule.score_impact / 2.0
                        } else {
                            rule.score_impact
                        };

                        warn!(
                            field = %field.path,
                            rule_id = %rule.id,
                            severity = %rule.severity,
                            matched = m.as_str(),
                            mitigated,
                            "regulated term found"
                        );

                        violations.push(Violation {
                            field_path: field.path.to_string(),
                            rule_id: rule.id.clone(),
                            matched_text: m.as_str().to_string(),
                            severity: rule.severity,
                            category: rule.category,
                            context_sentence: context.to_string(),
                            raw_score_impact: rule.score_impact,
                            effective_score_impact: effective,
                            mitigated,
                            suggestion: format!(
                                "replace '{}' with '{}' ({})",
                                m.as_str(),
                                rule.replacement,
                                rule.rationale
                            ),
                        });
                    }
                }
            }
        }

        let deduction: f64 = violations.iter().map(|v| v.effective_score_impact.abs()).sum();
        let passed = violations.is_empty();
        debug!(
            threshold = %threshold,
            violations = violations.len(),
            deduction,
            "compliance check complete"
        );

        let description = format!("{} regulated expression(s) found", violations.len());
        let findings = violations.into_iter().map(Finding::Violation).collect();
        Ok(
            CheckResult::new(Category::Compliance, passed, Category::Compliance.max_score() - deduction, findings)
                .with_description(description),
        )
    }
}

/// The sentence-like unit of `text` that contains the match at byte range
/// `span`.
///
/// Units end after a terminator (the terminator belongs to the unit). A text
/// with no terminator at all is represented by a window of at most 100
/// characters around the match; the match is always inside the returned unit.
pub fn sentence_containing(text: &str, span: Range<usize>) -> &str {
    if !text.contains(&SENTENCE_TERMINATORS[..]) {
        return fallback_window(text, span);
    }
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if SENTENCE_TERMINATORS.contains(&c) {
            let end = i + c.len_utf8();
            if span.start < end {
                return text[start..end].trim();
            }
            start = end;
        }
    }
    text[start..].trim()
}

/// Up to `FALLBACK_UNIT_CHARS` characters with the match roughly centred.
/// Near the start of the text the window begins at the first character.
fn fallback_window(text: &str, span: Range<usize>) -> &str {
    let match_chars = text[span.clone()].chars().count();
    let spare = FALLBACK_UNIT_CHARS.saturating_sub(match_chars);

    let lead = text[..span.start].chars().count().min(spare / 2);
    let from = text[..span.start]
        .char_indices()
        .rev()
        .take(lead)
        .last()
        .map_or(span.start, |(i, _)| i);

    let tail = truncate_chars(&text[span.end..], spare - lead);
    &text[from..span.end + tail.len()]
}
