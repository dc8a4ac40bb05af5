//! Reference trustworthiness.
//!
//! Each entry of the references field is assessed on its own: does it parse as
//! an http(s) URL with a host, is it served over https, and which trust tier
//! does its host belong to. Malformed entries become findings; they never
//! abort the check.
//!
//! Score (clamped to the category maximum of 15):
//!
//! ```text
//! min(5, count) + valid/count * 5 + avg_tier/top_tier * 5 + secure_bonus
//! ```
//!
//! where `secure_bonus` is 1 only when every counted entry uses https.

use std::collections::HashSet;

use tracing::debug;
use url::Url;

use kensa_contracts::{
    document::Document,
    error::KensaResult,
    report::{Category, CheckResult, Finding, ReferenceAssessment},
};
use kensa_core::traits::Checker;
use kensa_rules::{CitationPolicy, RuleRegistry};

/// Stand-in for entries that carry no URL text at all.
const NO_URL: &str = "<no url>";

const COUNT_POINTS_CAP: f64 = 5.0;
const VALID_WEIGHT: f64 = 5.0;
const TRUST_WEIGHT: f64 = 5.0;
const SECURE_BONUS: f64 = 1.0;

/// Scores the references list.
#[derive(Debug, Clone, Copy, Default)]
pub struct CitationChecker;

/// The URL text of one entry: the string itself, or the object's URL key.
fn entry_url<'a>(entry: &'a Document, url_key: &str) -> Option<&'a str> {
    match entry {
        Document::Text(s) => Some(s.as_str()),
        Document::Object(_) => entry.get(url_key).and_then(Document::as_text),
        _ => None,
    }
}

fn assess(index: usize, raw: Option<&str>, policy: &CitationPolicy) -> ReferenceAssessment {
    let text = raw.map(str::trim).unwrap_or(NO_URL);
    let parsed = raw
        .and_then(|r| Url::parse(r.trim()).ok())
        .filter(|u| matches!(u.scheme(), "http" | "https"));
    let host = parsed.as_ref().and_then(Url::host_str).filter(|h| !h.is_empty());

    match (parsed.as_ref(), host) {
        (Some(url), Some(host)) => {
            let tier = policy.trusted.classify(host);
            ReferenceAssessment {
                index,
                url: text.to_string(),
                valid: true,
                secure: url.scheme() == "https",
                tier: tier.map(|t| t.name.clone()),
                tier_score: tier.map_or(0.0, |t| t.score),
            }
        }
        _ => ReferenceAssessment {
            index,
            url: text.to_string(),
            valid: false,
            secure: false,
            tier: None,
            tier_score: 0.0,
        },
    }
}

/// Comparison key for duplicate detection: the normalized URL when it
/// parses, the trimmed text otherwise.
fn duplicate_key(raw: &str) -> String {
    let trimmed = raw.trim();
    Url::parse(trimmed)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| trimmed.to_string())
}

impl Checker for CitationChecker {
    fn category(&self) -> Category {
        Category::Citations
    }

    fn check(&self, document: &Document, registry: &RuleRegistry) -> KensaResult<CheckResult> {
        let policy = &registry.citations;
        let entries = document
            .get(&policy.field)
            .and_then(Document::as_list)
            .unwrap_or(&[]);

        let mut findings = Vec::new();
        let mut counted = Vec::new();
        let mut seen = HashSet::new();

        for (index, entry) in entries.iter().enumerate() {
            let raw = entry_url(entry, &policy.url_key);
            if let Some(raw) = raw {
                if !seen.insert(duplicate_key(raw)) && !policy.count_duplicates {
                    findings.push(Finding::DuplicateReference {
                        index,
                        url: raw.trim().to_string(),
                    });
                    continue;
                }
            }
            counted.push(assess(index, raw, policy));
        }

        let count = counted.len();
        let valid = counted.iter().filter(|a| a.valid).count();

        let score = if count == 0 {
            0.0
        } else {
            let n = count as f64;
            let top = policy.trusted.top_score();
            let avg_tier = counted.iter().map(|a| a.tier_score).sum::<f64>() / n;
            let trust = if top > 0.0 { avg_tier / top } else { 0.0 };
            let secure_bonus = if counted.iter().all(|a| a.secure) {
                SECURE_BONUS
            } else {
                0.0
            };
            n.min(COUNT_POINTS_CAP) + valid as f64 / n * VALID_WEIGHT + trust * TRUST_WEIGHT + secure_bonus
        };
        let passed = count > 0 && count >= policy.min_count && valid >= policy.min_valid;

        debug!(count, valid, score, "citation check complete");

        findings.extend(counted.into_iter().map(Finding::Reference));
        Ok(CheckResult::new(Category::Citations, passed, score, findings)
            .with_description(format!("{}/{} references valid", valid, count)))
    }
}
