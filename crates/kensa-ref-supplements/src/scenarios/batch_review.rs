//! Scenario 3: Batch Review
//!
//! Runs a mixed batch through the `BatchRunner` twice: once as submitted and
//! once with remediation of the critical and high tiers applied first. The
//! batch contains three articles plus two inputs that cannot be validated, to
//! show that failures stay confined to their own document.
//!
//!   vitamin-c   → clean
//!   zinc        → one critical claim
//!   collagen    → promotional draft
//!   biotin      → truncated JSON (ParseError)
//!   vitamins-de → list root (InputError)

use kensa_contracts::{
    batch::{BatchSummary, DocumentOutcome},
    document::Document,
    error::KensaResult,
    rule::Severity,
};
use kensa_core::{BatchOptions, BatchRunner, InMemorySource};
use kensa_remediate::RuleRemediator;
use kensa_rules::RuleRegistry;
use kensa_verify::ContentVerifier;

use crate::mock_data::{
    collagen_article, list_root_document, vitamin_c_article, zinc_article, TRUNCATED_ARTICLE_JSON,
};

/// The five-document sample batch.
pub fn sample_source() -> KensaResult<InMemorySource> {
    let mut source = InMemorySource::new();
    source.push("vitamin-c", Document::from(vitamin_c_article()))?;
    source.push("zinc", Document::from(zinc_article()))?;
    source.push("collagen", Document::from(collagen_article()))?;
    source.push_json("biotin", TRUNCATED_ARTICLE_JSON)?;
    source.push("vitamins-de", Document::from(list_root_document()))?;
    Ok(source)
}

fn print_summary(summary: &BatchSummary) {
    for outcome in &summary.per_document {
        match outcome {
            DocumentOutcome::Validated { id, report, remediated_changes } => {
                let changes = remediated_changes
                    .map(|n| format!("  ({} change(s) applied)", n))
                    .unwrap_or_default();
                println!(
                    "    {:<12} {:>5.1}  {}  {}{}",
                    id, report.total_score, report.grade, report.status, changes
                );
            }
            DocumentOutcome::Failed { id, error } => {
                println!("    {:<12} FAILED  {}", id, error);
            }
        }
    }
    println!();

    let histogram: Vec<String> = summary
        .grade_histogram
        .iter()
        .map(|(grade, n)| format!("{}={}", grade, n))
        .collect();
    println!(
        "  Documents: {} ({} validated, {} failed)",
        summary.total, summary.validated, summary.failed
    );
    println!("  Grades:    {}", histogram.join(" "));
    println!("  Pass rate: {:.0}%", summary.pass_rate * 100.0);
    println!("  Critical issues: {}", summary.critical_issue_count);
    println!();
}

/// Run Scenario 3: Batch Review.
pub fn run_scenario() -> KensaResult<()> {
    println!("=== Scenario 3: Batch Review ===");
    println!();

    let registry = RuleRegistry::builtin()?;
    let verifier = ContentVerifier::new(&registry);
    let remediator = RuleRemediator::new(&registry);
    let source = sample_source()?;
    let options = BatchOptions { parallel: true };

    // ── Pass 1: as submitted ──────────────────────────────────────────────────

    println!("  Pass 1: as submitted");
    let submitted = BatchRunner::new(&verifier, options).run(&source);
    print_summary(&submitted);

    // ── Pass 2: remediate critical and high tiers first ──────────────────────

    println!("  Pass 2: remediated at threshold '{}'", Severity::High);
    let remediated = BatchRunner::new(&verifier, options)
        .with_remediation(&remediator, Severity::High)
        .run(&source);
    print_summary(&remediated);

    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
