//! Scenario 2: Flagged Article with Remediation
//!
//! Validates a promotional collagen draft, rewrites every regulated term with
//! its canonical replacement, and validates the rewritten draft again.
//!
//! Pipeline walk-through for the demo run:
//!   1. Validate the draft → every category reports issues
//!   2. Remediate at the `low` threshold (all tiers)
//!   3. Validate the fixed draft → compliance recovers, the rest is unchanged
//!   4. Remediate the fixed draft again → no changes (idempotence)

use kensa_contracts::{document::Document, error::KensaResult, report::Category, rule::Severity};
use kensa_core::traits::{Remediator, Validator};
use kensa_remediate::RuleRemediator;
use kensa_rules::RuleRegistry;
use kensa_verify::ContentVerifier;

use crate::mock_data::collagen_article;
use crate::scenarios::{print_issues, print_report};

/// Run Scenario 2: Flagged Article with Remediation.
pub fn run_scenario() -> KensaResult<()> {
    println!("=== Scenario 2: Flagged Article with Remediation (コラーゲン) ===");
    println!();

    let registry = RuleRegistry::builtin()?;
    let verifier = ContentVerifier::new(&registry);
    let remediator = RuleRemediator::new(&registry);
    let draft = Document::from(collagen_article());

    // ── Step 1: validate the draft ────────────────────────────────────────────

    let before = verifier.validate(&draft)?;
    println!("  Draft issues:");
    print_issues(&before);
    print_report(&before);

    // ── Step 2: remediate every tier ──────────────────────────────────────────

    let remediation = remediator.remediate(&draft, Severity::Low)?;
    println!("  Remediation: {} substitution(s)", remediation.change_count);
    for change in &remediation.changes {
        println!(
            "    {:<8} {:<24} '{}' → '{}'",
            change.severity.as_str(),
            change.field_path,
            change.original,
            change.replacement
        );
    }
    println!();

    // ── Step 3: validate the fixed draft ──────────────────────────────────────

    let after = verifier.validate(&remediation.fixed)?;
    println!(
        "  Compliance:  {:.1} → {:.1}",
        before.category_score(Category::Compliance),
        after.category_score(Category::Compliance)
    );
    println!(
        "  Total:       {:.1} ({}) → {:.1} ({})",
        before.total_score, before.grade, after.total_score, after.grade
    );
    println!("  Remaining recommendations:");
    for rec in &after.recommendations {
        println!("    - {}", rec);
    }
    println!();

    // ── Step 4: idempotence ───────────────────────────────────────────────────

    let second = remediator.remediate(&remediation.fixed, Severity::Low)?;
    println!(
        "  Second remediation pass: {} change(s) [{}]",
        second.change_count,
        if second.is_unchanged() { "IDEMPOTENT" } else { "NOT IDEMPOTENT" }
    );
    println!();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
