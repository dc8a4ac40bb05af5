//! Scenario 1: Clean Article
//!
//! Validates a complete, compliant vitamin C article with the bundled rule
//! registry. Every category should earn its maximum, and the report should
//! carry the single "ready for publication" recommendation.
//!
//! Pipeline walk-through for the demo run:
//!   1. Load and self-test the bundled registry
//!   2. Run the six checkers through `ContentVerifier`
//!   3. Print the category table, grade, and status

use kensa_contracts::{document::Document, error::KensaResult};
use kensa_core::traits::Validator;
use kensa_rules::RuleRegistry;
use kensa_verify::ContentVerifier;

use crate::mock_data::vitamin_c_article;
use crate::scenarios::print_report;

/// Run Scenario 1: Clean Article.
pub fn run_scenario() -> KensaResult<()> {
    println!("=== Scenario 1: Clean Article (ビタミンC) ===");
    println!();

    let registry = RuleRegistry::builtin()?;
    println!("  Rule registry:  {} ({} rules)", registry.version, registry.compliance.rules().count());

    let verifier = ContentVerifier::new(&registry);
    let article = Document::from(vitamin_c_article());
    let report = verifier.validate(&article)?;

    println!();
    print_report(&report);
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
