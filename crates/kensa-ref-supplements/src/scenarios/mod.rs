//! Supplement-article demo scenarios.
//!
//! Each scenario is a self-contained module that wires up the real kensa
//! components (rule registry, verifier, remediator, batch runner) with the
//! sample articles from `mock_data` and prints what they report.

pub mod batch_review;
pub mod clean_article;
pub mod flagged_article;

use kensa_contracts::report::{CompositeReport, Finding};

/// Print the per-category table, the verdict, and the recommendations.
pub(crate) fn print_report(report: &CompositeReport) {
    println!("  {:<12} {:>6} {:>6}  {}", "category", "score", "max", "result");
    for check in &report.checks {
        println!(
            "  {:<12} {:>6.1} {:>6.1}  {}",
            check.category.as_str(),
            check.score,
            check.max_score,
            if check.passed { "PASS" } else { "FAIL" }
        );
    }
    println!();
    println!(
        "  Total: {:.1} / 100   Grade: {}   Status: {}",
        report.total_score, report.grade, report.status
    );
    println!("  Recommendations:");
    for rec in &report.recommendations {
        println!("    - {}", rec);
    }
    println!();
}

/// One line per finding that represents a problem.
pub(crate) fn print_issues(report: &CompositeReport) {
    for check in &report.checks {
        for finding in check.findings.iter().filter(|f| f.is_issue()) {
            println!("    [{}] {}", check.category, describe(finding));
        }
    }
    println!();
}

fn describe(finding: &Finding) -> String {
    match finding {
        Finding::MissingField { field } => format!("missing field '{}'", field),
        Finding::UnderPopulated { field, minimum, actual } => {
            format!("'{}' has {} item(s), needs {}", field, actual, minimum)
        }
        Finding::Violation(v) => format!(
            "{} {} '{}' at {}{}",
            v.severity,
            v.rule_id,
            v.matched_text,
            v.field_path,
            if v.mitigated { " (mitigated)" } else { "" }
        ),
        Finding::Length { field_path, level, count, min, max } => format!(
            "{:?}: {} has {} characters (min {:?}, max {:?})",
            level, field_path, count, min, max
        ),
        Finding::Reference(r) => format!("reference #{} is not a valid URL: {}", r.index, r.url),
        Finding::DuplicateReference { index, url } => {
            format!("reference #{} duplicates an earlier entry: {}", index, url)
        }
        Finding::Evidence { value, suggestion } => match (value, suggestion) {
            (None, _) => "evidence level missing".to_string(),
            (Some(v), Some(s)) => format!("evidence level '{}' not recognised; {}", v, s),
            (Some(v), None) => format!("evidence level '{}'", v),
        },
        Finding::ForeignLanguage { field_path, words, preview } => {
            format!("{} foreign words at {}: \"{}\"", words, field_path, preview)
        }
    }
}
