//! Score aggregation, grading, and recommendations.
//!
//! The composite score is the plain sum of the six category scores (each
//! already bounded by its own maximum), clipped to `[0, 100]`. Grade and
//! status come from two independent threshold tables:
//!
//! | total  | grade | status |
//! |--------|-------|--------|
//! | ≥ 90   | A     | pass   |
//! | ≥ 80   | B     | pass   |
//! | ≥ 70   | C     | warn   |
//! | ≥ 60   | D     | warn   |
//! | < 60   | F     | fail   |

use kensa_contracts::report::{Category, CheckResult, CompositeReport, Grade, Status};

/// Upper bound of the composite score.
pub const MAX_TOTAL: f64 = 100.0;

/// Shown when nothing needs attention.
pub const READY_MESSAGE: &str = "All checks passed; the article is ready for publication.";

const GRADE_TABLE: [(f64, Grade); 4] = [
    (90.0, Grade::A),
    (80.0, Grade::B),
    (70.0, Grade::C),
    (60.0, Grade::D),
];

const STATUS_TABLE: [(f64, Status); 2] = [(80.0, Status::Pass), (60.0, Status::Warn)];

pub fn grade_for(total: f64) -> Grade {
    GRADE_TABLE
        .iter()
        .find(|(threshold, _)| total >= *threshold)
        .map_or(Grade::F, |(_, grade)| *grade)
}

pub fn status_for(total: f64) -> Status {
    STATUS_TABLE
        .iter()
        .find(|(threshold, _)| total >= *threshold)
        .map_or(Status::Fail, |(_, status)| *status)
}

fn advice(check: &CheckResult) -> String {
    let issues = check.issue_count();
    match check.category {
        Category::Structure => format!(
            "Structure: add the {} missing or under-populated section(s).",
            issues
        ),
        Category::Compliance => format!(
            "Compliance: rewrite {} regulated expression(s); auto-remediation can apply the approved replacements.",
            check.violations().count()
        ),
        Category::Length => format!(
            "Length: bring {} field(s) within their character limits.",
            issues
        ),
        Category::Citations => {
            "Citations: cite at least five valid references, preferably from primary literature or public agencies over https.".to_string()
        }
        Category::Evidence => {
            "Evidence: set evidence_level to a recognised label from the evidence taxonomy.".to_string()
        }
        Category::Language => format!(
            "Language: translate {} untranslated foreign-language passage(s).",
            issues
        ),
    }
}

/// One sentence per category that failed or has issues, in `Category::ALL`
/// order; otherwise the single ready message.
pub fn recommendations(checks: &[CheckResult]) -> Vec<String> {
    let advice: Vec<String> = Category::ALL
        .iter()
        .filter_map(|category| checks.iter().find(|c| c.category == *category))
        .filter(|check| !check.passed || check.issue_count() > 0)
        .map(advice)
        .collect();

    if advice.is_empty() {
        vec![READY_MESSAGE.to_string()]
    } else {
        advice
    }
}

/// Fold per-category results into the composite report.
pub fn aggregate(checks: Vec<CheckResult>) -> CompositeReport {
    let sum: f64 = checks.iter().map(|c| c.score).sum();
    let total_score = if sum.is_nan() { 0.0 } else { sum.clamp(0.0, MAX_TOTAL) };
    let recommendations = recommendations(&checks);

    CompositeReport {
        grade: grade_for(total_score),
        status: status_for(total_score),
        checks,
        total_score,
        recommendations,
    }
}
