//! Check results, findings, and the composite report.
//!
//! Every checker produces one `CheckResult`. The aggregator folds six of them
//! into a `CompositeReport`, which is built once per document and never
//! updated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rule::{RuleCategory, Severity};

/// The six scored categories, in the fixed order used for reporting and
/// recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Structure,
    Compliance,
    Length,
    Citations,
    Evidence,
    Language,
}

impl Category {
    /// All categories in reporting order.
    pub const ALL: [Category; 6] = [
        Category::Structure,
        Category::Compliance,
        Category::Length,
        Category::Citations,
        Category::Evidence,
        Category::Language,
    ];

    /// Maximum points this category contributes. The six maxima sum to 100.
    pub fn max_score(&self) -> f64 {
        match self {
            Category::Structure => 25.0,
            Category::Compliance => 30.0,
            Category::Length => 15.0,
            Category::Citations => 15.0,
            Category::Evidence => 10.0,
            Category::Language => 5.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Structure => "structure",
            Category::Compliance => "compliance",
            Category::Length => "length",
            Category::Citations => "citations",
            Category::Evidence => "evidence",
            Category::Language => "language",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A regulated-term match found by the compliance checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Where the match was found, e.g. `benefits[1].description`.
    pub field_path: String,
    pub rule_id: String,
    pub matched_text: String,
    pub severity: Severity,
    pub category: RuleCategory,
    /// The sentence-like unit containing the match.
    pub context_sentence: String,
    /// The rule's configured impact (zero or negative).
    pub raw_score_impact: f64,
    /// `raw_score_impact`, halved when a safe expression shares the sentence.
    pub effective_score_impact: f64,
    /// True when a safe expression mitigated this violation.
    pub mitigated: bool,
    pub suggestion: String,
}

/// Whether a length issue fails the check or only warns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLevel {
    Error,
    Warning,
}

/// How one reference entry was assessed by the citation checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceAssessment {
    pub index: usize,
    /// The raw URL text, or a placeholder when the entry carried none.
    pub url: String,
    pub valid: bool,
    pub secure: bool,
    /// Name of the matching trust tier; `None` for untrusted or invalid entries.
    pub tier: Option<String>,
    pub tier_score: f64,
}

/// One finding inside a `CheckResult`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A required top-level field is absent or null.
    MissingField { field: String },

    /// A top-level array has fewer elements than required.
    UnderPopulated {
        field: String,
        minimum: usize,
        actual: usize,
    },

    /// A regulated term matched.
    Violation(Violation),

    /// A field's character count is outside its configured range.
    Length {
        field_path: String,
        level: IssueLevel,
        count: usize,
        min: Option<usize>,
        max: Option<usize>,
    },

    /// One reference entry's assessment. Invalid entries are findings, not errors.
    Reference(ReferenceAssessment),

    /// A reference URL repeated an earlier entry and was not counted.
    DuplicateReference { index: usize, url: String },

    /// The evidence level is missing or not part of the taxonomy.
    Evidence {
        value: Option<String>,
        suggestion: Option<String>,
    },

    /// A run of foreign-script words leaked into target-language text.
    ForeignLanguage {
        field_path: String,
        words: usize,
        preview: String,
    },
}

impl Finding {
    /// True for findings that represent a problem. Accepted references and
    /// recognised evidence levels are informational.
    pub fn is_issue(&self) -> bool {
        match self {
            Finding::Reference(r) => !r.valid,
            Finding::Evidence { suggestion, value } => suggestion.is_some() || value.is_none(),
            _ => true,
        }
    }
}

/// The output of a single checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub category: Category,
    pub passed: bool,
    /// Always within `[0, max_score]`.
    pub score: f64,
    pub max_score: f64,
    pub findings: Vec<Finding>,
    /// A one-line summary of what the checker saw, when it has something to say.
    pub description: Option<String>,
}

impl CheckResult {
    /// Build a result, clamping `score` into `[0, category.max_score()]`.
    pub fn new(category: Category, passed: bool, score: f64, findings: Vec<Finding>) -> Self {
        let max_score = category.max_score();
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, max_score) };
        Self {
            category,
            passed,
            score,
            max_score,
            findings,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Number of findings that represent a problem.
    pub fn issue_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_issue()).count()
    }

    /// Iterate over the compliance violations in this result.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.findings.iter().filter_map(|f| match f {
            Finding::Violation(v) => Some(v),
            _ => None,
        })
    }
}

/// Letter grade derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(s)
    }
}

/// Coarse publication status, derived independently of the grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Fail => "fail",
        };
        f.write_str(s)
    }
}

/// The complete verdict for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeReport {
    /// One result per category, in `Category::ALL` order.
    pub checks: Vec<CheckResult>,
    /// Sum of category scores clipped to `[0, 100]`.
    pub total_score: f64,
    pub grade: Grade,
    pub status: Status,
    pub recommendations: Vec<String>,
}

impl CompositeReport {
    pub fn check(&self, category: Category) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.category == category)
    }

    pub fn category_score(&self, category: Category) -> f64 {
        self.check(category).map(|c| c.score).unwrap_or(0.0)
    }

    /// Number of critical-severity compliance violations.
    pub fn critical_issue_count(&self) -> usize {
        self.check(Category::Compliance)
            .map(|c| c.violations().filter(|v| v.severity == Severity::Critical).count())
            .unwrap_or(0)
    }
}
