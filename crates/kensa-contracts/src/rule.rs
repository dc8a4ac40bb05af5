//! Severity and rule-category vocabulary shared by the registry, the checkers,
//! and the remediation transformer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious a regulated-term match is.
///
/// Ordering is significant: `Critical > High > Medium > Low`. The compliance
/// checker filters tiers with `severity >= min_severity`, and the remediation
/// transformer rewrites tiers from the highest severity down.
///
/// Written in TOML as a lowercase string:
/// ```toml
/// severity = "critical"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of claim a rule guards against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    /// Claims to cure, treat, or prevent a disease.
    DiseaseClaim,
    /// Claims of a medicinal effect.
    EfficacyClaim,
    /// Claims of altering a body function (blood pressure, weight, ageing).
    PhysiologicalClaim,
    /// Assurances that a product is free of risk.
    SafetyAssurance,
    /// Superlatives and absolute guarantees.
    Exaggeration,
}
