//! Registry configuration schema.
//!
//! A `RegistryConfig` is deserialized from TOML and compiled into a
//! `RuleRegistry`. Tiers, trust tiers, and evidence levels are arrays of
//! tables, so their order in the file is the order the engine uses.

use serde::{Deserialize, Serialize};

use kensa_contracts::rule::{RuleCategory, Severity};

/// The top-level structure deserialized from a registry TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Free-form version string of the rule data, surfaced in logs.
    pub version: String,
    pub compliance: ComplianceConfig,
    pub structure: StructureConfig,
    pub length: LengthConfig,
    pub citations: CitationConfig,
    pub evidence: EvidenceConfig,
    pub language: LanguageConfig,
}

fn default_min_severity() -> Severity {
    Severity::Low
}

/// Regulated-terminology rules.
///
/// ```toml
/// [compliance]
/// min_severity = "low"
/// excluded_fields = ["name_en"]
/// safe_expressions = ["個人差があります"]
///
/// [[compliance.tiers]]
/// severity = "critical"
///
/// [[compliance.tiers.rules]]
/// id = "disease-cure"
/// pattern = "完治|治療"
/// category = "disease-claim"
/// score_impact = -10.0
/// replacement = "健康維持をサポート"
/// rationale = "Food products may not claim to cure disease"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceConfig {
    /// Lowest tier evaluated by a default validation pass.
    #[serde(default = "default_min_severity")]
    pub min_severity: Severity,

    /// Field names skipped at any depth (romanized names, URLs, labels).
    #[serde(default)]
    pub excluded_fields: Vec<String>,

    /// Literal phrases whose presence in the same sentence halves a
    /// violation's score impact.
    #[serde(default)]
    pub safe_expressions: Vec<String>,

    /// Severity tiers, highest first.
    pub tiers: Vec<TierConfig>,
}

/// One severity tier and its rules, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierConfig {
    pub severity: Severity,
    pub rules: Vec<RuleConfig>,
}

/// A single pattern rule as written in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Stable identifier used in findings and change records.
    pub id: String,
    /// Regular expression (Rust `regex` syntax).
    pub pattern: String,
    pub category: RuleCategory,
    /// Points deducted per match; zero or negative.
    pub score_impact: f64,
    /// Canonical rewrite. Must not itself match any rule pattern.
    pub replacement: String,
    pub rationale: String,
}

fn default_deduction() -> f64 {
    5.0
}

/// Top-level presence and array-cardinality requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureConfig {
    pub required_fields: Vec<String>,
    #[serde(default)]
    pub arrays: Vec<ArrayMinimum>,
    #[serde(default = "default_deduction")]
    pub deduction_per_issue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayMinimum {
    pub field: String,
    pub min: usize,
}

/// Character-count bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthConfig {
    /// Scalar top-level fields.
    #[serde(default)]
    pub fields: Vec<FieldLength>,
    /// Items of top-level arrays, or a sub-field of each item.
    #[serde(default)]
    pub items: Vec<ItemLength>,
    /// Minimum total across every scanned field.
    #[serde(default)]
    pub total_min: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldLength {
    pub field: String,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

/// Bounds for the items of an array field.
///
/// With `subfield` unset the items themselves must be strings; otherwise the
/// named key of each object item is measured (e.g. `faq[].answer`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemLength {
    pub field: String,
    pub subfield: Option<String>,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

fn default_references_field() -> String {
    "references".to_string()
}

fn default_url_key() -> String {
    "url".to_string()
}

fn default_reference_minimum() -> usize {
    5
}

/// Citation trust configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationConfig {
    #[serde(default = "default_references_field")]
    pub field: String,
    /// Key holding the URL when a reference entry is an object.
    #[serde(default = "default_url_key")]
    pub url_key: String,
    #[serde(default = "default_reference_minimum")]
    pub min_count: usize,
    #[serde(default = "default_reference_minimum")]
    pub min_valid: usize,
    /// When false, a URL repeating an earlier entry is not counted.
    #[serde(default)]
    pub count_duplicates: bool,
    /// Trust tiers, highest first.
    pub tiers: Vec<TrustTierConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustTierConfig {
    pub name: String,
    pub score: f64,
    /// Host names matched exactly or as a parent domain. An entry with a
    /// leading dot (`.ac.jp`) matches as a plain suffix.
    pub domains: Vec<String>,
}

fn default_evidence_field() -> String {
    "evidence_level".to_string()
}

/// The closed evidence-strength taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceConfig {
    #[serde(default = "default_evidence_field")]
    pub field: String,
    /// Levels, strongest first.
    pub levels: Vec<EvidenceLevelConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceLevelConfig {
    pub label: String,
    pub score: f64,
    pub description: String,
}

fn default_min_run_words() -> usize {
    5
}

fn default_preview_chars() -> usize {
    40
}

/// Foreign-language leak detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default)]
    pub excluded_fields: Vec<String>,
    /// Consecutive Latin-script words that constitute a leak.
    #[serde(default = "default_min_run_words")]
    pub min_run_words: usize,
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}
