//! The compiled, immutable rule registry.
//!
//! `RuleRegistry` is built once at startup from a `RegistryConfig` and then
//! passed by reference into every checker and into the remediation
//! transformer. Construction runs a self-test; a registry that could make
//! remediation non-idempotent is refused with `KensaError::RuleRegistry`.
//!
//! Load-time checks:
//!
//! 1. Every pattern compiles and does not match the empty string.
//! 2. Compliance tiers are in strictly descending severity order.
//! 3. Rule ids are unique and score impacts are zero or negative.
//! 4. No rule's replacement matches any rule's pattern.
//! 5. Trust tiers and evidence levels are non-empty with positive scores;
//!    evidence scores do not exceed the evidence category maximum.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use kensa_contracts::{
    error::{KensaError, KensaResult},
    report::Category,
    rule::{RuleCategory, Severity},
};

use crate::config::{
    CitationConfig, ComplianceConfig, EvidenceConfig, LanguageConfig, LengthConfig,
    RegistryConfig, StructureConfig,
};

/// The bundled rule data for Japanese supplement articles.
const BUILTIN_RULES: &str = include_str!("../rules/supplement-ja.toml");

/// A compiled pattern rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: String,
    pub pattern: Regex,
    pub category: RuleCategory,
    pub severity: Severity,
    pub score_impact: f64,
    pub replacement: String,
    pub rationale: String,
}

/// One severity tier: its severity and its rules in declaration order.
#[derive(Debug, Clone)]
pub struct RuleTier {
    pub severity: Severity,
    pub rules: Vec<Rule>,
}

/// Compiled compliance configuration.
#[derive(Debug, Clone)]
pub struct CompliancePolicy {
    pub min_severity: Severity,
    pub excluded_fields: Vec<String>,
    pub safe_expressions: Vec<String>,
    /// Highest severity first.
    pub tiers: Vec<RuleTier>,
}

impl CompliancePolicy {
    /// Tiers at or above `threshold`, highest first.
    pub fn tiers_at_or_above(&self, threshold: Severity) -> impl Iterator<Item = &RuleTier> {
        self.tiers.iter().filter(move |t| t.severity >= threshold)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.tiers.iter().flat_map(|t| t.rules.iter())
    }
}

/// One rank of citation sources.
#[derive(Debug, Clone)]
pub struct TrustTier {
    pub name: String,
    pub score: f64,
    pub domains: Vec<String>,
}

impl TrustTier {
    fn matches_host(&self, host: &str) -> bool {
        self.domains.iter().any(|domain| {
            if domain.starts_with('.') {
                host.ends_with(domain.as_str())
            } else {
                host == domain
                    || (host.len() > domain.len()
                        && host.ends_with(domain.as_str())
                        && host.as_bytes()[host.len() - domain.len() - 1] == b'.')
            }
        })
    }
}

/// Ordered trust tiers, highest first. A host belongs to the first tier
/// that lists it; unlisted hosts are untrusted.
#[derive(Debug, Clone)]
pub struct TrustedDomainRegistry {
    tiers: Vec<TrustTier>,
}

impl TrustedDomainRegistry {
    /// Classify `host` (case-insensitive). Returns `None` for untrusted hosts.
    pub fn classify(&self, host: &str) -> Option<&TrustTier> {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.tiers.iter().find(|t| t.matches_host(&host))
    }

    /// Score of the highest tier, used to normalize average trust.
    pub fn top_score(&self) -> f64 {
        self.tiers.first().map(|t| t.score).unwrap_or(0.0)
    }

    pub fn tiers(&self) -> &[TrustTier] {
        &self.tiers
    }
}

/// Compiled citation configuration.
#[derive(Debug, Clone)]
pub struct CitationPolicy {
    pub field: String,
    pub url_key: String,
    pub min_count: usize,
    pub min_valid: usize,
    pub count_duplicates: bool,
    pub trusted: TrustedDomainRegistry,
}

/// One evidence-strength category.
#[derive(Debug, Clone)]
pub struct EvidenceLevel {
    pub label: String,
    pub score: f64,
    pub description: String,
}

/// The closed, ordered evidence taxonomy (strongest first).
#[derive(Debug, Clone)]
pub struct EvidenceTaxonomy {
    pub field: String,
    levels: Vec<EvidenceLevel>,
}

impl EvidenceTaxonomy {
    /// Exact, case-sensitive lookup after trimming whitespace.
    pub fn lookup(&self, label: &str) -> Option<&EvidenceLevel> {
        let label = label.trim();
        self.levels.iter().find(|l| l.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(|l| l.label.as_str())
    }

    pub fn levels(&self) -> &[EvidenceLevel] {
        &self.levels
    }
}

/// Compiled language-purity configuration.
#[derive(Debug, Clone)]
pub struct LanguagePolicy {
    pub excluded_fields: Vec<String>,
    pub min_run_words: usize,
    pub preview_chars: usize,
    /// Matches a run of at least `min_run_words` Latin-script words
    /// separated only by whitespace.
    pub leak_pattern: Regex,
}

/// The immutable catalog every checker reads from.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    pub version: String,
    pub compliance: CompliancePolicy,
    pub structure: StructureConfig,
    pub length: LengthConfig,
    pub citations: CitationPolicy,
    pub evidence: EvidenceTaxonomy,
    pub language: LanguagePolicy,
}

impl RuleRegistry {
    /// The bundled registry for Japanese supplement articles.
    pub fn builtin() -> KensaResult<Self> {
        Self::from_toml_str(BUILTIN_RULES)
    }

    /// Parse `s` as TOML and compile it.
    ///
    /// Returns `KensaError::ConfigError` for malformed TOML and
    /// `KensaError::RuleRegistry` when the rule data fails its self-test.
    pub fn from_toml_str(s: &str) -> KensaResult<Self> {
        let config: RegistryConfig = toml::from_str(s).map_err(|e| KensaError::ConfigError {
            reason: format!("failed to parse registry TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and compile it as registry TOML.
    pub fn from_file(path: &Path) -> KensaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| KensaError::ConfigError {
            reason: format!("failed to read registry file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Compile and self-test a deserialized configuration.
    pub fn from_config(config: RegistryConfig) -> KensaResult<Self> {
        let compliance = compile_compliance(config.compliance)?;
        check_replacements(&compliance)?;
        let citations = compile_citations(config.citations)?;
        let evidence = compile_evidence(config.evidence)?;
        let language = compile_language(config.language)?;

        debug!(
            version = %config.version,
            tiers = compliance.tiers.len(),
            rules = compliance.rules().count(),
            "rule registry loaded"
        );

        Ok(Self {
            version: config.version,
            compliance,
            structure: config.structure,
            length: config.length,
            citations,
            evidence,
            language,
        })
    }
}

fn registry_error(reason: String) -> KensaError {
    warn!(%reason, "rule registry rejected");
    KensaError::RuleRegistry { reason }
}

fn compile_compliance(config: ComplianceConfig) -> KensaResult<CompliancePolicy> {
    let mut tiers: Vec<RuleTier> = Vec::with_capacity(config.tiers.len());
    let mut seen_ids = HashSet::new();

    for tier in config.tiers {
        if let Some(previous) = tiers.last() {
            if tier.severity >= previous.severity {
                return Err(registry_error(format!(
                    "tier '{}' must come before '{}': tiers are listed highest severity first \
                     and each severity appears once",
                    tier.severity, previous.severity
                )));
            }
        }

        let mut rules = Vec::with_capacity(tier.rules.len());
        for rule in tier.rules {
            if !seen_ids.insert(rule.id.clone()) {
                return Err(registry_error(format!("duplicate rule id '{}'", rule.id)));
            }
            if rule.score_impact > 0.0 || !rule.score_impact.is_finite() {
                return Err(registry_error(format!(
                    "rule '{}' has score_impact {}; impacts must be zero or negative",
                    rule.id, rule.score_impact
                )));
            }
            let pattern = Regex::new(&rule.pattern).map_err(|e| {
                registry_error(format!("rule '{}' has an invalid pattern: {}", rule.id, e))
            })?;
            if pattern.is_match("") {
                return Err(registry_error(format!(
                    "rule '{}' pattern matches the empty string",
                    rule.id
                )));
            }
            rules.push(Rule {
                id: rule.id,
                pattern,
                category: rule.category,
                severity: tier.severity,
                score_impact: rule.score_impact,
                replacement: rule.replacement,
                rationale: rule.rationale,
            });
        }

        tiers.push(RuleTier {
            severity: tier.severity,
            rules,
        });
    }

    Ok(CompliancePolicy {
        min_severity: config.min_severity,
        excluded_fields: config.excluded_fields,
        safe_expressions: config.safe_expressions,
        tiers,
    })
}

/// Idempotence self-test: a replacement that some pattern would match again
/// makes a second remediation pass produce changes.
fn check_replacements(policy: &CompliancePolicy) -> KensaResult<()> {
    for rule in policy.rules() {
        if let Some(other) = policy.rules().find(|o| o.pattern.is_match(&rule.replacement)) {
            return Err(registry_error(format!(
                "replacement '{}' of rule '{}' matches the pattern of rule '{}'",
                rule.replacement, rule.id, other.id
            )));
        }
    }
    Ok(())
}

fn compile_citations(config: CitationConfig) -> KensaResult<CitationPolicy> {
    if config.tiers.is_empty() {
        return Err(registry_error("citations: at least one trust tier is required".to_string()));
    }
    if let Some(tier) = config.tiers.iter().find(|t| t.score <= 0.0) {
        return Err(registry_error(format!(
            "trust tier '{}' must have a positive score",
            tier.name
        )));
    }
    let tiers = config
        .tiers
        .into_iter()
        .map(|t| TrustTier {
            name: t.name,
            score: t.score,
            domains: t.domains.into_iter().map(|d| d.to_ascii_lowercase()).collect(),
        })
        .collect();

    Ok(CitationPolicy {
        field: config.field,
        url_key: config.url_key,
        min_count: config.min_count,
        min_valid: config.min_valid,
        count_duplicates: config.count_duplicates,
        trusted: TrustedDomainRegistry { tiers },
    })
}

fn compile_evidence(config: EvidenceConfig) -> KensaResult<EvidenceTaxonomy> {
    if config.levels.is_empty() {
        return Err(registry_error("evidence: at least one level is required".to_string()));
    }
    let max = Category::Evidence.max_score();
    if let Some(level) = config.levels.iter().find(|l| !(l.score > 0.0 && l.score <= max)) {
        return Err(registry_error(format!(
            "evidence level '{}' has score {}; scores must be in (0, {}]",
            level.label, level.score, max
        )));
    }
    let mut labels = HashSet::new();
    if let Some(level) = config.levels.iter().find(|l| !labels.insert(l.label.clone())) {
        return Err(registry_error(format!("duplicate evidence level '{}'", level.label)));
    }
    Ok(EvidenceTaxonomy {
        field: config.field,
        levels: config
            .levels
            .into_iter()
            .map(|l| EvidenceLevel {
                label: l.label,
                score: l.score,
                description: l.description,
            })
            .collect(),
    })
}

fn compile_language(config: LanguageConfig) -> KensaResult<LanguagePolicy> {
    if config.min_run_words == 0 {
        return Err(registry_error("language: min_run_words must be at least 1".to_string()));
    }
    let word = r"[A-Za-z][A-Za-z'\-]*";
    let source = format!(r"{word}(?:\s+{word}){{{},}}", config.min_run_words - 1);
    let leak_pattern = Regex::new(&source)
        .map_err(|e| registry_error(format!("language: leak pattern failed to compile: {}", e)))?;

    Ok(LanguagePolicy {
        excluded_fields: config.excluded_fields,
        min_run_words: config.min_run_words,
        preview_chars: config.preview_chars,
        leak_pattern,
    })
}
