//! # kensa-rules
//!
//! The TOML-driven rule registry for kensa.
//!
//! ## Overview
//!
//! A [`RuleRegistry`] bundles everything the checkers consult: regulated-term
//! rules grouped into ordered severity tiers, safe expressions, structural and
//! length requirements, trusted citation domains, the evidence taxonomy, and
//! the foreign-language leak detector. It is compiled once, self-tested, and
//! then shared immutably.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use kensa_rules::RuleRegistry;
//!
//! let registry = RuleRegistry::builtin()?;
//! // or: RuleRegistry::from_file(Path::new("rules/custom.toml"))?;
//! ```
//!
//! ## Tier ordering
//!
//! Tiers are an ordered list, never a map: the remediation transformer
//! rewrites the highest tier first so lower-tier rules cannot corrupt a
//! replacement that a higher tier already inserted.

pub mod config;
pub mod registry;

pub use config::RegistryConfig;
pub use registry::{
    CitationPolicy, CompliancePolicy, EvidenceLevel, EvidenceTaxonomy, LanguagePolicy, Rule,
    RuleRegistry, RuleTier, TrustTier, TrustedDomainRegistry,
};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use kensa_contracts::{error::KensaError, rule::Severity};

    use crate::RuleRegistry;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Everything except `[compliance]`, so tests can vary the rules alone.
    const SUPPORT_TABLES: &str = r#"
        [structure]
        required_fields = ["name"]

        [length]

        [citations]
        [[citations.tiers]]
        name = "top"
        score = 3.0
        domains = ["nih.gov", ".ac.jp"]

        [[citations.tiers]]
        name = "agency"
        score = 2.0
        domains = ["mhlw.go.jp"]

        [evidence]
        [[evidence.levels]]
        label = "A"
        score = 10.0
        description = "meta-analysis"

        [language]
    "#;

    fn registry_with(compliance: &str) -> Result<RuleRegistry, KensaError> {
        let toml = format!("version = \"test\"\n{compliance}\n{SUPPORT_TABLES}");
        RuleRegistry::from_toml_str(&toml)
    }

    fn expect_registry_error(result: Result<RuleRegistry, KensaError>, needle: &str) {
        match result {
            Err(KensaError::RuleRegistry { reason }) => {
                assert!(reason.contains(needle), "unexpected reason: {reason}");
            }
            other => panic!("expected RuleRegistry error, got {:?}", other.map(|r| r.version)),
        }
    }

    // ── 1. builtin registry ───────────────────────────────────────────────────

    /// The bundled rule file must load and pass its own self-test.
    #[test]
    fn test_builtin_registry_loads() {
        let registry = RuleRegistry::builtin().unwrap();

        assert!(!registry.compliance.tiers.is_empty());
        assert_eq!(registry.compliance.tiers[0].severity, Severity::Critical);
        assert_eq!(registry.compliance.min_severity, Severity::Low);
        assert!(registry.evidence.lookup("A").is_some());
        assert_eq!(registry.citations.min_count, 5);
    }

    /// Tiers come out highest severity first, exactly as declared.
    #[test]
    fn test_builtin_tiers_strictly_descending() {
        let registry = RuleRegistry::builtin().unwrap();
        let severities: Vec<Severity> =
            registry.compliance.tiers.iter().map(|t| t.severity).collect();

        assert_eq!(
            severities,
            vec![Severity::Critical, Severity::High, Severity::Medium, Severity::Low]
        );
    }

    /// No builtin replacement may be matched by any builtin pattern.
    #[test]
    fn test_builtin_replacements_never_rematch() {
        let registry = RuleRegistry::builtin().unwrap();
        for rule in registry.compliance.rules() {
            for other in registry.compliance.rules() {
                assert!(
                    !other.pattern.is_match(&rule.replacement),
                    "replacement of '{}' matches '{}'",
                    rule.id,
                    other.id
                );
            }
        }
    }

    #[test]
    fn test_tiers_at_or_above_filters_by_threshold() {
        let registry = RuleRegistry::builtin().unwrap();

        let strict: Vec<Severity> = registry
            .compliance
            .tiers_at_or_above(Severity::Low)
            .map(|t| t.severity)
            .collect();
        assert_eq!(strict.len(), 4);

        let lenient: Vec<Severity> = registry
            .compliance
            .tiers_at_or_above(Severity::Critical)
            .map(|t| t.severity)
            .collect();
        assert_eq!(lenient, vec![Severity::Critical]);
    }

    // ── 2. self-test failures ─────────────────────────────────────────────────

    /// A replacement that re-matches a pattern would break idempotence.
    #[test]
    fn test_rematching_replacement_rejected() {
        let compliance = r#"
            [compliance]
            [[compliance.tiers]]
            severity = "critical"
            [[compliance.tiers.rules]]
            id = "cure"
            pattern = "治る"
            category = "disease-claim"
            score_impact = -10.0
            replacement = "すぐ治る"
            rationale = "test"
        "#;

        expect_registry_error(registry_with(compliance), "matches the pattern of rule 'cure'");
    }

    /// A lower-tier pattern matching a higher-tier replacement is also rejected.
    #[test]
    fn test_cross_tier_rematch_rejected() {
        let compliance = r#"
            [compliance]
            [[compliance.tiers]]
            severity = "critical"
            [[compliance.tiers.rules]]
            id = "cure"
            pattern = "治る"
            category = "disease-claim"
            score_impact = -10.0
            replacement = "最高の健康"
            rationale = "test"

            [[compliance.tiers]]
            severity = "low"
            [[compliance.tiers.rules]]
            id = "superlative"
            pattern = "最高"
            category = "exaggeration"
            score_impact = -1.0
            replacement = "こだわりの"
            rationale = "test"
        "#;

        expect_registry_error(registry_with(compliance), "rule 'superlative'");
    }

    #[test]
    fn test_out_of_order_tiers_rejected() {
        let compliance = r#"
            [compliance]
            [[compliance.tiers]]
            severity = "low"
            rules = []

            [[compliance.tiers]]
            severity = "critical"
            rules = []
        "#;

        expect_registry_error(registry_with(compliance), "highest severity first");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let compliance = r#"
            [compliance]
            [[compliance.tiers]]
            severity = "high"
            [[compliance.tiers.rules]]
            id = "broken"
            pattern = "(unclosed"
            category = "efficacy-claim"
            score_impact = -5.0
            replacement = "ok"
            rationale = "test"
        "#;

        expect_registry_error(registry_with(compliance), "invalid pattern");
    }

    #[test]
    fn test_positive_score_impact_rejected() {
        let compliance = r#"
            [compliance]
            [[compliance.tiers]]
            severity = "high"
            [[compliance.tiers.rules]]
            id = "bonus"
            pattern = "効く"
            category = "efficacy-claim"
            score_impact = 5.0
            replacement = "役立つ"
            rationale = "test"
        "#;

        expect_registry_error(registry_with(compliance), "zero or negative");
    }

    #[test]
    fn test_empty_matching_pattern_rejected() {
        let compliance = r#"
            [compliance]
            [[compliance.tiers]]
            severity = "high"
            [[compliance.tiers.rules]]
            id = "anything"
            pattern = "x*"
            category = "efficacy-claim"
            score_impact = -5.0
            replacement = "y"
            rationale = "test"
        "#;

        expect_registry_error(registry_with(compliance), "empty string");
    }

    #[test]
    fn test_duplicate_rule_id_rejected() {
        let compliance = r#"
            [compliance]
            [[compliance.tiers]]
            severity = "high"
            [[compliance.tiers.rules]]
            id = "same"
            pattern = "効く"
            category = "efficacy-claim"
            score_impact = -5.0
            replacement = "役立つ"
            rationale = "test"
            [[compliance.tiers.rules]]
            id = "same"
            pattern = "改善"
            category = "physiological-claim"
            score_impact = -5.0
            replacement = "サポート"
            rationale = "test"
        "#;

        expect_registry_error(registry_with(compliance), "duplicate rule id");
    }

    #[test]
    fn test_evidence_scores_must_fit_category() {
        let base = format!("version = \"test\"\n[compliance]\ntiers = []\n{SUPPORT_TABLES}");

        let too_high = base.replace("score = 10.0", "score = 12.0");
        expect_registry_error(RuleRegistry::from_toml_str(&too_high), "evidence level 'A'");

        let zero = base.replace("score = 10.0", "score = 0.0");
        expect_registry_error(RuleRegistry::from_toml_str(&zero), "scores must be in (0, 10]");

        assert!(RuleRegistry::from_toml_str(&base).is_ok());
    }

    // ── 3. trusted domains ────────────────────────────────────────────────────

    #[test]
    fn test_domain_classification_first_tier_wins() {
        let registry = registry_with("[compliance]\ntiers = []").unwrap();
        let trusted = &registry.citations.trusted;

        assert_eq!(trusted.classify("pubmed.ncbi.nlm.nih.gov").map(|t| t.name.as_str()), Some("top"));
        assert_eq!(trusted.classify("NIH.GOV").map(|t| t.name.as_str()), Some("top"));
        assert_eq!(trusted.classify("www.u-tokyo.ac.jp").map(|t| t.name.as_str()), Some("top"));
        assert_eq!(trusted.classify("www.mhlw.go.jp").map(|t| t.name.as_str()), Some("agency"));
        assert_eq!(trusted.top_score(), 3.0);
    }

    /// Parent-domain matching must respect label boundaries.
    #[test]
    fn test_domain_lookalikes_untrusted() {
        let registry = registry_with("[compliance]\ntiers = []").unwrap();
        let trusted = &registry.citations.trusted;

        assert!(trusted.classify("evilnih.gov").is_none());
        assert!(trusted.classify("nih.gov.example.com").is_none());
        assert!(trusted.classify("example.com").is_none());
    }

    // ── 4. evidence taxonomy ──────────────────────────────────────────────────

    #[test]
    fn test_evidence_lookup_is_closed() {
        let registry = RuleRegistry::builtin().unwrap();

        assert_eq!(registry.evidence.lookup(" B ").map(|l| l.score), Some(8.0));
        assert!(registry.evidence.lookup("Z").is_none());
        assert!(registry.evidence.lookup("a").is_none());
        assert_eq!(registry.evidence.labels().collect::<Vec<_>>(), vec!["A", "B", "C", "D", "E"]);
    }

    // ── 5. language leak pattern ──────────────────────────────────────────────

    #[test]
    fn test_leak_pattern_requires_min_run() {
        let registry = RuleRegistry::builtin().unwrap();
        let leak = &registry.language.leak_pattern;

        assert!(leak.is_match("これは This is a leaked sentence です"));
        assert!(!leak.is_match("ビタミンC (Vitamin C) は水溶性です"));
        assert!(!leak.is_match("four words only here"));
    }

    // ── 6. configuration errors ───────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        let result = RuleRegistry::from_toml_str("this is not valid toml ][[[");

        match result {
            Err(KensaError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse registry TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other.map(|r| r.version)),
        }
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = RuleRegistry::from_file(std::path::Path::new("/nonexistent/rules.toml"));
        assert!(matches!(result, Err(KensaError::ConfigError { .. })));
    }
}
