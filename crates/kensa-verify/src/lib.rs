//! # kensa-verify
//!
//! Article validation for kensa.
//!
//! This crate provides [`engine::ContentVerifier`], which implements the
//! [`kensa_core::traits::Validator`] trait. A document is scored in six
//! independent categories:
//!
//! | category   | max | checker                                   |
//! |------------|-----|-------------------------------------------|
//! | structure  | 25  | [`checkers::StructureChecker`]            |
//! | compliance | 30  | [`checkers::ComplianceChecker`]           |
//! | length     | 15  | [`checkers::LengthChecker`]               |
//! | citations  | 15  | [`checkers::CitationChecker`]             |
//! | evidence   | 10  | [`checkers::EvidenceChecker`]             |
//! | language   | 5   | [`checkers::LanguageChecker`]             |
//!
//! and [`scoring`] turns the six results into a total, a grade, a status, and
//! a list of recommendations.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use kensa_rules::RuleRegistry;
//! use kensa_verify::validate;
//!
//! let registry = RuleRegistry::builtin()?;
//! let report = validate(&registry, &document)?;
//! println!("{} ({})", report.total_score, report.grade);
//! ```

pub mod checkers;
pub mod engine;
pub mod scoring;

pub use engine::ContentVerifier;

use kensa_contracts::{document::Document, error::KensaResult, report::CompositeReport};
use kensa_core::traits::Validator;
use kensa_rules::RuleRegistry;

/// Validate `document` with every checker at the registry's default threshold.
pub fn validate(registry: &RuleRegistry, document: &Document) -> KensaResult<CompositeReport> {
    ContentVerifier::new(registry).validate(document)
}
