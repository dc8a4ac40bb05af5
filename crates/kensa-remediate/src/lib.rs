//! # kensa-remediate
//!
//! Auto-remediation of regulated terminology.
//!
//! [`transformer::RuleRemediator`] implements
//! [`kensa_core::traits::Remediator`]: it returns a new document in which every
//! rule match at or above a severity threshold has been replaced with the
//! rule's canonical alternative, along with one [`Change`] per substitution.
//! The caller's document is never modified.
//!
//! Remediation is idempotent. Running it again on the fixed document produces
//! no changes.
//!
//! [`Change`]: kensa_contracts::remediation::Change

pub mod transformer;

pub use transformer::RuleRemediator;

use kensa_contracts::{
    document::Document, error::KensaResult, remediation::RemediationResult, rule::Severity,
};
use kensa_core::traits::Remediator;
use kensa_rules::RuleRegistry;

/// Remediate `document` with every rule at or above `threshold`.
pub fn remediate(
    registry: &RuleRegistry,
    document: &Document,
    threshold: Severity,
) -> KensaResult<RemediationResult> {
    RuleRemediator::new(registry).remediate(document, threshold)
}
