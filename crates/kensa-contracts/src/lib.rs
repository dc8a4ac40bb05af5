//! # kensa-contracts
//!
//! The vocabulary every kensa crate speaks: the article `Document`, rule
//! severities, check results and composite reports, remediation records,
//! batch summaries, and the `KensaError` type.
//!
//! Scoring lives in `kensa-verify`; the types here only carry results.

pub mod batch;
pub mod document;
pub mod error;
pub mod remediation;
pub mod report;
pub mod rule;

pub use document::{Document, FieldPath, PathSegment};
pub use error::{KensaError, KensaResult};
pub use rule::{RuleCategory, Severity};
