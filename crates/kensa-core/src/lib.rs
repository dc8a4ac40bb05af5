//! # kensa-core
//!
//! The traversal and orchestration layer of kensa.
//!
//! This crate provides:
//! - The pipeline traits (`Checker`, `Validator`, `Remediator`, `DocumentSource`)
//! - The document walker every checker and the remediation pass traverse with
//! - The `BatchRunner` that drives a whole source of documents
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kensa_core::{BatchRunner, BatchOptions, InMemorySource};
//!
//! let runner = BatchRunner::new(&verifier, BatchOptions { parallel: true });
//! let summary = runner.run(&source);
//! ```

pub mod batch;
pub mod traits;
pub mod walker;

pub use batch::{BatchOptions, BatchRunner, InMemorySource};
pub use walker::{map_text, require_object, text_fields, walk, TextField, MAX_DEPTH};
