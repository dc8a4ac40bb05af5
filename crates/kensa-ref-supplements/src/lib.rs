//! # kensa-ref-supplements
//!
//! Supplement-article reference runtime for kensa.
//!
//! Demonstrates three scenarios using sample Japanese articles:
//!
//! 1. **Clean Article** — a complete vitamin C article that earns every point.
//! 2. **Flagged Article** — a promotional collagen draft, validated, remediated,
//!    and validated again, with an idempotence check on the rewrite.
//! 3. **Batch Review** — a mixed batch, including unparseable and non-object
//!    inputs, run as submitted and with remediation applied first.
//!
//! Nothing is fetched over the network and no files are written.

pub mod mock_data;
pub mod scenarios;
