//! kensa Supplement-Article Reference Runtime — Demo CLI
//!
//! Runs one or all of the three reference scenarios, or checks article JSON
//! files named on the command line.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- clean-article
//!   cargo run -p demo -- flagged-article
//!   cargo run -p demo -- batch-review
//!   cargo run -p demo -- check article1.json article2.json --remediate high

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kensa_contracts::{
    batch::{BatchSummary, DocumentOutcome},
    document::Document,
    error::{KensaError, KensaResult},
    rule::Severity,
};
use kensa_core::{traits::DocumentSource, BatchOptions, BatchRunner};
use kensa_ref_supplements::scenarios::{batch_review, clean_article, flagged_article};
use kensa_remediate::RuleRemediator;
use kensa_rules::RuleRegistry;
use kensa_verify::ContentVerifier;

// ── CLI definition ────────────────────────────────────────────────────────────

/// kensa — validation and remediation of supplement articles.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "kensa supplement-article reference demo",
    long_about = "Runs kensa demo scenarios showing regulated-term detection,\n\
                  weighted scoring, auto-remediation, and batch review."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: Clean Article (full marks).
    CleanArticle,
    /// Scenario 2: Flagged Article (validate, remediate, re-validate).
    FlaggedArticle,
    /// Scenario 3: Batch Review (mixed batch with isolated failures).
    BatchReview,
    /// Validate article JSON files.
    Check {
        /// Article files to check. Each path is used as given.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Rule registry TOML to use instead of the bundled rules.
        #[arg(long)]
        rules: Option<PathBuf>,
        /// Lowest compliance tier to report.
        #[arg(long, value_enum)]
        min_severity: Option<SeverityArg>,
        /// Remediate tiers at or above this severity before validating.
        #[arg(long, value_enum)]
        remediate: Option<SeverityArg>,
        /// Process files concurrently.
        #[arg(long)]
        parallel: bool,
        /// Print the batch summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SeverityArg {
    Low,
    Medium,
    High,
    Critical,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Low => Severity::Low,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::High => Severity::High,
            SeverityArg::Critical => Severity::Critical,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for per-check output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::RunAll => {
            print_banner();
            run_all()
        }
        Command::CleanArticle => {
            print_banner();
            clean_article::run_scenario()
        }
        Command::FlaggedArticle => {
            print_banner();
            flagged_article::run_scenario()
        }
        Command::BatchReview => {
            print_banner();
            batch_review::run_scenario()
        }
        Command::Check {
            files,
            rules,
            min_severity,
            remediate,
            parallel,
            json,
        } => {
            let args = CheckArgs {
                files,
                rules,
                min_severity: min_severity.map(Severity::from),
                remediate: remediate.map(Severity::from),
                parallel,
                json,
            };
            match run_check(args) {
                Ok(summary) if summary.failed > 0 => {
                    eprintln!(
                        "{} of {} file(s) could not be checked",
                        summary.failed, summary.total
                    );
                    std::process::exit(1);
                }
                Ok(_) => Ok(()),
                Err(e) => Err(e),
            }
        }
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> KensaResult<()> {
    clean_article::run_scenario()?;
    flagged_article::run_scenario()?;
    batch_review::run_scenario()?;
    println!("All scenarios completed successfully.");
    Ok(())
}

// ── File checking ─────────────────────────────────────────────────────────────

/// Reads article JSON from the paths it was given, one document per file.
struct JsonFileSource {
    files: Vec<PathBuf>,
}

impl DocumentSource for JsonFileSource {
    fn ids(&self) -> Vec<String> {
        self.files.iter().map(|p| p.display().to_string()).collect()
    }

    fn load(&self, id: &str) -> KensaResult<Document> {
        let parse_error = |reason: String| KensaError::ParseError {
            source_id: id.to_string(),
            reason,
        };
        let text = std::fs::read_to_string(id).map_err(|e| parse_error(e.to_string()))?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| parse_error(e.to_string()))?;
        Ok(Document::from(value))
    }
}

struct CheckArgs {
    files: Vec<PathBuf>,
    rules: Option<PathBuf>,
    min_severity: Option<Severity>,
    remediate: Option<Severity>,
    parallel: bool,
    json: bool,
}

/// Check every file and print the results. Files that fail to load or
/// validate are recorded in the returned summary, not returned as errors.
fn run_check(args: CheckArgs) -> KensaResult<BatchSummary> {
    let registry = match &args.rules {
        Some(path) => RuleRegistry::from_file(path)?,
        None => RuleRegistry::builtin()?,
    };
    info!(version = %registry.version, files = args.files.len(), "checking files");

    let verifier = match args.min_severity {
        Some(severity) => ContentVerifier::with_min_severity(&registry, severity),
        None => ContentVerifier::new(&registry),
    };
    let remediator = RuleRemediator::new(&registry);
    let options = BatchOptions {
        parallel: args.parallel,
    };

    let mut runner = BatchRunner::new(&verifier, options);
    if let Some(threshold) = args.remediate {
        runner = runner.with_remediation(&remediator, threshold);
    }
    let source = JsonFileSource { files: args.files };
    let summary = runner.run(&source);

    if args.json {
        let text = serde_json::to_string_pretty(&summary).map_err(|e| KensaError::OutputError {
            reason: format!("failed to serialize summary: {}", e),
        })?;
        println!("{}", text);
    } else {
        print_check_summary(&summary);
    }

    Ok(summary)
}

fn print_check_summary(summary: &BatchSummary) {
    for outcome in &summary.per_document {
        match outcome {
            DocumentOutcome::Validated { id, report, remediated_changes } => {
                println!("{}", id);
                println!(
                    "  {:.1} / 100  grade {}  {}",
                    report.total_score, report.grade, report.status
                );
                for check in &report.checks {
                    println!(
                        "  {:<12} {:>5.1} / {:<5.1} {} issue(s)",
                        check.category.as_str(),
                        check.score,
                        check.max_score,
                        check.issue_count()
                    );
                }
                if let Some(n) = remediated_changes {
                    println!("  remediation applied {} change(s) before validation", n);
                }
                for rec in &report.recommendations {
                    println!("  - {}", rec);
                }
            }
            DocumentOutcome::Failed { id, error } => {
                println!("{}", id);
                println!("  FAILED: {}", error);
            }
        }
        println!();
    }
    println!(
        "{} file(s), pass rate {:.0}%, {} critical issue(s)",
        summary.total,
        summary.pass_rate * 100.0,
        summary.critical_issue_count
    );
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("kensa — Supplement Article Validation");
    println!("Reference Demo");
    println!("=====================================");
    println!();
    println!("kensa pipeline per article:");
    println!("  [1] Rule registry loaded once and self-tested (patterns, tiers, replacements)");
    println!("  [2] Six checkers score structure, compliance, length, citations, evidence, language");
    println!("  [3] Scores summed and clipped to 0-100 → grade A-F and status pass/warn/fail");
    println!("  [4] Optional remediation rewrites regulated terms, highest tier first");
    println!();
}
