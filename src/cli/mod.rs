//! Command-line interface for review-recon.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **reconcile**: Reconcile a version-control export against a review
//!   checklist
//! - **inspect**: Show how an input file's records parse and normalize
//!
//! ## Usage
//!
//! ```text
//! # Reconcile a Subversion status export against a checklist export
//! review-recon reconcile svn_report.csv checklist.json
//!
//! # Tighten the fuzzy-match floor
//! review-recon reconcile svn_report.csv checklist.json --fuzzy-threshold 0.9
//!
//! # JSON output for scripting
//! review-recon reconcile svn_report.csv checklist.json --format json
//!
//! # Check how filenames normalize before reconciling
//! review-recon inspect checklist.json --role checklist
//! ```

use clap::{Parser, Subcommand};

pub mod inspect;
pub mod reconcile;

#[derive(Parser)]
#[command(name = "review-recon")]
#[command(version)]
#[command(about = "Reconcile version-control exports against review-checklist records")]
#[command(
    long_about = "review-recon checks a review checklist against what version control actually holds.\n\nIt matches the two record lists on normalized filenames (exact first, fuzzy fallback), compares the recorded versions, and reports:\n- Files whose reviewed version matches the committed revision\n- Files reviewed against a stale version\n- Files present in only one of the two sources"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile a version-control export against a review checklist
    Reconcile(reconcile::ReconcileArgs),

    /// Show how an input's records parse and normalize
    Inspect(inspect::InspectArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
