//! # review-recon
//!
//! A library for reconciling version-control exports against review-checklist
//! records.
//!
//! Review checklists and version-control exports describe the same artifacts
//! but are produced by different tools: filenames differ in casing,
//! punctuation, and separators, and versions are written in inconsistent
//! forms (`20157`, `v20157`, `20157.0`). `review-recon` matches the two
//! record lists anyway and classifies every artifact as matched (versions
//! agree), mismatched (versions disagree), or orphaned in one source.
//!
//! ## Features
//!
//! - **Filename normalization**: punctuation-insensitive matching keys that
//!   keep the extension as a discriminator
//! - **Collision-aware exact matching**: duplicate keys disambiguate on the
//!   original filenames before anything is paired
//! - **Fuzzy fallback**: longest-matching-block similarity with a
//!   configurable acceptance threshold
//! - **Integer-first version comparison**: `v20157` equals `20157.0`
//! - **Deterministic output**: identical inputs always produce identical
//!   pairings
//!
//! ## Example
//!
//! ```rust
//! use review_recon::{RawRecord, Reconciler};
//! use serde_json::json;
//!
//! let vcs = vec![RawRecord::from([
//!     ("File", json!("Report_final.stp")),
//!     ("Last Changed Revision", json!("20157")),
//! ])];
//! let checklist = vec![RawRecord::from([
//!     ("filename", json!("report-final.stp")),
//!     ("version_closed", json!("v20157")),
//! ])];
//!
//! let report = Reconciler::new().reconcile(&vcs, &checklist);
//! assert_eq!(report.summary.matches, 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: records, field aliases, version values, source entries
//! - [`matching`]: the two-pass resolver, similarity scoring, and indexes
//! - [`parsing`]: CSV/TSV/JSON record-list ingestion for the CLI
//! - [`utils`]: filename and version normalization
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::record::RawRecord;
pub use crate::core::types::MatchType;
pub use crate::core::version::VersionValue;
pub use crate::matching::report::{ReconcileReport, ReconcileSummary};
pub use crate::matching::resolver::{ReconcileConfig, Reconciler, DEFAULT_FUZZY_THRESHOLD};
