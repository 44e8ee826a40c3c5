//! The reconciliation engine and its supporting algorithms.
//!
//! This module provides the core matching functionality:
//!
//! - [`Reconciler`]: main entry point, produces a [`ReconcileReport`]
//! - [`similarity`]: longest-matching-block string similarity for the fuzzy
//!   fallback
//! - [`index`]: insertion-ordered multi-valued indexes per source
//!
//! ## Matching Algorithm
//!
//! Resolution runs in two passes over freshly built indexes:
//!
//! 1. **Exact pass**: restricted to normalized keys present in both sources.
//!    Within a collision group, a case-insensitive original-filename match is
//!    a stronger signal than bare key membership; a group that collapses to
//!    one unconsumed entry per side pairs those two; anything more ambiguous
//!    waits for pass 2.
//! 2. **Fuzzy pass**: every remaining version-control entry, in encounter
//!    order, is scored against the distinct keys of the remaining checklist
//!    entries and paired greedily when the best score reaches the configured
//!    threshold (0.85 by default).
//!
//! Version equality is decided the same way in both passes: integer equality
//! when both sides coerce to integers, trimmed-string equality otherwise,
//! and never equal when either side is empty.
//!
//! ## Example
//!
//! ```
//! use review_recon::{RawRecord, ReconcileConfig, Reconciler};
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
//! let engine = Reconciler::with_config(ReconcileConfig::default());
//! let report = engine.reconcile(&vcs, &checklist);
//! assert_eq!(report.summary.matches, 1);
//! ```
//!
//! [`Reconciler`]: resolver::Reconciler
//! [`ReconcileReport`]: report::ReconcileReport

pub mod index;
pub mod report;
pub mod resolver;
pub mod similarity;
