//! Core data types for record reconciliation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`RawRecord`](record::RawRecord): a loosely-typed input record with
//!   ordered field-alias resolution
//! - [`VersionValue`](version::VersionValue): a raw version string coerced to
//!   an optional integer, with integer-first equality
//! - [`VcsEntry`](entry::VcsEntry) / [`ChecklistEntry`](entry::ChecklistEntry):
//!   one normalized record from either source, carrying the per-call
//!   `consumed` marker used during resolution
//! - [`MatchType`](types::MatchType): result classification
//!
//! ## Field aliases
//!
//! The two sources are produced by different tools and name the same fields
//! differently. Alias lists are resolved in fixed priority order, first
//! non-empty value wins:
//!
//! | Field | Aliases |
//! |-------|---------|
//! | VCS filename | `File`, `file`, `Filename`, `filename` |
//! | VCS revision | `Last Changed Revision`, `last changed revision`, `WC Revision`, `revision`, `Revision` |
//! | VCS author | `Last Changed Author`, `last changed author` |
//! | VCS date | `Last Changed Date`, `last changed date` |
//! | Checklist filename | `filename`, `Filename`, `File` |
//! | Checklist version | `version_closed`, `Version`, `version` |

pub mod entry;
pub mod record;
pub mod types;
pub mod version;
