use serde::Serialize;

use crate::core::entry::{ChecklistEntry, VcsEntry};
use crate::core::record::RawRecord;
use crate::core::types::MatchType;

fn is_false(b: &bool) -> bool {
    !*b
}

/// Scalar counts of the four result buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReconcileSummary {
    pub matches: usize,
    pub mismatches: usize,
    pub only_in_vcs: usize,
    pub only_in_checklist: usize,
}

/// One version-control entry paired with one checklist entry.
///
/// Lands in `matches` when the versions agree and in `mismatches` when they
/// do not; the shape is identical so consumers can render both the same way.
#[derive(Debug, Clone, Serialize)]
pub struct PairedRecord {
    /// Original version-control filename
    pub filename: String,

    /// Normalized key of the version-control entry
    pub normalized_filename: String,

    /// Original checklist filename it was paired with
    pub matched_checklist_filename: String,

    /// Normalized key of the checklist entry, reported for fuzzy pairs where
    /// it differs from the version-control key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_checklist_normalized: Option<String>,

    pub vcs_revision_raw: String,
    pub vcs_revision_int: Option<u64>,
    pub checklist_version_raw: String,
    pub checklist_version_int: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed_author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed_date: Option<String>,

    pub match_type: MatchType,

    /// Similarity of the pairing; 1.0 for exact pairs
    pub score: f64,

    /// Version-equality outcome that decided the bucket
    pub versions_equal: bool,

    /// Upstream inter-source conflict flag, passed through verbatim
    #[serde(skip_serializing_if = "is_false")]
    pub inter_sheet_conflict: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_comment: Option<String>,
}

impl PairedRecord {
    pub(crate) fn from_pair(
        vcs: &VcsEntry,
        checklist: &ChecklistEntry,
        match_type: MatchType,
        score: f64,
    ) -> Self {
        Self {
            filename: vcs.filename.clone(),
            normalized_filename: vcs.key.clone(),
            matched_checklist_filename: checklist.filename.clone(),
            matched_checklist_normalized: match match_type {
                MatchType::Exact => None,
                MatchType::Fuzzy => Some(checklist.key.clone()),
            },
            vcs_revision_raw: vcs.revision.raw.clone(),
            vcs_revision_int: vcs.revision.as_int,
            checklist_version_raw: checklist.version.raw.clone(),
            checklist_version_int: checklist.version.as_int,
            last_changed_author: vcs.author.clone(),
            last_changed_date: vcs.date.clone(),
            match_type,
            score,
            versions_equal: vcs.revision.matches(&checklist.version),
            inter_sheet_conflict: checklist.inter_sheet_conflict,
            conflict_comment: if checklist.inter_sheet_conflict {
                checklist.conflict_comment.clone()
            } else {
                None
            },
        }
    }
}

/// A version-control entry with no accepted counterpart on the checklist.
#[derive(Debug, Clone, Serialize)]
pub struct VcsOrphan {
    pub filename: String,
    pub normalized_filename: String,
    pub revision_raw: String,
    pub revision_int: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed_author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed_date: Option<String>,
}

impl VcsOrphan {
    pub(crate) fn from_entry(entry: &VcsEntry) -> Self {
        Self {
            filename: entry.filename.clone(),
            normalized_filename: entry.key.clone(),
            revision_raw: entry.revision.raw.clone(),
            revision_int: entry.revision.as_int,
            last_changed_author: entry.author.clone(),
            last_changed_date: entry.date.clone(),
        }
    }
}

/// A checklist entry with no accepted counterpart in version control.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistOrphan {
    pub filename: String,
    pub normalized_filename: String,
    pub version_raw: String,
    pub version_int: Option<u64>,

    #[serde(skip_serializing_if = "is_false")]
    pub inter_sheet_conflict: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_comment: Option<String>,

    /// The record as received, for consumers that need fields this engine
    /// does not interpret
    pub raw: RawRecord,
}

impl ChecklistOrphan {
    pub(crate) fn from_entry(entry: &ChecklistEntry) -> Self {
        Self {
            filename: entry.filename.clone(),
            normalized_filename: entry.key.clone(),
            version_raw: entry.version.raw.clone(),
            version_int: entry.version.as_int,
            inter_sheet_conflict: entry.inter_sheet_conflict,
            conflict_comment: if entry.inter_sheet_conflict {
                entry.conflict_comment.clone()
            } else {
                None
            },
            raw: entry.raw.clone(),
        }
    }
}

/// Complete result of one reconciliation call.
///
/// The four buckets partition the non-skipped input entries: every
/// version-control entry lands in exactly one of `matches`, `mismatches`, or
/// `only_in_vcs`, and every checklist entry in exactly one of `matches`,
/// `mismatches`, or `only_in_checklist`.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileReport {
    pub summary: ReconcileSummary,
    pub matches: Vec<PairedRecord>,
    pub mismatches: Vec<PairedRecord>,
    pub only_in_vcs: Vec<VcsOrphan>,
    pub only_in_checklist: Vec<ChecklistOrphan>,
}

impl ReconcileReport {
    #[must_use]
    pub(crate) fn new(
        matches: Vec<PairedRecord>,
        mismatches: Vec<PairedRecord>,
        only_in_vcs: Vec<VcsOrphan>,
        only_in_checklist: Vec<ChecklistOrphan>,
    ) -> Self {
        Self {
            summary: ReconcileSummary {
                matches: matches.len(),
                mismatches: mismatches.len(),
                only_in_vcs: only_in_vcs.len(),
                only_in_checklist: only_in_checklist.len(),
            },
            matches,
            mismatches,
            only_in_vcs,
            only_in_checklist,
        }
    }
}
