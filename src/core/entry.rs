use crate::core::record::{
    RawRecord, CHECKLIST_FILENAME_ALIASES, CHECKLIST_VERSION_ALIASES, VCS_AUTHOR_ALIASES,
    VCS_DATE_ALIASES, VCS_FILENAME_ALIASES, VCS_REVISION_ALIASES,
};
use crate::core::version::VersionValue;
use crate::utils::normalize::normalize_filename;

/// One version-control record after normalization.
///
/// The `consumed` flag exists only for the duration of a single
/// reconciliation call; entries are rebuilt fresh per invocation, so no state
/// leaks between calls.
#[derive(Debug, Clone)]
pub struct VcsEntry {
    /// Canonical matching key derived from the filename
    pub key: String,

    /// Original filename as it appeared in the export
    pub filename: String,

    /// Last-changed revision
    pub revision: VersionValue,

    /// Last-changed author, when the export carries one
    pub author: Option<String>,

    /// Last-changed date, passed through as an opaque string
    pub date: Option<String>,

    /// Set once the entry has been paired during resolution
    pub consumed: bool,
}

impl VcsEntry {
    /// Build an entry from a raw record. Returns `None` when no filename
    /// alias resolves; such records cannot participate in any comparison.
    #[must_use]
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let filename = record.field(VCS_FILENAME_ALIASES)?;
        let revision = record.field(VCS_REVISION_ALIASES);
        Some(Self {
            key: normalize_filename(&filename),
            revision: VersionValue::from_field(revision.as_deref()),
            author: record.field(VCS_AUTHOR_ALIASES),
            date: record.field(VCS_DATE_ALIASES),
            filename,
            consumed: false,
        })
    }
}

/// One review-checklist record after normalization.
#[derive(Debug, Clone)]
pub struct ChecklistEntry {
    /// Canonical matching key derived from the filename
    pub key: String,

    /// Original filename as it appeared on the checklist
    pub filename: String,

    /// Version on which the review closed
    pub version: VersionValue,

    /// True when an upstream multi-sheet merge disagreed on the version
    pub inter_sheet_conflict: bool,

    /// Upstream explanation of the disagreement, passed through verbatim
    pub conflict_comment: Option<String>,

    /// The record as received, carried onto orphan output
    pub raw: RawRecord,

    /// Set once the entry has been paired during resolution
    pub consumed: bool,
}

impl ChecklistEntry {
    /// Build an entry from a raw record. Returns `None` when no filename
    /// alias resolves.
    #[must_use]
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let filename = record.field(CHECKLIST_FILENAME_ALIASES)?;
        let version = record.field(CHECKLIST_VERSION_ALIASES);
        Some(Self {
            key: normalize_filename(&filename),
            version: VersionValue::from_field(version.as_deref()),
            inter_sheet_conflict: record.flag("inter_sheet_conflict"),
            conflict_comment: record.field(&["conflict_comment"]),
            raw: record.clone(),
            filename,
            consumed: false,
        })
    }
}
