use indexmap::IndexMap;
use tracing::debug;

use crate::core::entry::{ChecklistEntry, VcsEntry};
use crate::core::record::RawRecord;
use crate::utils::normalize::is_ignored_filename;

/// Multi-valued index: normalized key → entries in encounter order.
///
/// A key maps to a *list* because two differently-extensioned originals can
/// normalize to the same key; collisions are expected, not an error. Both the
/// key order (first encounter) and the per-key entry order (insertion) are
/// preserved, which the resolver relies on for deterministic disambiguation.
pub type SourceIndex<T> = IndexMap<String, Vec<T>>;

/// Group version-control records by normalized filename.
///
/// Records without a usable filename alias are skipped, as are records whose
/// filename ends with one of the ignored extensions.
#[must_use]
pub fn build_vcs_index(
    records: &[RawRecord],
    ignored_extensions: &[String],
) -> SourceIndex<VcsEntry> {
    let mut index: SourceIndex<VcsEntry> = IndexMap::new();
    for record in records {
        let Some(entry) = VcsEntry::from_record(record) else {
            debug!("skipping version-control record without a filename field");
            continue;
        };
        if is_ignored_filename(&entry.filename, ignored_extensions) {
            debug!(filename = %entry.filename, "skipping ignored version-control file");
            continue;
        }
        index.entry(entry.key.clone()).or_default().push(entry);
    }
    index
}

/// Group checklist records by normalized filename.
///
/// Records without a usable filename alias are skipped; the checklist side
/// has no ignored-extension filtering.
#[must_use]
pub fn build_checklist_index(records: &[RawRecord]) -> SourceIndex<ChecklistEntry> {
    let mut index: SourceIndex<ChecklistEntry> = IndexMap::new();
    for record in records {
        let Some(entry) = ChecklistEntry::from_record(record) else {
            debug!("skipping checklist record without a filename field");
            continue;
        };
        index.entry(entry.key.clone()).or_default().push(entry);
    }
    index
}
