use tracing::debug;

use crate::core::record::RawRecord;
use crate::core::types::MatchType;
use crate::matching::index::{build_checklist_index, build_vcs_index};
use crate::matching::report::{ChecklistOrphan, PairedRecord, ReconcileReport, VcsOrphan};
use crate::matching::similarity::best_match;
use crate::utils::normalize::IGNORED_EXTENSIONS;

/// Default similarity floor for accepting a fuzzy pairing
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// Configuration for the reconciliation engine
#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    /// Similarity floor for pass-2 acceptance, in `[0, 1]`
    pub fuzzy_threshold: f64,

    /// Extensions excluded from the version-control side
    /// (case-insensitive suffix match)
    pub ignored_extensions: Vec<String>,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            ignored_extensions: IGNORED_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// The reconciliation engine.
///
/// A pure, synchronous computation over two in-memory record lists: indexes
/// and their consumed markers are built fresh inside every [`reconcile`]
/// call, so concurrent calls on a shared `Reconciler` are independent.
///
/// [`reconcile`]: Reconciler::reconcile
///
/// # Example
///
/// ```
/// use review_recon::{RawRecord, Reconciler};
/// use serde_json::json;
///
/// let vcs = vec![RawRecord::from([
///     ("File", json!("alpha.csv")),
///     ("Last Changed Revision", json!("20100")),
/// ])];
/// let checklist = vec![RawRecord::from([
///     ("filename", json!("alpha.csv")),
///     ("version_closed", json!("20100")),
/// ])];
///
/// let report = Reconciler::new().reconcile(&vcs, &checklist);
/// assert_eq!(report.summary.matches, 1);
/// assert_eq!(report.summary.mismatches, 0);
/// ```
#[derive(Debug, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    /// Create an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub fn with_config(config: ReconcileConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Reconcile a version-control export against a review checklist.
    ///
    /// Two passes. Pass 1 pairs entries that share a normalized key, with
    /// intra-group disambiguation: an unconsumed checklist entry whose
    /// original filename equals the version-control entry's
    /// case-insensitively wins; failing that, a group that has collapsed to
    /// exactly one unconsumed entry per side pairs those two; anything else
    /// is left for pass 2. Pass 2 takes every still-unconsumed
    /// version-control entry in encounter order and accepts the most similar
    /// unconsumed checklist key at or above the configured threshold,
    /// consuming greedily: first match, first served. The greedy policy is
    /// reproducible but makes no claim of a globally optimal assignment.
    ///
    /// In both passes a pair lands in `matches` when the versions agree and
    /// in `mismatches` when they do not; entries never consumed become
    /// orphans of their side.
    #[must_use]
    pub fn reconcile(
        &self,
        vcs_records: &[RawRecord],
        checklist_records: &[RawRecord],
    ) -> ReconcileReport {
        let mut vcs_index = build_vcs_index(vcs_records, &self.config.ignored_extensions);
        let mut checklist_index = build_checklist_index(checklist_records);
        debug!(
            vcs_keys = vcs_index.len(),
            checklist_keys = checklist_index.len(),
            "built source indexes"
        );

        let mut matches: Vec<PairedRecord> = Vec::new();
        let mut mismatches: Vec<PairedRecord> = Vec::new();
        let mut only_in_vcs: Vec<VcsOrphan> = Vec::new();
        let mut only_in_checklist: Vec<ChecklistOrphan> = Vec::new();

        // Pass 1: exact key matches, disambiguated within each collision group.
        for (key, s_group) in vcs_index.iter_mut() {
            let Some(c_group) = checklist_index.get_mut(key) else {
                continue;
            };

            for si in 0..s_group.len() {
                if s_group[si].consumed {
                    continue;
                }

                let s_name = s_group[si].filename.to_lowercase();
                let mut chosen = c_group
                    .iter()
                    .position(|c| !c.consumed && c.filename.to_lowercase() == s_name);

                // No exact-name partner: pair only if the group has collapsed
                // to a single unconsumed entry on each side.
                if chosen.is_none() {
                    let unconsumed_s = s_group.iter().filter(|s| !s.consumed).count();
                    let unconsumed_c: Vec<usize> = c_group
                        .iter()
                        .enumerate()
                        .filter(|(_, c)| !c.consumed)
                        .map(|(ci, _)| ci)
                        .collect();
                    if unconsumed_s == 1 && unconsumed_c.len() == 1 {
                        chosen = Some(unconsumed_c[0]);
                    }
                }

                let Some(ci) = chosen else {
                    continue;
                };

                s_group[si].consumed = true;
                c_group[ci].consumed = true;
                let record =
                    PairedRecord::from_pair(&s_group[si], &c_group[ci], MatchType::Exact, 1.0);
                if record.versions_equal {
                    matches.push(record);
                } else {
                    mismatches.push(record);
                }
            }
        }
        debug!(
            matches = matches.len(),
            mismatches = mismatches.len(),
            "exact pass complete"
        );

        // Pass 2: fuzzy fallback across all remaining entries, any key.
        // Candidate keys keep the first-encounter order of the checklist
        // index so tie-breaking stays deterministic.
        let mut candidate_keys: Vec<String> = checklist_index
            .iter()
            .filter(|(_, group)| group.iter().any(|c| !c.consumed))
            .map(|(key, _)| key.clone())
            .collect();

        for s_group in vcs_index.values_mut() {
            for s_entry in s_group.iter_mut() {
                if s_entry.consumed {
                    continue;
                }

                let (best, score) = best_match(&s_entry.key, &candidate_keys);
                let best = best.map(String::from);

                if let Some(best_key) = best {
                    if score >= self.config.fuzzy_threshold {
                        if let Some(c_group) = checklist_index.get_mut(&best_key) {
                            let unconsumed: Vec<usize> = c_group
                                .iter()
                                .enumerate()
                                .filter(|(_, c)| !c.consumed)
                                .map(|(ci, _)| ci)
                                .collect();

                            if let Some(&ci) = unconsumed.first() {
                                s_entry.consumed = true;
                                c_group[ci].consumed = true;

                                // Last entry under this key: retire it so later
                                // iterations cannot re-target it.
                                if unconsumed.len() == 1 {
                                    candidate_keys.retain(|k| k != &best_key);
                                }

                                let record = PairedRecord::from_pair(
                                    s_entry,
                                    &c_group[ci],
                                    MatchType::Fuzzy,
                                    score,
                                );
                                if record.versions_equal {
                                    matches.push(record);
                                } else {
                                    mismatches.push(record);
                                }
                            }
                        }
                    }
                }

                if !s_entry.consumed {
                    only_in_vcs.push(VcsOrphan::from_entry(s_entry));
                }
            }
        }

        // Residuals on the checklist side.
        for c_group in checklist_index.values() {
            for c_entry in c_group.iter().filter(|c| !c.consumed) {
                only_in_checklist.push(ChecklistOrphan::from_entry(c_entry));
            }
        }

        debug!(
            matches = matches.len(),
            mismatches = mismatches.len(),
            only_in_vcs = only_in_vcs.len(),
            only_in_checklist = only_in_checklist.len(),
            "reconciliation complete"
        );
        ReconcileReport::new(matches, mismatches, only_in_vcs, only_in_checklist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vcs(filename: &str, revision: &str) -> RawRecord {
        RawRecord::from([
            ("File", json!(filename)),
            ("Last Changed Revision", json!(revision)),
        ])
    }

    fn checklist(filename: &str, version: &str) -> RawRecord {
        RawRecord::from([
            ("filename", json!(filename)),
            ("version_closed", json!(version)),
        ])
    }

    #[test]
    fn test_exact_match_end_to_end() {
        let report = Reconciler::new().reconcile(
            &[vcs("alpha.csv", "20100")],
            &[checklist("alpha.csv", "20100")],
        );
        assert_eq!(report.summary.matches, 1);
        assert_eq!(report.summary.mismatches, 0);
        assert_eq!(report.summary.only_in_vcs, 0);
        assert_eq!(report.summary.only_in_checklist, 0);

        let m = &report.matches[0];
        assert_eq!(m.match_type, MatchType::Exact);
        assert!((m.score - 1.0).abs() < 1e-12);
        assert!(m.versions_equal);
    }

    #[test]
    fn test_version_disagreement_is_a_mismatch() {
        let report = Reconciler::new().reconcile(
            &[vcs("alpha.csv", "20100")],
            &[checklist("alpha.csv", "v20101")],
        );
        assert_eq!(report.summary.matches, 0);
        assert_eq!(report.summary.mismatches, 1);
        assert_eq!(report.mismatches[0].vcs_revision_int, Some(20100));
        assert_eq!(report.mismatches[0].checklist_version_int, Some(20101));
    }

    #[test]
    fn test_collision_group_prefers_case_insensitive_name() {
        // All four files normalize to the same key. The checklist group is in
        // reverse order, so pairing by group position would cross-pair the
        // versions; the original-name rule must win first.
        let report = Reconciler::new().reconcile(
            &[vcs("A-1.stp", "5"), vcs("A_1.stp", "6")],
            &[checklist("a_1.stp", "6"), checklist("a-1.stp", "5")],
        );
        assert_eq!(report.summary.matches, 2);
        assert_eq!(report.summary.mismatches, 0);

        let by_name: Vec<(&str, &str)> = report
            .matches
            .iter()
            .map(|m| (m.filename.as_str(), m.matched_checklist_filename.as_str()))
            .collect();
        assert!(by_name.contains(&("A-1.stp", "a-1.stp")));
        assert!(by_name.contains(&("A_1.stp", "a_1.stp")));
    }

    #[test]
    fn test_collision_group_one_to_one_residual_pairs() {
        // Different original spellings, same key, one entry per side: the
        // group collapses to a 1:1 residual and pairs.
        let report = Reconciler::new()
            .reconcile(&[vcs("a-b.stp", "3")], &[checklist("a_b.stp", "3")]);
        assert_eq!(report.summary.matches, 1);
        assert_eq!(report.matches[0].match_type, MatchType::Exact);
    }

    #[test]
    fn test_ambiguous_group_falls_through_to_fuzzy() {
        // Two unconsumed entries per side with no exact-name partner: pass 1
        // leaves all four, pass 2 then pairs them by key similarity (1.0).
        let report = Reconciler::new().reconcile(
            &[vcs("a-b.stp", "1"), vcs("a_b.stp", "2")],
            &[checklist("a.b.stp", "1"), checklist("a+b.stp", "2")],
        );
        assert_eq!(report.summary.matches, 2);
        assert!(report
            .matches
            .iter()
            .all(|m| m.match_type == MatchType::Fuzzy));
        // Greedy first-served: encounter order on both sides.
        assert_eq!(report.matches[0].filename, "a-b.stp");
        assert_eq!(report.matches[0].matched_checklist_filename, "a.b.stp");
        assert_eq!(report.matches[1].filename, "a_b.stp");
        assert_eq!(report.matches[1].matched_checklist_filename, "a+b.stp");
    }

    #[test]
    fn test_fuzzy_threshold_boundary() {
        // The keys share a 17-char block across 20+20 chars: 2*17/40 = 0.85,
        // exactly at the default threshold, which is inclusive.
        let report = Reconciler::new().reconcile(
            &[vcs("abcdefghijklmnopqxxx", "1")],
            &[checklist("abcdefghijklmnopqyyy", "1")],
        );
        assert_eq!(report.summary.matches, 1);
        let m = &report.matches[0];
        assert_eq!(m.match_type, MatchType::Fuzzy);
        assert!((m.score - 0.85).abs() < 1e-12);

        // One shared char fewer: 2*16/40 = 0.8, rejected.
        let report = Reconciler::new().reconcile(
            &[vcs("abcdefghijklmnopxxxx", "1")],
            &[checklist("abcdefghijklmnopyyyy", "1")],
        );
        assert_eq!(report.summary.matches, 0);
        assert_eq!(report.summary.only_in_vcs, 1);
        assert_eq!(report.summary.only_in_checklist, 1);
    }

    #[test]
    fn test_fuzzy_candidate_key_retired_when_exhausted() {
        // Two VCS entries both closest to the same single-entry checklist
        // key: the first consumes it, the second must not re-target it.
        let report = Reconciler::new().reconcile(
            &[vcs("revision-notes.txt", "1"), vcs("revision_notes.txt", "2")],
            &[checklist("revision notes.txt", "1")],
        );
        assert_eq!(report.summary.matches + report.summary.mismatches, 1);
        assert_eq!(report.summary.only_in_vcs, 1);
        assert_eq!(report.only_in_vcs[0].filename, "revision_notes.txt");
    }

    #[test]
    fn test_ignored_extension_never_surfaces() {
        let report = Reconciler::new().reconcile(
            &[vcs("build.mcr", "44")],
            &[checklist("build.mcr", "44")],
        );
        assert_eq!(report.summary.matches, 0);
        assert_eq!(report.summary.only_in_vcs, 0);
        // The checklist side keeps its record as an orphan.
        assert_eq!(report.summary.only_in_checklist, 1);
    }

    #[test]
    fn test_empty_inputs() {
        let report = Reconciler::new().reconcile(&[], &[]);
        assert_eq!(report.summary.matches, 0);
        assert_eq!(report.summary.mismatches, 0);
        assert_eq!(report.summary.only_in_vcs, 0);
        assert_eq!(report.summary.only_in_checklist, 0);
    }

    #[test]
    fn test_absent_versions_never_match() {
        let report = Reconciler::new().reconcile(
            &[RawRecord::from([("File", json!("a.csv"))])],
            &[RawRecord::from([("filename", json!("a.csv"))])],
        );
        assert_eq!(report.summary.matches, 0);
        assert_eq!(report.summary.mismatches, 1);
        assert!(!report.mismatches[0].versions_equal);
    }

    #[test]
    fn test_conflict_flag_passthrough() {
        let mut record = checklist("a.csv", "7");
        record.insert("inter_sheet_conflict", json!(true));
        record.insert("conflict_comment", json!("kept max of 6 and 7"));

        let report = Reconciler::new().reconcile(&[vcs("a.csv", "7")], &[record]);
        assert_eq!(report.summary.matches, 1);
        let m = &report.matches[0];
        assert!(m.inter_sheet_conflict);
        assert_eq!(m.conflict_comment.as_deref(), Some("kept max of 6 and 7"));
    }

    #[test]
    fn test_consumed_state_does_not_leak_between_calls() {
        let engine = Reconciler::new();
        let vcs_records = [vcs("alpha.csv", "1")];
        let checklist_records = [checklist("alpha.csv", "1")];

        let first = engine.reconcile(&vcs_records, &checklist_records);
        let second = engine.reconcile(&vcs_records, &checklist_records);
        assert_eq!(first.summary.matches, 1);
        assert_eq!(second.summary.matches, 1);
    }
}
