//! CLI smoke tests exercising the compiled binary end to end.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_fixture(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("create temp file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

const VCS_CSV: &str = "\
File,Last Changed Revision,Last Changed Author,Last Changed Date
alpha.csv,20100,mmeyer,2026-05-12 09:14:02
stale.stp,20101,tkranz,2026-05-13 10:02:44
vcs_only.trf,20102,mmeyer,2026-05-13 11:30:00
";

const CHECKLIST_JSON: &str = r#"{
  "count": 3,
  "data": [
    {"filename": "alpha.csv", "version_closed": "20100"},
    {"filename": "stale.stp", "version_closed": "v20099"},
    {"filename": "checklist_only.stp", "version_closed": "7"}
  ]
}"#;

#[test]
fn reconcile_text_output() {
    let vcs = write_fixture(".csv", VCS_CSV);
    let checklist = write_fixture(".json", CHECKLIST_JSON);

    Command::cargo_bin("review-recon")
        .unwrap()
        .args(["reconcile"])
        .arg(vcs.path())
        .arg(checklist.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches:            1"))
        .stdout(predicate::str::contains("Version mismatches: 1"))
        .stdout(predicate::str::contains("Only in VCS:        1"))
        .stdout(predicate::str::contains("Only in checklist:  1"))
        .stdout(predicate::str::contains("stale.stp"));
}

#[test]
fn reconcile_json_output_is_machine_readable() {
    let vcs = write_fixture(".csv", VCS_CSV);
    let checklist = write_fixture(".json", CHECKLIST_JSON);

    let output = Command::cargo_bin("review-recon")
        .unwrap()
        .args(["reconcile", "--format", "json"])
        .arg(vcs.path())
        .arg(checklist.path())
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(report["summary"]["matches"], 1);
    assert_eq!(report["summary"]["mismatches"], 1);
    assert_eq!(report["matches"][0]["filename"], "alpha.csv");
    assert_eq!(report["mismatches"][0]["vcs_revision_int"], 20101);
    assert_eq!(report["mismatches"][0]["checklist_version_int"], 20099);
}

#[test]
fn reconcile_rejects_out_of_range_threshold() {
    let vcs = write_fixture(".csv", VCS_CSV);
    let checklist = write_fixture(".json", CHECKLIST_JSON);

    Command::cargo_bin("review-recon")
        .unwrap()
        .args(["reconcile", "--fuzzy-threshold", "1.5"])
        .arg(vcs.path())
        .arg(checklist.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("fuzzy-threshold"));
}

#[test]
fn reconcile_rejects_unknown_extension() {
    let vcs = write_fixture(".xlsx", "not a spreadsheet");
    let checklist = write_fixture(".json", CHECKLIST_JSON);

    Command::cargo_bin("review-recon")
        .unwrap()
        .args(["reconcile"])
        .arg(vcs.path())
        .arg(checklist.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn inspect_reports_normalized_keys() {
    let vcs = write_fixture(
        ".csv",
        "File,Last Changed Revision\nReport_Final.stp,v20157\nbuild.mcr,1\n",
    );

    Command::cargo_bin("review-recon")
        .unwrap()
        .args(["inspect", "--role", "vcs", "--format", "tsv"])
        .arg(vcs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Report_Final.stp\treport final stp\tv20157\t20157\tok",
        ))
        .stdout(predicate::str::contains("build.mcr\tbuild mcr\t1\t1\tignored"));
}
