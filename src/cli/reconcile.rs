use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::record::RawRecord;
use crate::matching::report::{PairedRecord, ReconcileReport};
use crate::matching::resolver::{ReconcileConfig, Reconciler, DEFAULT_FUZZY_THRESHOLD};
use crate::parsing;
use crate::parsing::ParseError;

#[derive(Args)]
pub struct ReconcileArgs {
    /// Version-control export (CSV, TSV, or JSON)
    #[arg(required = true)]
    pub vcs: PathBuf,

    /// Review-checklist export (CSV, TSV, or JSON)
    #[arg(required = true)]
    pub checklist: PathBuf,

    /// Similarity floor for accepting a fuzzy match (0 to 1)
    #[arg(long, default_value_t = DEFAULT_FUZZY_THRESHOLD)]
    pub fuzzy_threshold: f64,

    /// Extra version-control extension to ignore (e.g. `.bak`); repeatable
    #[arg(long = "ignore-ext", value_name = "EXT")]
    pub ignore_ext: Vec<String>,

    /// Replace the built-in ignored-extension set instead of extending it
    #[arg(long, requires = "ignore_ext")]
    pub no_default_ignores: bool,
}

pub fn run(args: ReconcileArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.fuzzy_threshold) {
        anyhow::bail!(
            "--fuzzy-threshold must be within [0, 1], got {}",
            args.fuzzy_threshold
        );
    }

    let vcs_records = parse_input(&args.vcs)?;
    let checklist_records = parse_input(&args.checklist)?;

    if verbose {
        eprintln!(
            "Version-control input: {} records from {}",
            vcs_records.len(),
            args.vcs.display()
        );
        eprintln!(
            "Checklist input: {} records from {}",
            checklist_records.len(),
            args.checklist.display()
        );
    }

    let mut ignored_extensions = if args.no_default_ignores {
        Vec::new()
    } else {
        ReconcileConfig::default().ignored_extensions
    };
    ignored_extensions.extend(args.ignore_ext.iter().cloned());

    let engine = Reconciler::with_config(ReconcileConfig {
        fuzzy_threshold: args.fuzzy_threshold,
        ignored_extensions,
    });
    let report = engine.reconcile(&vcs_records, &checklist_records);

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn parse_input(path: &Path) -> anyhow::Result<Vec<RawRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let records = match ext.as_deref() {
        Some("json") => parsing::json::parse_json_file(path)?,
        Some("tsv") => parsing::csv::parse_csv_file(path, b'\t')?,
        Some("csv") | None => parsing::csv::parse_csv_file(path, b',')?,
        Some(other) => return Err(ParseError::UnsupportedFormat(other.to_string()).into()),
    };
    Ok(records)
}

fn or_placeholder(s: &str) -> &str {
    if s.is_empty() {
        "?"
    } else {
        s
    }
}

fn print_text_report(report: &ReconcileReport) {
    println!("Reconciliation Results");
    println!("{}", "=".repeat(60));

    println!("\nSummary:");
    println!("  Matches:            {}", report.summary.matches);
    println!("  Version mismatches: {}", report.summary.mismatches);
    println!("  Only in VCS:        {}", report.summary.only_in_vcs);
    println!("  Only in checklist:  {}", report.summary.only_in_checklist);

    if !report.mismatches.is_empty() {
        println!("\nVersion mismatches:");
        for record in &report.mismatches {
            println!("  {}", describe_pair(record));
        }
    }

    if !report.only_in_vcs.is_empty() {
        println!("\nOnly in version control:");
        for orphan in &report.only_in_vcs {
            println!(
                "  {} (r{} by {})",
                orphan.filename,
                or_placeholder(&orphan.revision_raw),
                orphan.last_changed_author.as_deref().unwrap_or("-")
            );
        }
    }

    if !report.only_in_checklist.is_empty() {
        println!("\nOnly in checklist:");
        for orphan in &report.only_in_checklist {
            println!(
                "  {} (reviewed at {})",
                orphan.filename,
                or_placeholder(&orphan.version_raw)
            );
        }
    }

    if !report.matches.is_empty() {
        println!("\nMatches:");
        for record in &report.matches {
            println!("  {}", describe_pair(record));
        }
    }
}

fn describe_pair(record: &PairedRecord) -> String {
    let mut line = format!(
        "{} -> {} (vcs {} vs checklist {}, {} {:.2})",
        record.filename,
        record.matched_checklist_filename,
        or_placeholder(&record.vcs_revision_raw),
        or_placeholder(&record.checklist_version_raw),
        record.match_type,
        record.score
    );
    if record.inter_sheet_conflict {
        line.push_str(" [upstream conflict]");
    }
    line
}

fn print_tsv_report(report: &ReconcileReport) {
    println!(
        "bucket\tfilename\tmatched_filename\tvcs_revision\tchecklist_version\tmatch_type\tscore"
    );
    for (bucket, records) in [("match", &report.matches), ("mismatch", &report.mismatches)] {
        for r in records {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{:.4}",
                bucket,
                r.filename,
                r.matched_checklist_filename,
                r.vcs_revision_raw,
                r.checklist_version_raw,
                r.match_type,
                r.score
            );
        }
    }
    for r in &report.only_in_vcs {
        println!("only_in_vcs\t{}\t\t{}\t\t\t", r.filename, r.revision_raw);
    }
    for r in &report.only_in_checklist {
        println!(
            "only_in_checklist\t{}\t\t\t{}\t\t",
            r.filename, r.version_raw
        );
    }
}
