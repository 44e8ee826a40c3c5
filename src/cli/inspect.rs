use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::entry::{ChecklistEntry, VcsEntry};
use crate::core::record::RawRecord;
use crate::matching::resolver::ReconcileConfig;
use crate::parsing;
use crate::parsing::ParseError;
use crate::utils::normalize::is_ignored_filename;

/// Which source's field aliases and filtering to apply
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum InspectRole {
    Vcs,
    Checklist,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Input file (CSV, TSV, or JSON)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Which source the records come from
    #[arg(long, value_enum, default_value = "vcs")]
    pub role: InspectRole,
}

/// One parsed record as the engine would see it
#[derive(Debug, serde::Serialize)]
struct InspectedRecord {
    filename: Option<String>,
    normalized_filename: Option<String>,
    version_raw: Option<String>,
    version_int: Option<u64>,
    status: &'static str,
}

pub fn run(args: InspectArgs, format: OutputFormat) -> anyhow::Result<()> {
    let records = parse_input(&args.input)?;
    let ignored = ReconcileConfig::default().ignored_extensions;

    let inspected: Vec<InspectedRecord> = records
        .iter()
        .map(|record| inspect_record(record, args.role, &ignored))
        .collect();

    match format {
        OutputFormat::Text => {
            println!("Parsed {} records from {}", inspected.len(), args.input.display());
            println!();
            for row in &inspected {
                println!(
                    "  {:<40} {:<40} {:<12} {}",
                    row.filename.as_deref().unwrap_or("-"),
                    row.normalized_filename.as_deref().unwrap_or("-"),
                    row.version_raw.as_deref().unwrap_or("-"),
                    row.status
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&inspected)?),
        OutputFormat::Tsv => {
            println!("filename\tnormalized_filename\tversion_raw\tversion_int\tstatus");
            for row in &inspected {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    row.filename.as_deref().unwrap_or(""),
                    row.normalized_filename.as_deref().unwrap_or(""),
                    row.version_raw.as_deref().unwrap_or(""),
                    row.version_int.map(|v| v.to_string()).unwrap_or_default(),
                    row.status
                );
            }
        }
    }

    Ok(())
}

fn inspect_record(
    record: &RawRecord,
    role: InspectRole,
    ignored_extensions: &[String],
) -> InspectedRecord {
    match role {
        InspectRole::Vcs => match VcsEntry::from_record(record) {
            Some(entry) => {
                let status = if is_ignored_filename(&entry.filename, ignored_extensions) {
                    "ignored"
                } else {
                    "ok"
                };
                InspectedRecord {
                    filename: Some(entry.filename),
                    normalized_filename: Some(entry.key),
                    version_raw: Some(entry.revision.raw),
                    version_int: entry.revision.as_int,
                    status,
                }
            }
            None => skipped(),
        },
        InspectRole::Checklist => match ChecklistEntry::from_record(record) {
            Some(entry) => InspectedRecord {
                filename: Some(entry.filename),
                normalized_filename: Some(entry.key),
                version_raw: Some(entry.version.raw),
                version_int: entry.version.as_int,
                status: "ok",
            },
            None => skipped(),
        },
    }
}

fn skipped() -> InspectedRecord {
    InspectedRecord {
        filename: None,
        normalized_filename: None,
        version_raw: None,
        version_int: None,
        status: "skipped (no filename)",
    }
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
