use std::path::Path;

use serde_json::Value;

use crate::core::record::RawRecord;
use crate::parsing::ParseError;

/// Parse a delimited file (CSV with `b','`, TSV with `b'\t'`) into records.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or `ParseError::Csv`
/// if the content is not valid delimited text.
pub fn parse_csv_file(path: &Path, delimiter: u8) -> Result<Vec<RawRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_csv_text(&content, delimiter)
}

/// Parse delimited text into records.
///
/// The first row names the fields; each following row becomes one record.
/// Fields are trimmed, rows whose every field is empty are dropped (exports
/// commonly carry trailing blank rows), and ragged rows are tolerated.
///
/// # Errors
///
/// Returns `ParseError::Csv` if the content is not valid delimited text.
pub fn parse_csv_text(text: &str, delimiter: u8) -> Result<Vec<RawRecord>, ParseError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(::csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = RawRecord::new();
        let mut blank = true;
        for (i, field) in row.iter().enumerate() {
            let Some(name) = headers.get(i) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            if !field.is_empty() {
                blank = false;
            }
            record.insert(name, Value::String(field.to_string()));
        }
        if blank {
            continue;
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{VCS_FILENAME_ALIASES, VCS_REVISION_ALIASES};

    #[test]
    fn test_parse_csv_text() {
        let csv = "File,Last Changed Revision,Last Changed Author\n\
                   alpha.csv,20100,mmeyer\n\
                   beta.stp,20101,tkranz\n";

        let records = parse_csv_text(csv, b',').unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].field(VCS_FILENAME_ALIASES).as_deref(),
            Some("alpha.csv")
        );
        assert_eq!(
            records[1].field(VCS_REVISION_ALIASES).as_deref(),
            Some("20101")
        );
    }

    #[test]
    fn test_parse_tsv_text() {
        let tsv = "File\tRevision\nalpha.csv\t20100\n";
        let records = parse_csv_text(tsv, b'\t').unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].field(VCS_REVISION_ALIASES).as_deref(),
            Some("20100")
        );
    }

    #[test]
    fn test_blank_rows_dropped() {
        let csv = "File,Revision\nalpha.csv,1\n,\n  ,  \n";
        let records = parse_csv_text(csv, b',').unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_ragged_rows_tolerated() {
        let csv = "File,Revision,Author\nalpha.csv,1\n";
        let records = parse_csv_text(csv, b',').unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Author"), None);
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        let records = parse_csv_text("", b',').unwrap();
        assert!(records.is_empty());
    }
}
