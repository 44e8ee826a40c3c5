use std::path::Path;

use serde_json::Value;

use crate::core::record::RawRecord;
use crate::parsing::ParseError;

/// Parse a JSON file into records.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Json`
/// if it is not valid JSON, or `ParseError::InvalidFormat` if the value does
/// not contain a record list.
pub fn parse_json_file(path: &Path) -> Result<Vec<RawRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_json_text(&content)
}

/// Parse JSON text into records.
///
/// # Errors
///
/// Returns `ParseError::Json` for invalid JSON, `ParseError::InvalidFormat`
/// for a valid value without a record list.
pub fn parse_json_text(text: &str) -> Result<Vec<RawRecord>, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    records_from_value(value)
}

/// Extract a record list from a parsed JSON value.
///
/// Accepts a bare array of record objects, or the export envelope that wraps
/// the list under a `data` or `preview` key.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if neither shape applies or a list
/// element is not an object.
pub fn records_from_value(value: Value) -> Result<Vec<RawRecord>, ParseError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match (map.remove("data"), map.remove("preview")) {
            (Some(Value::Array(items)), _) | (None, Some(Value::Array(items))) => items,
            _ => {
                return Err(ParseError::InvalidFormat(
                    "expected an array of records, or an object with a `data` or `preview` list"
                        .to_string(),
                ))
            }
        },
        _ => {
            return Err(ParseError::InvalidFormat(
                "expected an array of records at the top level".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(fields) => Ok(RawRecord(fields.into_iter().collect())),
            _ => Err(ParseError::InvalidFormat(format!(
                "record {i} is not an object"
            ))),
        })
        .collect()
}
