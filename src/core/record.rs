use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Recognized names for the filename field of a version-control record,
/// in priority order.
pub const VCS_FILENAME_ALIASES: &[&str] = &["File", "file", "Filename", "filename"];

/// Recognized names for the revision field of a version-control record.
pub const VCS_REVISION_ALIASES: &[&str] = &[
    "Last Changed Revision",
    "last changed revision",
    "WC Revision",
    "revision",
    "Revision",
];

/// Recognized names for the author field of a version-control record.
pub const VCS_AUTHOR_ALIASES: &[&str] = &["Last Changed Author", "last changed author"];

/// Recognized names for the date field of a version-control record.
pub const VCS_DATE_ALIASES: &[&str] = &["Last Changed Date", "last changed date"];

/// Recognized names for the filename field of a checklist record.
pub const CHECKLIST_FILENAME_ALIASES: &[&str] = &["filename", "Filename", "File"];

/// Recognized names for the closed-version field of a checklist record.
pub const CHECKLIST_VERSION_ALIASES: &[&str] = &["version_closed", "Version", "version"];

/// A loosely-typed input record from either source: an unordered mapping of
/// field name to scalar value.
///
/// Upstream producers disagree on field naming, so fields are read through
/// ordered alias lists ([`RawRecord::field`]) rather than by a single fixed
/// key. Numbers and booleans are coerced to their string forms so a revision
/// exported as `20157` or `20157.0` reads the same as `"20157"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub IndexMap<String, Value>);

impl RawRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field value, replacing any previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Resolve a field through an alias list: the first alias whose value is
    /// a scalar with non-empty trimmed text wins.
    #[must_use]
    pub fn field(&self, aliases: &[&str]) -> Option<String> {
        for alias in aliases {
            if let Some(text) = self.get(alias).and_then(value_text) {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// Read a field as a boolean flag.
    ///
    /// JSON booleans are taken as-is; the strings `true`/`1` (any case) and
    /// non-zero numbers also count, so flags survive a round-trip through CSV.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        match self.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => {
                let s = s.trim();
                s.eq_ignore_ascii_case("true") || s == "1"
            }
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            _ => false,
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Value); N]> for RawRecord {
    fn from(fields: [(K, Value); N]) -> Self {
        Self(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// String form of a scalar value; `None` for null, arrays, and objects.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
