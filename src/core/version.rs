use serde::{Deserialize, Serialize};

use crate::utils::normalize::{extract_int_from_version, normalize_version_string};

/// A version value parsed from a raw field: the trimmed string form plus the
/// integer coerced from its first digit run, when one exists.
///
/// Sources disagree on how they write versions (`v20157`, `20157.0`, plain
/// `20157`), so equality is integer-first: two values with integers compare
/// numerically, everything else falls back to trimmed-string equality. An
/// empty value never equals anything, including another empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionValue {
    /// Trimmed raw form, empty when the field was absent
    pub raw: String,

    /// First contiguous digit run, when present
    pub as_int: Option<u64>,
}

impl VersionValue {
    /// Parse a raw version string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: normalize_version_string(raw),
            as_int: extract_int_from_version(raw),
        }
    }

    /// Parse an optional field value; absence yields the empty value.
    #[must_use]
    pub fn from_field(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    /// True when the value carries no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Version equality: integer equality when both sides carry an integer,
    /// otherwise trimmed-string equality. False whenever either side is empty.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self.as_int, other.as_int) {
            (Some(a), Some(b)) => a == b,
            _ => !self.raw.is_empty() && !other.raw.is_empty() && self.raw == other.raw,
        }
    }
}

impl std::fmt::Display for VersionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.raw.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", self.raw)
        }
    }
}
