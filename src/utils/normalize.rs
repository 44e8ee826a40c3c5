//! Filename and version normalization.
//!
//! The two input sources name the same artifacts with inconsistent casing and
//! punctuation (`Report_final.stp`, `report-final.stp`, `report final.STP`),
//! so matching runs on a canonical key rather than the raw filename. The
//! extension survives normalization as a discriminator: `report.stp` and
//! `report.trf` must never collide.

/// Extensions excluded from the version-control side by default.
///
/// Version-control exports routinely list generated scratch files (macro
/// caches, workspace state) that never appear on a review checklist.
pub const IGNORED_EXTENSIONS: &[&str] = &[
    ".mcr", ".mcorder", ".mccache", ".ewo", ".skc", ".vsw", ".html",
];

/// Normalize a filename into its canonical matching key.
///
/// Lower-cases, splits off the extension at the last `.`, collapses every run
/// of characters outside `[0-9a-z]` in the stem to a single space, trims, and
/// re-appends a non-empty extension after one space. Pure and deterministic:
/// the key depends on the filename string alone.
///
/// # Examples
///
/// ```
/// use review_recon::utils::normalize::normalize_filename;
///
/// assert_eq!(normalize_filename("Report_final.STP"), "report final stp");
/// assert_eq!(normalize_filename("report-final.stp"), "report final stp");
/// assert_eq!(normalize_filename("report.trf"), "report trf");
/// assert_eq!(normalize_filename(""), "");
/// ```
#[must_use]
pub fn normalize_filename(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return String::new();
    }

    let (stem, extension) = match lowered.rsplit_once('.') {
        Some((stem, ext)) => (stem, ext),
        None => (lowered.as_str(), ""),
    };

    let mut key = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for c in stem.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !key.is_empty() {
                key.push(' ');
            }
            pending_space = false;
            key.push(c);
        } else {
            pending_space = true;
        }
    }

    // The extension is kept verbatim so same-stem variants stay distinct.
    if !extension.is_empty() {
        key.push(' ');
        key.push_str(extension);
    }

    key
}

/// Extract an integer version from the first contiguous digit run anywhere in
/// the string (`v20157`, `20157.0`, `Build_0212` all yield an integer).
///
/// Returns `None` when the string carries no digits, or when the digit run
/// overflows `u64`.
#[must_use]
pub fn extract_int_from_version(raw: &str) -> Option<u64> {
    let s = raw.trim();
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits = &s[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Normalize a raw version value to its trimmed string form.
#[must_use]
pub fn normalize_version_string(raw: &str) -> String {
    raw.trim().to_string()
}

/// Case-insensitive suffix match against an ignored-extension set.
///
/// An empty filename is always ignored: it cannot participate in any
/// comparison.
#[must_use]
pub fn is_ignored_filename(name: &str, ignored_extensions: &[String]) -> bool {
    if name.is_empty() {
        return true;
    }
    let lowered = name.to_lowercase();
    ignored_extensions
        .iter()
        .any(|ext| lowered.ends_with(&ext.to_lowercase()))
}
