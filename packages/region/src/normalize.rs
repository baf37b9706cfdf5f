//! Region label normalization.
//!
//! Provides a deterministic normalization pipeline applied symmetrically
//! to the catalog and to query labels. This ensures that "ǁKaras",
//! "//Karas", and "Karas Region" all produce the same normalized form.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching every character that does not contribute to region
/// matching (anything outside lowercase ASCII letters and digits).
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Normalizes a region label for matching.
///
/// The pipeline:
/// 1. Lowercase
/// 2. Strip everything outside `[a-z0-9]` (spaces, punctuation, the ǁ
///    glyph, diacritic carriers that don't lowercase into ASCII)
/// 3. Strip a trailing `"region"` suffix
///
/// The bare label `"region"` therefore normalizes to the empty string,
/// which never matches anything.
#[must_use]
pub fn normalize_label(input: &str) -> String {
    let lower = input.to_lowercase();
    let stripped = NON_ALNUM_RE.replace_all(&lower, "");
    stripped
        .strip_suffix("region")
        .unwrap_or(&stripped)
        .to_string()
}
