#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region label matching against the compiled-in catalog.
//!
//! External data rows carry free-text region labels ("Windhoek",
//! "ǁKaras", "Khomas Region", ...). This crate resolves such a label to
//! exactly one canonical [`Region`], or to no region at all — absence is
//! an expected outcome, not an error.

pub mod normalize;

use predictive_pulse_region_models::{REGIONS, Region};

use crate::normalize::normalize_label;

/// Resolves a free-text region label to a catalog region.
///
/// Matching order, first match wins:
/// 1. normalized label equals a normalized canonical name
/// 2. normalized label equals a normalized region code
/// 3. normalized label equals a normalized alias
///
/// Each tier is scanned in registry order. Empty or blank input matches
/// nothing. Pure function of the input and the catalog.
#[must_use]
pub fn match_region(label: &str) -> Option<&'static Region> {
    let key = normalize_label(label);
    if key.is_empty() {
        return None;
    }

    REGIONS
        .iter()
        .find(|r| normalize_label(r.name) == key)
        .or_else(|| REGIONS.iter().find(|r| normalize_label(r.code) == key))
        .or_else(|| {
            REGIONS
                .iter()
                .find(|r| r.aliases.iter().any(|a| normalize_label(a) == key))
        })
}

/// Looks up a region by its two-letter code, case-insensitively.
#[must_use]
pub fn find_by_code(code: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.code.eq_ignore_ascii_case(code))
}
