//! Color-scale bucketing.
//!
//! Maps a projected value onto one of five fixed heat colors given the
//! dataset bounds. Regions without data get a neutral fill instead of a
//! scale color.

use predictive_pulse_heatmap_models::{
    ColorScaleBounds, HeatLevel, NO_DATA_COLOR, ProjectedRegion,
};

/// Buckets a value into one of the five heat levels.
///
/// The value is scaled into `[0, 1]` against the bounds; a degenerate
/// dataset (`min == max`) lands every value in the midpoint bucket.
/// Values outside the bounds still fall into the first or last bucket,
/// so this is total.
#[must_use]
pub fn heat_level(value: f64, bounds: &ColorScaleBounds) -> HeatLevel {
    let range = bounds.max - bounds.min;
    let normalized = if range > 0.0 {
        (value - bounds.min) / range
    } else {
        0.5
    };

    if normalized < 0.2 {
        HeatLevel::Lowest
    } else if normalized < 0.4 {
        HeatLevel::Low
    } else if normalized < 0.6 {
        HeatLevel::Moderate
    } else if normalized < 0.8 {
        HeatLevel::High
    } else {
        HeatLevel::Highest
    }
}

/// Resolves the fill color for a projected region.
#[must_use]
pub fn region_color(projected: &ProjectedRegion, bounds: &ColorScaleBounds) -> &'static str {
    if projected.has_data {
        heat_level(projected.value, bounds).hex()
    } else {
        NO_DATA_COLOR
    }
}
