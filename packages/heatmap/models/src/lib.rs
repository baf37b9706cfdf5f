#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Heatmap metric and projection types.
//!
//! This crate defines the loosely-typed external data row
//! ([`ObservedRecord`]), the metric/scaling selectors, and the derived
//! view-model types produced by the projection pipeline. External rows
//! are deliberately tolerant: every field is optional, and missing or
//! malformed values degrade to "no data" rather than failing.

use predictive_pulse_region_models::Region;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Which metric the heatmap is displaying.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MetricType {
    /// Growth rate (falls back to the forecast figure).
    Growth,
    /// Risk score, numeric or mapped from a string level.
    Risk,
    /// Investment volume.
    Investment,
}

/// Whether metric values are shown as-is or per 100,000 population.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScalingMode {
    /// Raw metric values.
    Absolute,
    /// Metric values divided by region population, per 100,000 people.
    PerCapita,
}

/// Risk level ordinal, from 1 (low) to 3 (high).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    /// Low or unrecognized risk.
    Low = 1,
    /// Medium risk.
    Medium = 2,
    /// High risk.
    High = 3,
}

impl RiskLevel {
    /// Returns the numeric ordinal of this risk level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Maps a free-text risk label to a level, case-insensitively.
    ///
    /// Unrecognized labels map to [`RiskLevel::Low`]; external data is
    /// never trusted to spell levels consistently.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// One externally supplied data row.
///
/// Field names follow the upstream data source (snake_case). Every field
/// is optional; which ones are consulted depends on the selected
/// [`MetricType`] (see the projector's fallback chains).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservedRecord {
    /// Free-text region label, resolved via the region matcher.
    pub region: Option<String>,
    /// Industry the row belongs to (e.g. "housing", "mining"). Used only
    /// for filtering at the API boundary.
    pub industry: Option<String>,
    /// Observed growth rate.
    pub growth_rate: Option<f64>,
    /// Forecast growth, used when no observed rate is present.
    pub forecast: Option<f64>,
    /// Numeric risk score.
    pub risk_score: Option<f64>,
    /// String risk level ("high" / "medium" / "low").
    pub risk_level: Option<String>,
    /// Investment volume.
    pub investment_volume: Option<f64>,
    /// Alternate investment figure, used when no volume is present.
    pub investment: Option<f64>,
}

/// A region joined with its matched record and computed metric value.
///
/// `has_data` is true iff a record matched, regardless of whether the
/// computed value is zero. Recomputed from scratch on every projection;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedRegion {
    /// The catalog region.
    pub region: &'static Region,
    /// Computed metric value (0.0 when no record matched).
    pub value: f64,
    /// Whether a record matched this region.
    pub has_data: bool,
    /// The matched record, if any.
    pub record: Option<ObservedRecord>,
}

/// Dataset-wide bounds over the values of regions that have data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScaleBounds {
    /// Smallest value with data.
    pub min: f64,
    /// Largest value with data.
    pub max: f64,
    /// Sorted middle value.
    pub median: f64,
}

impl ColorScaleBounds {
    /// Bounds used when no region has data, keeping downstream division
    /// well-defined.
    pub const EMPTY: Self = Self {
        min: 0.0,
        max: 100.0,
        median: 50.0,
    };
}

/// Result of one full projection run: all 14 regions in registry order
/// plus the computed bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapProjection {
    /// One entry per catalog region, registry order.
    pub regions: Vec<ProjectedRegion>,
    /// Bounds over the `has_data` values.
    pub bounds: ColorScaleBounds,
}

/// One of the five fixed heat colors, from lowest to highest.
///
/// Exactly five discrete output colors — never interpolated — for
/// colorblind accessibility and print legibility.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HeatLevel {
    /// Bucket 1, normalized value below 0.2.
    Lowest = 1,
    /// Bucket 2, normalized value below 0.4.
    Low = 2,
    /// Bucket 3, normalized value below 0.6 (also the degenerate-dataset
    /// midpoint).
    Moderate = 3,
    /// Bucket 4, normalized value below 0.8.
    High = 4,
    /// Bucket 5, everything else.
    Highest = 5,
}

impl HeatLevel {
    /// Returns the 1-based bucket number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the fixed hex color for this bucket (viridis stops).
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Lowest => "#440154",
            Self::Low => "#3b528b",
            Self::Moderate => "#21918c",
            Self::High => "#5ec962",
            Self::Highest => "#fde725",
        }
    }
}

/// Neutral fill for regions without data; not part of the 5-bucket scale.
pub const NO_DATA_COLOR: &str = "#d1d5db";
