#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the PredictivePulse server.
//!
//! These types are serialized to JSON (camelCase) for the REST API. They
//! are separate from the core projection types to allow independent
//! evolution of the API contract.

use predictive_pulse_heatmap_models::{
    ColorScaleBounds, MetricType, ObservedRecord, ProjectedRegion, ScalingMode,
};
use predictive_pulse_region_models::Region;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// A catalog region as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegion {
    /// Two-letter region code.
    pub code: &'static str,
    /// Canonical display name.
    pub name: &'static str,
    /// Alternate labels that resolve to this region.
    pub aliases: &'static [&'static str],
    /// Population from the 2023 census.
    pub population: u32,
    /// Land area in square kilometres.
    pub area_km2: u32,
}

impl From<&'static Region> for ApiRegion {
    fn from(region: &'static Region) -> Self {
        Self {
            code: region.code,
            name: region.name,
            aliases: region.aliases,
            population: region.population,
            area_km2: region.area_km2,
        }
    }
}

/// Request body for the heatmap projection endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapRequest {
    /// External data rows to project.
    #[serde(default)]
    pub records: Vec<ObservedRecord>,
    /// Which metric to display.
    pub metric: MetricType,
    /// Absolute or per-capita scaling.
    pub mode: ScalingMode,
    /// When false, regions without data are dropped from the response.
    /// Defaults to true.
    pub show_no_data: Option<bool>,
    /// When present, only records of this industry are projected.
    pub industry: Option<String>,
}

/// One projected region as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHeatmapRegion {
    /// Two-letter region code.
    pub code: &'static str,
    /// Canonical display name.
    pub name: &'static str,
    /// Population from the 2023 census.
    pub population: u32,
    /// Computed metric value.
    pub value: f64,
    /// Whether a record matched this region.
    pub has_data: bool,
    /// Resolved fill color (scale bucket or the neutral no-data fill).
    pub color: &'static str,
}

impl ApiHeatmapRegion {
    /// Builds the API view of a projected region with its resolved color.
    #[must_use]
    pub fn new(projected: &ProjectedRegion, color: &'static str) -> Self {
        Self {
            code: projected.region.code,
            name: projected.region.name,
            population: projected.region.population,
            value: projected.value,
            has_data: projected.has_data,
            color,
        }
    }
}

/// Response body for the heatmap projection endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHeatmapResponse {
    /// Projected regions, registry order (no-data regions possibly
    /// filtered out).
    pub regions: Vec<ApiHeatmapRegion>,
    /// Dataset-wide bounds over the values with data.
    pub bounds: ColorScaleBounds,
}

/// Query parameters for the demo heatmap endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoQueryParams {
    /// Metric to display; defaults to growth.
    pub metric: Option<MetricType>,
    /// Scaling mode; defaults to absolute.
    pub mode: Option<ScalingMode>,
}
