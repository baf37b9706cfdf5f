//! Metric projection.
//!
//! Computes a single numeric value per region from a loosely-typed
//! external record, with explicit per-metric fallback chains. Missing or
//! malformed fields degrade to 0.0; nothing here can fail.

use predictive_pulse_heatmap_models::{
    ColorScaleBounds, HeatmapProjection, MetricType, ObservedRecord, ProjectedRegion, RiskLevel,
    ScalingMode,
};
use predictive_pulse_region::match_region;
use predictive_pulse_region_models::{REGIONS, Region};

/// Extracts the raw (absolute) metric value from a record.
///
/// Fallback chains per metric:
/// - growth: `growth_rate`, else `forecast`, else 0
/// - risk: `risk_score`, else the ordinal of `risk_level` (absent or
///   unrecognized labels count as low, i.e. 1)
/// - investment: `investment_volume`, else `investment`, else 0
#[must_use]
pub fn metric_value(record: &ObservedRecord, metric: MetricType) -> f64 {
    match metric {
        MetricType::Growth => record.growth_rate.or(record.forecast).unwrap_or(0.0),
        MetricType::Risk => record.risk_score.unwrap_or_else(|| {
            let label = record.risk_level.as_deref().unwrap_or("");
            f64::from(RiskLevel::from_label(label).value())
        }),
        MetricType::Investment => record
            .investment_volume
            .or(record.investment)
            .unwrap_or(0.0),
    }
}

/// Projects one region against its matched record, if any.
///
/// Per-capita scaling rescales to "per 100,000 population". A region
/// with population 0 keeps its absolute value rather than dividing by
/// zero.
#[must_use]
pub fn project_region(
    region: &'static Region,
    record: Option<&ObservedRecord>,
    metric: MetricType,
    mode: ScalingMode,
) -> ProjectedRegion {
    let Some(record) = record else {
        return ProjectedRegion {
            region,
            value: 0.0,
            has_data: false,
            record: None,
        };
    };

    let mut value = metric_value(record, metric);
    if mode == ScalingMode::PerCapita && region.population > 0 {
        value = value / f64::from(region.population) * 100_000.0;
    }

    ProjectedRegion {
        region,
        value,
        has_data: true,
        record: Some(record.clone()),
    }
}

/// Computes `{min, max, median}` over the regions that have data.
///
/// Falls back to [`ColorScaleBounds::EMPTY`] when nothing has data. The
/// median is the sorted middle element (`sorted[len / 2]`).
#[must_use]
pub fn compute_bounds(regions: &[ProjectedRegion]) -> ColorScaleBounds {
    let mut values: Vec<f64> = regions
        .iter()
        .filter(|p| p.has_data)
        .map(|p| p.value)
        .collect();
    if values.is_empty() {
        return ColorScaleBounds::EMPTY;
    }

    values.sort_by(f64::total_cmp);
    ColorScaleBounds {
        min: values[0],
        max: values[values.len() - 1],
        median: values[values.len() / 2],
    }
}

/// Runs the full projection pipeline.
///
/// Produces one [`ProjectedRegion`] per catalog region, in registry
/// order, always 14 entries. Each region is joined with the first input
/// record (input order) whose `region` label resolves to it. The whole
/// projection is recomputed from scratch on every call; the input slice
/// is never mutated.
#[must_use]
pub fn project_regions(
    records: &[ObservedRecord],
    metric: MetricType,
    mode: ScalingMode,
) -> HeatmapProjection {
    let regions: Vec<ProjectedRegion> = REGIONS
        .iter()
        .map(|region| {
            let matched = records.iter().find(|record| {
                record
                    .region
                    .as_deref()
                    .and_then(match_region)
                    .is_some_and(|m| m.code == region.code)
            });
            project_region(region, matched, metric, mode)
        })
        .collect();

    let bounds = compute_bounds(&regions);
    HeatmapProjection { regions, bounds }
}
