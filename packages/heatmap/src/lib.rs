#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region heatmap projection pipeline.
//!
//! Joins external data rows against the region catalog, computes one
//! metric value per region (absolute or per-capita), and buckets values
//! onto a 5-color scale. Everything here is pure and synchronous: the
//! whole pipeline is recomputed from scratch whenever the input rows,
//! the metric, or the scaling mode change, and the inputs are never
//! mutated.

pub mod color;
pub mod project;

pub use color::{heat_level, region_color};
pub use project::{compute_bounds, metric_value, project_region, project_regions};
