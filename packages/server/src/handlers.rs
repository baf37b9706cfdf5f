//! HTTP handler functions for the PredictivePulse API.

use actix_web::{HttpResponse, web};
use predictive_pulse_heatmap::{project_regions, region_color};
use predictive_pulse_heatmap_models::{
    HeatmapProjection, MetricType, ObservedRecord, ScalingMode,
};
use predictive_pulse_region_models::REGIONS;
use predictive_pulse_server_models::{
    ApiHealth, ApiHeatmapRegion, ApiHeatmapResponse, ApiRegion, DemoQueryParams, HeatmapRequest,
};

use crate::{AppState, demo};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/regions`
///
/// Returns the full region catalog in registry order.
pub async fn regions() -> HttpResponse {
    let catalog: Vec<ApiRegion> = REGIONS.iter().map(ApiRegion::from).collect();
    HttpResponse::Ok().json(catalog)
}

/// `POST /api/heatmap`
///
/// Projects the supplied records onto the region catalog and resolves
/// each region's fill color.
pub async fn heatmap(body: web::Json<HeatmapRequest>) -> HttpResponse {
    let request = body.into_inner();

    let records: Vec<ObservedRecord> = match &request.industry {
        Some(industry) => request
            .records
            .into_iter()
            .filter(|r| {
                r.industry
                    .as_deref()
                    .is_some_and(|i| i.eq_ignore_ascii_case(industry))
            })
            .collect(),
        None => request.records,
    };

    let projection = project_regions(&records, request.metric, request.mode);
    let show_no_data = request.show_no_data.unwrap_or(true);
    HttpResponse::Ok().json(to_response(&projection, show_no_data))
}

/// `GET /api/heatmap/demo`
///
/// Projects the compiled-in sample dataset. Only available when demo
/// mode is enabled in the server configuration.
pub async fn heatmap_demo(
    state: web::Data<AppState>,
    params: web::Query<DemoQueryParams>,
) -> HttpResponse {
    if !state.config.demo_mode {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": "Demo mode is disabled"
        }));
    }

    let metric = params.metric.unwrap_or(MetricType::Growth);
    let mode = params.mode.unwrap_or(ScalingMode::Absolute);
    let projection = project_regions(&demo::demo_records(), metric, mode);
    HttpResponse::Ok().json(to_response(&projection, true))
}

/// Converts a projection into the API response shape, resolving colors
/// and optionally dropping no-data regions.
fn to_response(projection: &HeatmapProjection, show_no_data: bool) -> ApiHeatmapResponse {
    let regions: Vec<ApiHeatmapRegion> = projection
        .regions
        .iter()
        .filter(|p| show_no_data || p.has_data)
        .map(|p| ApiHeatmapRegion::new(p, region_color(p, &projection.bounds)))
        .collect();

    ApiHeatmapResponse {
        regions,
        bounds: projection.bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServerConfig;
    use actix_web::{App, test};
    use predictive_pulse_heatmap_models::NO_DATA_COLOR;

    fn test_state(demo_mode: bool) -> web::Data<AppState> {
        web::Data::new(AppState {
            config: ServerConfig {
                bind_addr: "127.0.0.1".to_string(),
                port: 0,
                demo_mode,
            },
        })
    }

    #[actix_web::test]
    async fn health_reports_healthy() {
        let app = test::init_service(
            App::new().route("/api/health", web::get().to(health)),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["healthy"], true);
    }

    #[actix_web::test]
    async fn regions_returns_full_catalog() {
        let app = test::init_service(
            App::new().route("/api/regions", web::get().to(regions)),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/regions").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 14);
        assert_eq!(body[5]["code"], "KH");
        assert_eq!(body[5]["name"], "Khomas");
    }

    #[actix_web::test]
    async fn heatmap_projects_posted_records() {
        let app = test::init_service(
            App::new().route("/api/heatmap", web::post().to(heatmap)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/heatmap")
            .set_json(serde_json::json!({
                "records": [
                    {"region": "Khomas", "growth_rate": 15.5},
                    {"region": "ǁKaras", "growth_rate": 18.3}
                ],
                "metric": "growth",
                "mode": "absolute"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let regions = body["regions"].as_array().unwrap();
        assert_eq!(regions.len(), 14);

        let khomas = regions.iter().find(|r| r["code"] == "KH").unwrap();
        assert_eq!(khomas["hasData"], true);
        assert!((khomas["value"].as_f64().unwrap() - 15.5).abs() < f64::EPSILON);

        let kavango_west = regions.iter().find(|r| r["code"] == "KW").unwrap();
        assert_eq!(kavango_west["hasData"], false);
        assert_eq!(kavango_west["color"], NO_DATA_COLOR);

        assert!((body["bounds"]["min"].as_f64().unwrap() - 15.5).abs() < f64::EPSILON);
        assert!((body["bounds"]["max"].as_f64().unwrap() - 18.3).abs() < f64::EPSILON);
    }

    #[actix_web::test]
    async fn heatmap_hides_no_data_regions_on_request() {
        let app = test::init_service(
            App::new().route("/api/heatmap", web::post().to(heatmap)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/heatmap")
            .set_json(serde_json::json!({
                "records": [{"region": "Windhoek", "growth_rate": 2.0}],
                "metric": "growth",
                "mode": "absolute",
                "showNoData": false
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let regions = body["regions"].as_array().unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0]["code"], "KH");
    }

    #[actix_web::test]
    async fn heatmap_filters_by_industry() {
        let app = test::init_service(
            App::new().route("/api/heatmap", web::post().to(heatmap)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/heatmap")
            .set_json(serde_json::json!({
                "records": [
                    {"region": "Khomas", "industry": "housing", "growth_rate": 1.0},
                    {"region": "Erongo", "industry": "mining", "growth_rate": 2.0}
                ],
                "metric": "growth",
                "mode": "absolute",
                "industry": "mining",
                "showNoData": false
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let regions = body["regions"].as_array().unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0]["code"], "ER");
    }

    #[actix_web::test]
    async fn demo_endpoint_requires_demo_mode() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(false))
                .route("/api/heatmap/demo", web::get().to(heatmap_demo)),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/heatmap/demo").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn demo_endpoint_projects_sample_dataset() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(true))
                .route("/api/heatmap/demo", web::get().to(heatmap_demo)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/heatmap/demo?metric=risk&mode=absolute")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let regions = body["regions"].as_array().unwrap();
        assert_eq!(regions.len(), 14);
        assert!(regions.iter().any(|r| r["hasData"] == true));
    }
}
