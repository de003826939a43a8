use crate::infra::{AppState, CatalogState};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use rmf_assess::assessment::{
    assessment_router, reference_levels, AssessmentRepository, AssessmentService,
};

pub(crate) fn with_assessment_routes<R>(service: Arc<AssessmentService<R>>) -> axum::Router
where
    R: AssessmentRepository + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api", axum::routing::get(api_root))
        .route(
            "/api/assessment/questions",
            axum::routing::get(questions_endpoint),
        )
        .route(
            "/api/assessment/industries",
            axum::routing::get(industries_endpoint),
        )
        .route(
            "/api/recommendations/:industry",
            axum::routing::get(recommendations_endpoint),
        )
        .route(
            "/api/maturity-levels",
            axum::routing::get(maturity_levels_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn api_root() -> Json<serde_json::Value> {
    Json(json!({ "message": "AI RMF Maturity Assessment API" }))
}

pub(crate) async fn questions_endpoint(
    Extension(catalogs): Extension<CatalogState>,
) -> Json<serde_json::Value> {
    Json(json!({
        "functions": catalogs.questions.functions(),
        "questions": catalogs.questions.questions(),
        "maturity_levels": reference_levels(),
        "total_questions": catalogs.questions.total_questions(),
    }))
}

pub(crate) async fn industries_endpoint(
    Extension(catalogs): Extension<CatalogState>,
) -> Json<serde_json::Value> {
    let industries: Vec<serde_json::Value> = catalogs
        .industries
        .iter()
        .map(|profile| {
            json!({
                "id": profile.id,
                "name": profile.name,
                "code": profile.code,
                "regulations": profile.regulations,
                "description": profile.description,
            })
        })
        .collect();

    Json(json!({ "industries": industries }))
}

pub(crate) async fn recommendations_endpoint(
    Extension(catalogs): Extension<CatalogState>,
    Path(industry): Path<String>,
) -> impl IntoResponse {
    match catalogs
        .industries
        .iter()
        .find(|profile| profile.id == industry)
    {
        Some(profile) => (StatusCode::OK, Json(json!(profile))).into_response(),
        None => {
            let payload = json!({
                "error": format!("industry '{industry}' not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn maturity_levels_endpoint() -> impl IntoResponse {
    Json(reference_levels())
}
