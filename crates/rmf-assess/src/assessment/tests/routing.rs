use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::router;
use crate::assessment::service::AssessmentService;

#[tokio::test]
async fn submit_route_scores_payloads() {
    let (service, _) = build_service();
    let app = router_with_service(service);

    let response = app
        .oneshot(
            axum::http::Request::post("/api/assessment/submit")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission(vec![answer("q1", 5), answer("q2", 5)]))
                        .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("id").is_some());
    assert_eq!(
        payload
            .get("overall_score")
            .and_then(serde_json::Value::as_f64),
        Some(100.0)
    );
    assert_eq!(
        payload
            .get("overall_maturity")
            .and_then(serde_json::Value::as_str),
        Some("Optimizing")
    );
    assert!(
        payload.get("answers").is_none(),
        "raw answers must not leak into the response"
    );
}

#[tokio::test]
async fn submit_handler_rejects_invalid_scores() {
    let (service, _) = build_service();

    let response = router::submit_handler::<MemoryRepository>(
        State(service),
        axum::Json(submission(vec![answer("q1", 9)])),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_handler_maps_repository_failures_to_internal_errors() {
    let service = Arc::new(AssessmentService::new(
        Arc::new(UnavailableRepository),
        Arc::new(mini_catalog()),
        Arc::new(mini_actions()),
    ));

    let response = router::submit_handler::<UnavailableRepository>(
        State(service),
        axum::Json(submission(vec![answer("q1", 3)])),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn fetch_handler_round_trips_stored_assessments() {
    let (service, _) = build_service();

    let record = service
        .submit(submission(vec![answer("q1", 2), answer("q2", 2)]))
        .expect("submission succeeds");

    let response = router::fetch_handler::<MemoryRepository>(
        State(service),
        axum::extract::Path(record.id.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("id").and_then(|id| id.as_str()),
        Some(record.id.0.as_str())
    );
    assert!(payload.get("priority_actions").is_some());
}

#[tokio::test]
async fn fetch_handler_returns_not_found_for_unknown_ids() {
    let (service, _) = build_service();

    let response = router::fetch_handler::<MemoryRepository>(
        State(service),
        axum::extract::Path("does-not-exist".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
