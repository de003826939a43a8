use crate::cli::ServeArgs;
use crate::infra::{AppState, CatalogState, InMemoryAssessmentRepository};
use crate::routes::with_assessment_routes;
use axum::http::HeaderValue;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rmf_assess::assessment::AssessmentService;
use rmf_assess::config::{AppConfig, ConfigError};
use rmf_assess::error::AppError;
use rmf_assess::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalogs = CatalogState::load();
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let assessment_service = Arc::new(AssessmentService::new(
        repository,
        catalogs.questions.clone(),
        catalogs.actions.clone(),
    ));

    let cors = cors_layer(&config)?;

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(Extension(catalogs))
        .layer(cors)
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "maturity assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.server.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let mut origins = Vec::with_capacity(config.server.cors_origins.len());
    for origin in &config.server.cors_origins {
        let value = origin.parse::<HeaderValue>().map_err(|_| {
            AppError::Config(ConfigError::InvalidCorsOrigin {
                origin: origin.clone(),
            })
        })?;
        origins.push(value);
    }

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
