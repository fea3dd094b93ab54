//! HTTP router and handlers.
//!
//! Two routes under `/api/`: a health check and the analysis endpoint.
//! Handlers stay thin; everything interesting happens in the engine.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::analysis::{AnalysisRequest, Engine};
use crate::api::error::ApiError;
use crate::api::types::{AnalyzeRequestBody, AnalyzeResponseBody, HealthBody};
use crate::config;

/// Build the API router around a shared engine.
pub fn api_router(engine: Arc<Engine>) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .with_state(engine);

    Router::new()
        .nest("/api", routes)
        .layer(TraceLayer::new_for_http())
        // Browser extensions and local web clients call from arbitrary
        // origins; the API carries no credentials.
        .layer(CorsLayer::permissive())
}

async fn health(State(engine): State<Arc<Engine>>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        version: config::APP_VERSION,
        diseases_loaded: engine.knowledgebase().disease_count(),
        catalog_products: engine.catalog_len(),
    })
}

async fn analyze(
    State(engine): State<Arc<Engine>>,
    Json(body): Json<AnalyzeRequestBody>,
) -> Result<Json<AnalyzeResponseBody>, ApiError> {
    if body.product.name.trim().is_empty() {
        return Err(ApiError::BadRequest("product name is required".into()));
    }

    let request_id = Uuid::new_v4();
    let request: AnalysisRequest = body.into();

    tracing::debug!(
        %request_id,
        product = %request.product.name,
        conditions = request.conditions.len(),
        "analyze request"
    );

    let report = engine.analyze(&request).await?;

    tracing::debug!(%request_id, risk_score = report.risk_score, "analyze response");
    Ok(Json(AnalyzeResponseBody::from(&report)))
}
