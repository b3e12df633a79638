use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timezone: String,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    booking_store: &'static str,
}

#[derive(Serialize)]
struct VersionResponse {
    version: String,
}

async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timezone: state.scheduler.calendar().timezone().to_string(),
    })
}

/// Probes the booking store with today's availability lookup.
async fn readiness(State(state): State<Arc<ApiState>>) -> (StatusCode, Json<ReadinessResponse>) {
    let today = state.scheduler.calendar().today();
    match state.scheduler.resolve_availability(today).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ok",
                booking_store: "reachable",
            }),
        ),
        Err(e) => {
            warn!("Readiness probe failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "degraded",
                    booking_store: "unreachable",
                }),
            )
        }
    }
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness))
        .route("/version", get(version))
}
