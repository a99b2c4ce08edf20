use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::response::Envelope;
use crate::state::AppState;

/// Root-level probe payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Static status reported under `/api/v1/health`.
#[derive(Serialize)]
pub struct ServiceStatus {
    pub service: String,
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match wms_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health probe failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET /api/v1/health -- static service status, no I/O.
async fn service_status(State(state): State<AppState>) -> Json<Envelope<ServiceStatus>> {
    Json(Envelope::success(
        ServiceStatus {
            service: state.config.service_name.clone(),
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        },
        "Service is healthy",
    ))
}

/// Mount the database-probing health route (root level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Mount the static status route inside the versioned API.
pub fn api_router() -> Router<AppState> {
    Router::new().route("/health", get(service_status))
}
