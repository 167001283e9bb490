//! Health check handlers
//!
//! Endpoints for liveness, readiness and aggregate status probes.

use axum::{extract::State, http::StatusCode, Json};
use steward_core::ServiceStatus;
use steward_service::dto::{HealthResponse, ReadinessResponse, SystemHealthResponse};
use steward_service::services::HealthService;

use crate::state::AppState;

/// Data store health check
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let service = HealthService::new(state.service_context());
    let database = service.probe_database().await;

    // A slow but reachable database still counts as healthy here;
    // latency shows up in /system/health instead.
    if database == ServiceStatus::Offline {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::unhealthy()),
        )
    } else {
        (StatusCode::OK, Json(HealthResponse::healthy()))
    }
}

/// Readiness check with dependency detail
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let service = HealthService::new(state.service_context());
    let database_healthy = service.probe_database().await != ServiceStatus::Offline;

    let status = if database_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadinessResponse::ready(database_healthy)))
}

/// Liveness probe
///
/// GET /health/live
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::alive())
}

/// Aggregate system health across every probe
///
/// GET /system/health
pub async fn system_health(
    State(state): State<AppState>,
) -> (StatusCode, Json<SystemHealthResponse>) {
    let service = HealthService::new(state.service_context());
    let health = service.system_health().await;

    let status = StatusCode::from_u16(health.overall.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(SystemHealthResponse::new(
            health.database,
            health.bot,
            health.overall,
        )),
    )
}
