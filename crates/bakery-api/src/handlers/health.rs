//! Health endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "dulce-horno",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /health/detailed`
///
/// Pings the database; returns 503 when it is unreachable.
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<DetailedHealthResponse>) {
    let db_ok = bakery_database::connection::ping(&state.db_pool)
        .await
        .is_ok();

    if db_ok {
        (
            StatusCode::OK,
            Json(DetailedHealthResponse {
                status: "ok",
                database: "up",
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(DetailedHealthResponse {
                status: "degraded",
                database: "down",
            }),
        )
    }
}
