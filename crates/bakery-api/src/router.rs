//! Route table and middleware stack.

use std::time::Duration;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};
use http::{HeaderName, HeaderValue, Method};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use bakery_core::config::app::CorsConfig;

use crate::handlers::{health, notification};
use crate::middleware::request_logging;
use crate::state::AppState;

/// Builds the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/notifications", get(notification::list_notifications))
        .route(
            "/notifications/stats",
            get(notification::notification_stats),
        )
        .route(
            "/notifications/pending",
            get(notification::pending_approvals),
        )
        .route(
            "/notifications/custom",
            post(notification::create_custom_notification),
        )
        .route(
            "/notifications/expired",
            delete(notification::clean_expired),
        )
        .route("/notifications/{id}/read", put(notification::mark_read))
        .route(
            "/notifications/{id}/approve",
            put(notification::decide_request),
        )
        .route(
            "/notifications/{id}",
            delete(notification::delete_notification),
        );

    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api)
        .route("/health", get(health::health))
        .route("/health/detailed", get(health::health_detailed))
        .layer(from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    let headers = if config.allowed_headers.iter().any(|h| h == "*") {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(
            config
                .allowed_headers
                .iter()
                .filter_map(|h| h.parse::<HeaderName>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
