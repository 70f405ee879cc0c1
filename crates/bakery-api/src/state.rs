//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use bakery_core::config::AppConfig;
use bakery_database::repositories::notification::NotificationRepository;
use bakery_database::repositories::user::UserRepository;
use bakery_push::PushDispatcher;
use bakery_service::notification::approval::ApprovalService;
use bakery_service::notification::composer::RequestComposer;
use bakery_service::notification::service::NotificationService;

use crate::jwt::JwtDecoder;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Notification repository.
    pub notification_repo: Arc<NotificationRepository>,
    /// User directory repository.
    pub user_repo: Arc<UserRepository>,
    /// Push fan-out dispatcher.
    pub dispatcher: Arc<PushDispatcher>,
    /// Notification service.
    pub notification_service: Arc<NotificationService>,
    /// Approval state machine.
    pub approval_service: Arc<ApprovalService>,
    /// Request composition layer.
    pub request_composer: Arc<RequestComposer>,
}
