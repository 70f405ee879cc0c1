//! Notification endpoint handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use bakery_core::error::AppError;
use bakery_entity::notification::{Decision, Modulo, Notification, NotificationStats};
use bakery_entity::user::UserRole;
use bakery_push::Audience;

use crate::dto::request::{ApproveRequest, CustomNotificationRequest};
use crate::dto::response::{
    ApiResponse, CleanupResponse, CustomNotificationResponse, MessageResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::require_admin;
use crate::state::AppState;

/// `GET /notifications`
///
/// Everything visible to the caller, newest first.
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Notification>>>, ApiError> {
    let notifications = state.notification_service.list_for_caller(&auth).await?;
    Ok(Json(ApiResponse::new(notifications)))
}

/// `GET /notifications/stats`
pub async fn notification_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<NotificationStats>>, ApiError> {
    let stats = state.notification_service.stats(&auth).await?;
    Ok(Json(ApiResponse::new(stats)))
}

/// `GET /notifications/pending`
///
/// Requests awaiting a decision, oldest first. Administrators only.
pub async fn pending_approvals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Notification>>>, ApiError> {
    require_admin(&auth)?;
    let pending = state.notification_service.pending_approvals().await?;
    Ok(Json(ApiResponse::new(pending)))
}

/// `PUT /notifications/{id}/read`
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.notification_service.mark_read(&auth, id).await?;
    Ok(Json(MessageResponse::new("Notification marked as read")))
}

/// `PUT /notifications/{id}/approve`
///
/// Applies an administrator decision and returns the decided record.
pub async fn decide_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ApproveRequest>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    let decision: Decision = body.action.parse()?;
    let decided = state
        .approval_service
        .decide(&auth, id, decision, body.comment)
        .await?;
    Ok(Json(ApiResponse::new(decided)))
}

/// `DELETE /notifications/{id}`
///
/// Deletes a notification addressed specifically to the caller.
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.notification_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Notification deleted")))
}

/// `POST /notifications/custom`
///
/// Files a free-form module notification for administrators and pushes
/// it to them best-effort. Delivery failures never fail the request.
pub async fn create_custom_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CustomNotificationRequest>,
) -> Result<Json<CustomNotificationResponse>, ApiError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let modulo: Modulo = body.modulo.parse()?;

    let id = state
        .request_composer
        .notificacion_personalizada(
            &auth,
            &body.titulo,
            &body.mensaje,
            modulo,
            body.datos_extra.clone(),
        )
        .await?;

    let delivery = state
        .dispatcher
        .send_to_audience(
            &body.titulo,
            &body.mensaje,
            &Audience::Role(UserRole::Administrador),
            serde_json::json!({
                "notification_id": id,
                "modulo": modulo,
            }),
        )
        .await;

    Ok(Json(CustomNotificationResponse { id, delivery }))
}

/// `DELETE /notifications/expired`
///
/// Sweeps expired notifications. Administrators only.
pub async fn clean_expired(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<CleanupResponse>, ApiError> {
    require_admin(&auth)?;
    let removed = state.notification_service.clean_expired().await?;
    Ok(Json(CleanupResponse { removed }))
}
