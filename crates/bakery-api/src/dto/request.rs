//! Request payloads.

use serde::Deserialize;
use validator::Validate;

/// Body for `PUT /notifications/{id}/approve`.
#[derive(Debug, Deserialize)]
pub struct ApproveRequest {
    /// `"aprobada"` or `"rechazada"`.
    pub action: String,
    /// Optional comment recorded with the decision.
    pub comment: Option<String>,
}

/// Body for `POST /notifications/custom`.
///
/// String fields default to empty so that a missing field fails
/// validation with 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomNotificationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "titulo is required"))]
    pub titulo: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "mensaje is required"))]
    pub mensaje: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "modulo is required"))]
    pub modulo: String,
    /// Opaque payload stored alongside the notification.
    pub datos_extra: Option<serde_json::Value>,
}
