//! Response payloads.

use serde::Serialize;
use uuid::Uuid;

use bakery_push::DeliverySummary;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of the expired-notification sweep.
#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    pub removed: u64,
}

/// Result of filing a custom notification.
#[derive(Debug, Serialize)]
pub struct CustomNotificationResponse {
    /// Id of the stored notification.
    pub id: Uuid,
    /// Outcome of the best-effort push to administrators.
    pub delivery: DeliverySummary,
}

/// Shallow liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Liveness response including dependency checks.
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}
