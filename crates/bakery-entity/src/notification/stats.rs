//! Aggregate notification counts for a caller.

use serde::{Deserialize, Serialize};

/// Counts over the notifications visible to one caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationStats {
    /// Total visible notifications.
    pub total: i64,
    /// Visible notifications still in estado `no_leida`.
    pub no_leidas: i64,
    /// Requests awaiting decision. Only computed for administrators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pendientes_aprobacion: Option<i64>,
}
