//! Notification intent classification.

use serde::{Deserialize, Serialize};

/// Classifies the intent of a notification.
///
/// Informational only; behavior is driven by `requiere_aprobacion` and
/// `estado`, never by the tipo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_tipo", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationTipo {
    /// Plain informational message.
    Info,
    /// A change request awaiting an administrator decision.
    Solicitud,
    /// Follow-up announcing an approved request.
    Aprobacion,
    /// Follow-up announcing a rejected request.
    Rechazo,
    /// Operational alert (low stock, expiry warnings).
    Alerta,
}

impl NotificationTipo {
    /// Return the tipo as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Solicitud => "solicitud",
            Self::Aprobacion => "aprobacion",
            Self::Rechazo => "rechazo",
            Self::Alerta => "alerta",
        }
    }
}

impl std::fmt::Display for NotificationTipo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
