//! Notification lifecycle status and approval decisions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use bakery_core::AppError;

/// Lifecycle status of a notification.
///
/// `NoLeida` is the initial state. Non-approval notifications terminate
/// at `Leida`; approval-requiring notifications terminate at `Aprobada`
/// or `Rechazada`. Expiry is not a stored status: expired rows are
/// removed by the cleanup operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_estado", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationEstado {
    /// Not yet viewed; for approval-requiring records, pending decision.
    NoLeida,
    /// Viewed. Terminal for informational notifications.
    Leida,
    /// Approved by an administrator. Terminal.
    Aprobada,
    /// Rejected by an administrator. Terminal.
    Rechazada,
}

impl NotificationEstado {
    /// Return the estado as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoLeida => "no_leida",
            Self::Leida => "leida",
            Self::Aprobada => "aprobada",
            Self::Rechazada => "rechazada",
        }
    }

    /// Whether a decision was already recorded.
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Aprobada | Self::Rechazada)
    }
}

impl fmt::Display for NotificationEstado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An administrator's decision on an approval-requiring notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The request was approved.
    Aprobada,
    /// The request was rejected.
    Rechazada,
}

impl Decision {
    /// The terminal estado this decision maps to.
    pub fn estado(&self) -> NotificationEstado {
        match self {
            Self::Aprobada => NotificationEstado::Aprobada,
            Self::Rechazada => NotificationEstado::Rechazada,
        }
    }

    /// Return the decision as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aprobada => "aprobada",
            Self::Rechazada => "rechazada",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Decision {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aprobada" => Ok(Self::Aprobada),
            "rechazada" => Ok(Self::Rechazada),
            _ => Err(AppError::validation(format!(
                "Invalid action: '{s}'. Expected one of: aprobada, rechazada"
            ))),
        }
    }
}
