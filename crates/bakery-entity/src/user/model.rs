//! User directory row model.
//!
//! User management is owned by an external service; this backend reads the
//! directory only to resolve identities and push addresses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// Display name used for notifications authored by the system itself,
/// such as approval/rejection follow-ups.
pub const SYSTEM_USER_NAME: &str = "Sistema";

/// Sentinel id for system-authored notifications.
pub fn system_user_id() -> Uuid {
    Uuid::nil()
}

/// A row of the external user directory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    /// User id.
    pub id: Uuid,
    /// Display name.
    pub nombre: String,
    /// Role.
    pub rol: UserRole,
    /// Current push address registered by the mobile client, if any.
    pub push_token: Option<String>,
    /// Inactive users are excluded from address resolution.
    pub activo: bool,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
}
