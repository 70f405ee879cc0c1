//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakery_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the bearer token and passed into service methods so
/// that every operation knows *who* is acting and with *which* role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's id.
    pub user_id: Uuid,
    /// Display name from the token claims.
    pub nombre: String,
    /// The user's role at the time the JWT was issued.
    pub rol: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, nombre: String, rol: UserRole) -> Self {
        Self {
            user_id,
            nombre,
            rol,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.rol.is_admin()
    }
}
