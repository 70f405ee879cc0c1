//! Delivery audiences.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakery_entity::user::UserRole;

/// The set of recipients a dispatch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Audience {
    /// One specific user.
    User(Uuid),
    /// Every active user with a role.
    Role(UserRole),
    /// Every active user.
    Everyone,
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(id) => write!(f, "user:{id}"),
            Self::Role(role) => write!(f, "role:{role}"),
            Self::Everyone => write!(f, "everyone"),
        }
    }
}
