//! User directory queries.
//!
//! User management lives in an external service; this repository only
//! reads the directory to resolve identities and push addresses.

use sqlx::PgPool;
use uuid::Uuid;

use bakery_core::error::{AppError, ErrorKind};
use bakery_core::result::AppResult;
use bakery_entity::user::{UserRole, Usuario};

/// Read-only repository over the user directory.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a user by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Usuario>> {
        sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch user", e))
    }

    /// The registered push address of one active user, if any.
    pub async fn push_token_for_user(&self, user_id: Uuid) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT push_token FROM usuarios \
             WHERE id = $1 AND activo = TRUE AND push_token IS NOT NULL",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch push token", e))
    }

    /// Push addresses of every active user with the given role.
    pub async fn push_tokens_for_role(&self, role: UserRole) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT push_token FROM usuarios \
             WHERE rol = $1 AND activo = TRUE AND push_token IS NOT NULL",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch role tokens", e))
    }

    /// Push addresses of every active user.
    pub async fn all_push_tokens(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT push_token FROM usuarios WHERE activo = TRUE AND push_token IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch push tokens", e))
    }
}
