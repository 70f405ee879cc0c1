//! Notification repository implementation.
//!
//! The single source of truth for workflow state. Guarded mutations
//! (`mark_read`, `update_approval_status`, `delete_for_user`) return the
//! number of rows affected; zero means "not found or not permitted",
//! deliberately without distinguishing the two.

use sqlx::PgPool;
use uuid::Uuid;

use bakery_core::error::{AppError, ErrorKind};
use bakery_core::result::AppResult;
use bakery_entity::notification::{
    Decision, NewNotification, Notification, NotificationStats,
};
use bakery_entity::user::UserRole;

/// Repository for notification CRUD and workflow-state operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new notification with estado `no_leida`.
    ///
    /// Input must already be validated; this method only persists.
    pub async fn create(&self, spec: &NewNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notificaciones \
             (titulo, mensaje, tipo, estado, usuario_destinatario_id, tipo_usuario_destinatario, \
              usuario_solicitante_id, usuario_solicitante_nombre, modulo, accion, \
              objeto_id, objeto_nombre, datos_adicionales, requiere_aprobacion, expires_at) \
             VALUES ($1, $2, $3, 'no_leida', $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING *",
        )
        .bind(&spec.titulo)
        .bind(&spec.mensaje)
        .bind(spec.tipo)
        .bind(spec.usuario_destinatario_id)
        .bind(spec.tipo_usuario_destinatario)
        .bind(spec.usuario_solicitante_id)
        .bind(&spec.usuario_solicitante_nombre)
        .bind(spec.modulo)
        .bind(spec.accion)
        .bind(spec.objeto_id)
        .bind(&spec.objeto_nombre)
        .bind(&spec.datos_adicionales)
        .bind(spec.requiere_aprobacion)
        .bind(spec.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// Fetch a notification by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notificaciones WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to fetch notification", e)
            })
    }

    /// List notifications addressed to a user or broadcast, newest first.
    pub async fn find_for_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notificaciones \
             WHERE usuario_destinatario_id = $1 OR usuario_destinatario_id IS NULL \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    /// List notifications addressed to a role (or with no role), newest first.
    ///
    /// When `user_id` is supplied, records addressed to a *different*
    /// specific user are excluded.
    pub async fn find_for_role(
        &self,
        role: UserRole,
        user_id: Option<Uuid>,
    ) -> AppResult<Vec<Notification>> {
        let query = match user_id {
            Some(uid) => sqlx::query_as::<_, Notification>(
                "SELECT * FROM notificaciones \
                 WHERE (tipo_usuario_destinatario = $1 OR tipo_usuario_destinatario IS NULL) \
                   AND (usuario_destinatario_id IS NULL OR usuario_destinatario_id = $2) \
                 ORDER BY created_at DESC",
            )
            .bind(role)
            .bind(uid),
            None => sqlx::query_as::<_, Notification>(
                "SELECT * FROM notificaciones \
                 WHERE tipo_usuario_destinatario = $1 OR tipo_usuario_destinatario IS NULL \
                 ORDER BY created_at DESC",
            )
            .bind(role),
        };

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list role notifications", e)
        })
    }

    /// List requests awaiting decision for a role, oldest first.
    ///
    /// FIFO review order: the oldest unresolved request is reviewed first.
    pub async fn find_pending_approvals(&self, role: UserRole) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notificaciones \
             WHERE requiere_aprobacion = TRUE AND estado = 'no_leida' \
               AND (tipo_usuario_destinatario = $1 OR tipo_usuario_destinatario IS NULL) \
             ORDER BY created_at ASC",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list pending approvals", e)
        })
    }

    /// Mark a notification as read on behalf of a user.
    ///
    /// Restricted to records addressed to that user or broadcast. Decided
    /// records keep their terminal estado. Returns rows affected; marking
    /// an already-read record again is a permitted no-op that still
    /// matches one row.
    pub async fn mark_read(&self, id: Uuid, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notificaciones SET estado = 'leida', updated_at = NOW() \
             WHERE id = $1 \
               AND (usuario_destinatario_id = $2 OR usuario_destinatario_id IS NULL) \
               AND estado IN ('no_leida', 'leida')",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;

        Ok(result.rows_affected())
    }

    /// Record an administrator decision on an approval-requiring notification.
    ///
    /// The predicate re-checks `estado = 'no_leida'` at write time, so a
    /// concurrent second decision matches zero rows instead of
    /// re-applying. Returns rows affected.
    pub async fn update_approval_status(
        &self,
        id: Uuid,
        decision: Decision,
        approver_id: Uuid,
        approver_name: &str,
        comment: Option<&str>,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notificaciones \
             SET estado = $2, aprobada_por_id = $3, aprobada_por_nombre = $4, \
                 fecha_aprobacion = NOW(), comentario_aprobacion = $5, updated_at = NOW() \
             WHERE id = $1 AND requiere_aprobacion = TRUE AND estado = 'no_leida'",
        )
        .bind(id)
        .bind(decision.estado())
        .bind(approver_id)
        .bind(approver_name)
        .bind(comment)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update approval status", e)
        })?;

        Ok(result.rows_affected())
    }

    /// Delete a notification addressed specifically to the given user.
    ///
    /// Broadcast and role-addressed records are not individually
    /// deletable this way. Returns rows affected.
    pub async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM notificaciones WHERE id = $1 AND usuario_destinatario_id = $2")
                .bind(id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
                })?;

        Ok(result.rows_affected())
    }

    /// Aggregate counts over the notifications visible to a caller.
    ///
    /// The pending-approval count is only computed for administrators.
    pub async fn stats(&self, user_id: Uuid, role: UserRole) -> AppResult<NotificationStats> {
        let (total, no_leidas): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE estado = 'no_leida') \
             FROM notificaciones \
             WHERE usuario_destinatario_id = $1 OR usuario_destinatario_id IS NULL",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count notifications", e))?;

        let pendientes_aprobacion = if role.is_admin() {
            let pending: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM notificaciones \
                 WHERE requiere_aprobacion = TRUE AND estado = 'no_leida' \
                   AND (tipo_usuario_destinatario = $1 OR tipo_usuario_destinatario IS NULL)",
            )
            .bind(role)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count pending approvals", e)
            })?;
            Some(pending)
        } else {
            None
        };

        Ok(NotificationStats {
            total,
            no_leidas,
            pendientes_aprobacion,
        })
    }

    /// Delete every notification whose expiry instant has passed.
    ///
    /// Rows with a NULL or future `expires_at` are untouched. Returns the
    /// number of rows deleted.
    pub async fn clean_expired(&self) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM notificaciones WHERE expires_at IS NOT NULL AND expires_at <= NOW()",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to clean expired notifications", e)
        })?;

        Ok(result.rows_affected())
    }
}
