//! Notification listing, read-marking, deletion, and cleanup.

use std::sync::Arc;

use uuid::Uuid;

use bakery_core::error::AppError;
use bakery_core::result::AppResult;
use bakery_database::repositories::notification::NotificationRepository;
use bakery_entity::notification::{NewNotification, Notification, NotificationStats};
use bakery_entity::user::UserRole;

use crate::context::RequestContext;

/// Manages notifications on behalf of the authenticated caller.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Validates and persists a notification, returning the stored record.
    pub async fn create(&self, spec: &NewNotification) -> AppResult<Notification> {
        spec.validate()?;
        self.notif_repo.create(spec).await
    }

    /// Fetches one notification by id.
    pub async fn get(&self, id: Uuid) -> AppResult<Notification> {
        self.notif_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))
    }

    /// Everything visible to the caller: direct, role-addressed, and
    /// broadcast records, deduplicated by id, newest first.
    pub async fn list_for_caller(&self, ctx: &RequestContext) -> AppResult<Vec<Notification>> {
        let mut combined = self.notif_repo.find_for_user(ctx.user_id).await?;
        let by_role = self
            .notif_repo
            .find_for_role(ctx.rol, Some(ctx.user_id))
            .await?;

        for notif in by_role {
            if !combined.iter().any(|n| n.id == notif.id) {
                combined.push(notif);
            }
        }
        combined.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(combined)
    }

    /// Requests awaiting an administrator decision, oldest first.
    pub async fn pending_approvals(&self) -> AppResult<Vec<Notification>> {
        self.notif_repo
            .find_pending_approvals(UserRole::Administrador)
            .await
    }

    /// Aggregate counts for the caller.
    pub async fn stats(&self, ctx: &RequestContext) -> AppResult<NotificationStats> {
        self.notif_repo.stats(ctx.user_id, ctx.rol).await
    }

    /// Marks a notification as read.
    ///
    /// Zero rows affected means the record does not exist *or* is not
    /// visible to the caller; the two are deliberately indistinguishable.
    pub async fn mark_read(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let affected = self.notif_repo.mark_read(id, ctx.user_id).await?;
        if affected == 0 {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Deletes a notification addressed specifically to the caller.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let affected = self.notif_repo.delete_for_user(id, ctx.user_id).await?;
        if affected == 0 {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Removes every notification past its expiry instant.
    pub async fn clean_expired(&self) -> AppResult<u64> {
        let removed = self.notif_repo.clean_expired().await?;
        if removed > 0 {
            tracing::info!(removed, "Expired notifications cleaned");
        }
        Ok(removed)
    }
}
