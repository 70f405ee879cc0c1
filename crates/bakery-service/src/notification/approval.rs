//! Approval state machine.
//!
//! Owns the lifecycle of approval-requiring notifications: pending →
//! {aprobada | rechazada}, recorded exactly once, followed by a
//! notification back to the original requester.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use bakery_core::error::AppError;
use bakery_core::result::AppResult;
use bakery_database::repositories::notification::NotificationRepository;
use bakery_entity::notification::{Decision, NewNotification, Notification, NotificationTipo};
use bakery_entity::user::{SYSTEM_USER_NAME, system_user_id};
use bakery_push::{Audience, PushDispatcher};

use crate::context::RequestContext;

/// External hook invoked after a request is approved.
///
/// Approving a request does **not** perform the underlying domain
/// mutation; the owning resource controller registers a hook to execute
/// the approved `(modulo, accion, objeto_id, datos_adicionales)`.
#[async_trait]
pub trait ApprovedRequestHook: Send + Sync {
    /// Execute the mutation the approved request described.
    async fn execute(&self, approved: &Notification) -> AppResult<()>;
}

/// Applies administrator decisions and emits the requester follow-up.
pub struct ApprovalService {
    notif_repo: Arc<NotificationRepository>,
    dispatcher: Arc<PushDispatcher>,
    on_approved: Option<Arc<dyn ApprovedRequestHook>>,
}

impl ApprovalService {
    /// Creates a new approval service.
    pub fn new(notif_repo: Arc<NotificationRepository>, dispatcher: Arc<PushDispatcher>) -> Self {
        Self {
            notif_repo,
            dispatcher,
            on_approved: None,
        }
    }

    /// Registers the hook that executes approved mutations.
    pub fn with_hook(mut self, hook: Arc<dyn ApprovedRequestHook>) -> Self {
        self.on_approved = Some(hook);
        self
    }

    /// Approve or reject a pending request.
    ///
    /// Only administrators may decide. The store update re-checks that
    /// the record still awaits a decision; zero rows affected is
    /// reported as not-found, covering "missing", "not an approval
    /// request", and "already decided" alike. On success, exactly one
    /// follow-up notification is created for the original requester and
    /// pushed to them best-effort.
    pub async fn decide(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        decision: Decision,
        comment: Option<String>,
    ) -> AppResult<Notification> {
        if !ctx.is_admin() {
            return Err(AppError::authorization(
                "Only administrators may decide requests",
            ));
        }

        let affected = self
            .notif_repo
            .update_approval_status(id, decision, ctx.user_id, &ctx.nombre, comment.as_deref())
            .await?;
        if affected == 0 {
            return Err(AppError::not_found(
                "Notification not found or not awaiting approval",
            ));
        }

        let decided = self
            .notif_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))?;

        info!(
            notification_id = %id,
            decision = %decision,
            approver = %ctx.nombre,
            "Request decided"
        );

        let follow_up = build_follow_up(&decided, decision, &ctx.nombre, comment.as_deref());
        let stored = self.notif_repo.create(&follow_up).await?;

        let summary = self
            .dispatcher
            .send_to_audience(
                &stored.titulo,
                &stored.mensaje,
                &Audience::User(decided.usuario_solicitante_id),
                serde_json::json!({
                    "notification_id": stored.id,
                    "modulo": decided.modulo,
                    "accion": decided.accion,
                    "objeto_id": decided.objeto_id,
                    "decision": decision,
                }),
            )
            .await;
        if summary.errors > 0 {
            warn!(
                requester = %decided.usuario_solicitante_id,
                sent = summary.sent,
                errors = summary.errors,
                "Follow-up push delivery incomplete"
            );
        }

        if decision == Decision::Aprobada {
            if let Some(hook) = &self.on_approved {
                if let Err(e) = hook.execute(&decided).await {
                    warn!(notification_id = %id, error = %e, "Approved-request hook failed");
                }
            }
        }

        Ok(decided)
    }
}

/// Build the follow-up notification announcing a decision to the requester.
///
/// Authored by the system user and never itself subject to approval.
pub fn build_follow_up(
    decided: &Notification,
    decision: Decision,
    approver_name: &str,
    comment: Option<&str>,
) -> NewNotification {
    let (titulo, tipo) = match decision {
        Decision::Aprobada => ("Solicitud aprobada", NotificationTipo::Aprobacion),
        Decision::Rechazada => ("Solicitud rechazada", NotificationTipo::Rechazo),
    };

    let mut mensaje = format!(
        "Tu solicitud \"{}\" fue {} por {}",
        decided.titulo, decision, approver_name
    );
    if let Some(comment) = comment {
        mensaje.push_str(&format!(": {comment}"));
    }

    NewNotification {
        titulo: titulo.to_string(),
        mensaje,
        tipo,
        usuario_destinatario_id: Some(decided.usuario_solicitante_id),
        tipo_usuario_destinatario: None,
        usuario_solicitante_id: system_user_id(),
        usuario_solicitante_nombre: SYSTEM_USER_NAME.to_string(),
        modulo: decided.modulo,
        accion: decided.accion,
        objeto_id: decided.objeto_id,
        objeto_nombre: decided.objeto_nombre.clone(),
        datos_adicionales: decided.datos_adicionales.clone(),
        requiere_aprobacion: false,
        expires_at: None,
    }
}
