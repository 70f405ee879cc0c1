//! Request composition layer.
//!
//! Factory methods resource controllers use to file well-formed change
//! requests and custom module notifications. Each factory persists the
//! record and returns its id; pushing to administrators is the caller's
//! separate, non-transactional step.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakery_core::result::AppResult;
use bakery_database::repositories::notification::NotificationRepository;
use bakery_entity::notification::{Accion, Modulo, NewNotification, NotificationTipo};
use bakery_entity::user::UserRole;

use crate::context::RequestContext;

/// Days until an unresolved change request expires.
const REQUEST_TTL_DAYS: i64 = 7;

/// Structured diff carried by an update request.
///
/// This is the only place `datos_adicionales` has a schema; the store
/// itself treats the payload as opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CambioPropuesto {
    /// Field values before the proposed change.
    pub antes: serde_json::Value,
    /// Proposed field values.
    pub despues: serde_json::Value,
    /// Why the change is requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
}

/// Builds and persists the standard change-request shapes.
#[derive(Debug, Clone)]
pub struct RequestComposer {
    notif_repo: Arc<NotificationRepository>,
}

impl RequestComposer {
    /// Creates a new request composer.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// File a deletion request for an object; returns the record id.
    pub async fn solicitar_eliminacion(
        &self,
        ctx: &RequestContext,
        modulo: Modulo,
        objeto_id: Uuid,
        objeto_nombre: &str,
        motivo: Option<String>,
    ) -> AppResult<Uuid> {
        let spec = build_delete_request(ctx, modulo, objeto_id, objeto_nombre, motivo);
        spec.validate()?;
        let stored = self.notif_repo.create(&spec).await?;
        Ok(stored.id)
    }

    /// File an update request carrying a structured diff; returns the record id.
    pub async fn solicitar_actualizacion(
        &self,
        ctx: &RequestContext,
        modulo: Modulo,
        objeto_id: Uuid,
        objeto_nombre: &str,
        cambio: CambioPropuesto,
    ) -> AppResult<Uuid> {
        let spec = build_update_request(ctx, modulo, objeto_id, objeto_nombre, cambio)?;
        spec.validate()?;
        let stored = self.notif_repo.create(&spec).await?;
        Ok(stored.id)
    }

    /// File a free-form module notification for administrators; returns the record id.
    pub async fn notificacion_personalizada(
        &self,
        ctx: &RequestContext,
        titulo: &str,
        mensaje: &str,
        modulo: Modulo,
        datos_extra: Option<serde_json::Value>,
    ) -> AppResult<Uuid> {
        let spec = build_custom_notification(ctx, titulo, mensaje, modulo, datos_extra);
        spec.validate()?;
        let stored = self.notif_repo.create(&spec).await?;
        Ok(stored.id)
    }
}

fn request_base(ctx: &RequestContext, modulo: Modulo, accion: Accion) -> NewNotification {
    NewNotification {
        titulo: String::new(),
        mensaje: String::new(),
        tipo: NotificationTipo::Solicitud,
        usuario_destinatario_id: None,
        tipo_usuario_destinatario: Some(UserRole::Administrador),
        usuario_solicitante_id: ctx.user_id,
        usuario_solicitante_nombre: ctx.nombre.clone(),
        modulo,
        accion,
        objeto_id: None,
        objeto_nombre: None,
        datos_adicionales: None,
        requiere_aprobacion: true,
        expires_at: Some(Utc::now() + Duration::days(REQUEST_TTL_DAYS)),
    }
}

/// Shape of a deletion request.
pub fn build_delete_request(
    ctx: &RequestContext,
    modulo: Modulo,
    objeto_id: Uuid,
    objeto_nombre: &str,
    motivo: Option<String>,
) -> NewNotification {
    let mut spec = request_base(ctx, modulo, Accion::SolicitarEliminar);
    spec.titulo = format!("Solicitud para eliminar {}", singular(modulo));
    spec.mensaje = format!("{} solicita eliminar \"{objeto_nombre}\"", ctx.nombre);
    spec.objeto_id = Some(objeto_id);
    spec.objeto_nombre = Some(objeto_nombre.to_string());
    spec.datos_adicionales = motivo.map(|m| serde_json::json!({ "motivo": m }));
    spec
}

/// Shape of an update request; serializes the proposed diff.
pub fn build_update_request(
    ctx: &RequestContext,
    modulo: Modulo,
    objeto_id: Uuid,
    objeto_nombre: &str,
    cambio: CambioPropuesto,
) -> AppResult<NewNotification> {
    let mut spec = request_base(ctx, modulo, Accion::SolicitarActualizar);
    spec.titulo = format!("Solicitud para actualizar {}", singular(modulo));
    spec.mensaje = format!("{} solicita actualizar \"{objeto_nombre}\"", ctx.nombre);
    spec.objeto_id = Some(objeto_id);
    spec.objeto_nombre = Some(objeto_nombre.to_string());
    spec.datos_adicionales = Some(serde_json::to_value(&cambio)?);
    Ok(spec)
}

/// Shape of a free-form module notification.
pub fn build_custom_notification(
    ctx: &RequestContext,
    titulo: &str,
    mensaje: &str,
    modulo: Modulo,
    datos_extra: Option<serde_json::Value>,
) -> NewNotification {
    let mut spec = request_base(ctx, modulo, Accion::Personalizada);
    spec.titulo = titulo.to_string();
    spec.mensaje = mensaje.to_string();
    spec.datos_adicionales = datos_extra;
    spec
}

fn singular(modulo: Modulo) -> &'static str {
    match modulo {
        Modulo::Ingredientes => "ingrediente",
        Modulo::Postres => "postre",
        Modulo::Recetas => "receta",
        Modulo::Usuarios => "usuario",
        Modulo::General => "registro",
    }
}
