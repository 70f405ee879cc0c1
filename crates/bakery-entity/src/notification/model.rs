//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use bakery_core::AppError;

use super::contexto::{Accion, Modulo};
use super::estado::NotificationEstado;
use super::tipo::NotificationTipo;
use crate::user::UserRole;

/// A persisted notification: an informational message or a pending decision.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Surrogate key, assigned on insert.
    pub id: Uuid,
    /// Display title.
    pub titulo: String,
    /// Display body.
    pub mensaje: String,
    /// Intent classification.
    pub tipo: NotificationTipo,
    /// Lifecycle status.
    pub estado: NotificationEstado,
    /// Specific recipient user, if any.
    pub usuario_destinatario_id: Option<Uuid>,
    /// Recipient role, if any. Both addressing fields NULL means broadcast.
    pub tipo_usuario_destinatario: Option<UserRole>,
    /// The user whose action originated this notification.
    pub usuario_solicitante_id: Uuid,
    /// Requester name snapshot at creation time; never updated afterwards.
    pub usuario_solicitante_nombre: String,
    /// Domain area the notification is about.
    pub modulo: Modulo,
    /// Mutation or request the notification refers to.
    pub accion: Accion,
    /// Id of the domain object involved, if any.
    pub objeto_id: Option<Uuid>,
    /// Name of the domain object involved, if any.
    pub objeto_nombre: Option<String>,
    /// Opaque structured payload; never parsed or validated generically.
    pub datos_adicionales: Option<serde_json::Value>,
    /// Whether this record is a pending decision rather than informational.
    pub requiere_aprobacion: bool,
    /// Administrator who decided, set once.
    pub aprobada_por_id: Option<Uuid>,
    /// Name snapshot of the deciding administrator.
    pub aprobada_por_nombre: Option<String>,
    /// When the decision was recorded.
    pub fecha_aprobacion: Option<DateTime<Utc>>,
    /// Free-form comment attached to the decision.
    pub comentario_aprobacion: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Advances on every state change.
    pub updated_at: DateTime<Utc>,
    /// Past this instant the record is eligible for cleanup.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Whether the record is addressed to everyone (both addressing fields NULL).
    pub fn es_broadcast(&self) -> bool {
        self.usuario_destinatario_id.is_none() && self.tipo_usuario_destinatario.is_none()
    }

    /// Whether the record still awaits an administrator decision.
    pub fn pendiente_de_aprobacion(&self) -> bool {
        self.requiere_aprobacion && self.estado == NotificationEstado::NoLeida
    }

    /// Whether the record is past its expiry instant.
    pub fn is_expired(&self) -> bool {
        self.expires_at.map(|exp| exp <= Utc::now()).unwrap_or(false)
    }
}

/// Specification for a notification to be created.
///
/// Mirrors [`Notification`] minus the store-assigned fields (id, estado,
/// decision fields, timestamps).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    /// Display title. Required, non-empty.
    pub titulo: String,
    /// Display body. Required, non-empty.
    pub mensaje: String,
    /// Intent classification.
    pub tipo: NotificationTipo,
    /// Specific recipient user, if any.
    pub usuario_destinatario_id: Option<Uuid>,
    /// Recipient role, if any.
    pub tipo_usuario_destinatario: Option<UserRole>,
    /// Originating user.
    pub usuario_solicitante_id: Uuid,
    /// Originating user's name snapshot. Required, non-empty.
    pub usuario_solicitante_nombre: String,
    /// Domain area.
    pub modulo: Modulo,
    /// Mutation or request kind.
    pub accion: Accion,
    /// Id of the domain object involved, if any.
    pub objeto_id: Option<Uuid>,
    /// Name of the domain object involved, if any.
    pub objeto_nombre: Option<String>,
    /// Opaque structured payload.
    pub datos_adicionales: Option<serde_json::Value>,
    /// Whether the record is a pending decision.
    pub requiere_aprobacion: bool,
    /// Optional expiry instant.
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewNotification {
    /// Check required display and origin fields before any store write.
    ///
    /// Typed fields (tipo, modulo, accion, ids) are enforced by
    /// construction; only the strings can arrive empty.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.titulo.trim().is_empty() {
            missing.push("titulo");
        }
        if self.mensaje.trim().is_empty() {
            missing.push("mensaje");
        }
        if self.usuario_solicitante_nombre.trim().is_empty() {
            missing.push("usuario_solicitante_nombre");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> NewNotification {
        NewNotification {
            titulo: "Stock bajo".to_string(),
            mensaje: "Quedan 2 kg de harina".to_string(),
            tipo: NotificationTipo::Alerta,
            usuario_destinatario_id: None,
            tipo_usuario_destinatario: Some(UserRole::Administrador),
            usuario_solicitante_id: Uuid::new_v4(),
            usuario_solicitante_nombre: "Juan".to_string(),
            modulo: Modulo::Ingredientes,
            accion: Accion::Actualizar,
            objeto_id: None,
            objeto_nombre: None,
            datos_adicionales: None,
            requiere_aprobacion: false,
            expires_at: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_spec() {
        assert!(spec().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let mut s = spec();
        s.titulo = "  ".to_string();
        s.usuario_solicitante_nombre = String::new();
        let err = s.validate().unwrap_err();
        assert!(err.message.contains("titulo"));
        assert!(err.message.contains("usuario_solicitante_nombre"));
        assert!(!err.message.contains("mensaje"));
    }

    #[test]
    fn test_broadcast_requires_both_fields_null() {
        let now = Utc::now();
        let mut n = Notification {
            id: Uuid::new_v4(),
            titulo: "t".into(),
            mensaje: "m".into(),
            tipo: NotificationTipo::Info,
            estado: NotificationEstado::NoLeida,
            usuario_destinatario_id: None,
            tipo_usuario_destinatario: None,
            usuario_solicitante_id: Uuid::new_v4(),
            usuario_solicitante_nombre: "Ana".into(),
            modulo: Modulo::General,
            accion: Accion::Personalizada,
            objeto_id: None,
            objeto_nombre: None,
            datos_adicionales: None,
            requiere_aprobacion: false,
            aprobada_por_id: None,
            aprobada_por_nombre: None,
            fecha_aprobacion: None,
            comentario_aprobacion: None,
            created_at: now,
            updated_at: now,
            expires_at: None,
        };
        assert!(n.es_broadcast());
        n.tipo_usuario_destinatario = Some(UserRole::Empleado);
        assert!(!n.es_broadcast());
    }

    #[test]
    fn test_pendiente_de_aprobacion() {
        let now = Utc::now();
        let mut n = Notification {
            id: Uuid::new_v4(),
            titulo: "t".into(),
            mensaje: "m".into(),
            tipo: NotificationTipo::Solicitud,
            estado: NotificationEstado::NoLeida,
            usuario_destinatario_id: None,
            tipo_usuario_destinatario: Some(UserRole::Administrador),
            usuario_solicitante_id: Uuid::new_v4(),
            usuario_solicitante_nombre: "Ana".into(),
            modulo: Modulo::Postres,
            accion: Accion::SolicitarEliminar,
            objeto_id: Some(Uuid::new_v4()),
            objeto_nombre: Some("Tres Leches".into()),
            datos_adicionales: None,
            requiere_aprobacion: true,
            aprobada_por_id: None,
            aprobada_por_nombre: None,
            fecha_aprobacion: None,
            comentario_aprobacion: None,
            created_at: now,
            updated_at: now,
            expires_at: None,
        };
        assert!(n.pendiente_de_aprobacion());
        n.estado = NotificationEstado::Aprobada;
        assert!(!n.pendiente_de_aprobacion());
    }
}
