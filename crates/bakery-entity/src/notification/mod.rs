//! Notification domain entities.

pub mod contexto;
pub mod estado;
pub mod model;
pub mod stats;
pub mod tipo;

pub use contexto::{Accion, Modulo};
pub use estado::{Decision, NotificationEstado};
pub use model::{NewNotification, Notification};
pub use stats::NotificationStats;
pub use tipo::NotificationTipo;
