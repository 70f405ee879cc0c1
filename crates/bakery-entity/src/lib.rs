//! # bakery-entity
//!
//! Domain entity models and enums for the Dulce Horno backend.

pub mod notification;
pub mod user;

pub use notification::{
    Accion, Decision, Modulo, NewNotification, Notification, NotificationEstado, NotificationStats,
    NotificationTipo,
};
pub use user::{UserRole, Usuario};
