//! Concrete repository implementations.

pub mod notification;
pub mod user;

pub use notification::NotificationRepository;
pub use user::UserRepository;
