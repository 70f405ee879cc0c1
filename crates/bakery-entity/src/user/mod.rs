//! User directory entities.

pub mod model;
pub mod role;

pub use model::{SYSTEM_USER_NAME, Usuario, system_user_id};
pub use role::UserRole;
