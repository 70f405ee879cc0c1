//! HTTP middleware.

pub mod logging;
pub mod rbac;

pub use logging::request_logging;
pub use rbac::require_admin;
