//! Role-based access guards.

use bakery_core::error::AppError;
use bakery_service::context::RequestContext;

/// Rejects callers that are not administrators.
///
/// Called at the top of admin-only handlers, before any store access.
pub fn require_admin(ctx: &RequestContext) -> Result<(), AppError> {
    if ctx.is_admin() {
        Ok(())
    } else {
        Err(AppError::authorization(
            "Administrator role required for this action",
        ))
    }
}
