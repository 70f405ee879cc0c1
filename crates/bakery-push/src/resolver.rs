//! Audience address resolution.

use async_trait::async_trait;

use bakery_core::result::AppResult;

use crate::audience::Audience;

/// Resolves an audience into the current push addresses of its members.
///
/// Backed by the external user directory; the dispatcher only sees the
/// resulting address list.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Current push addresses for the audience, unfiltered.
    async fn resolve(&self, audience: &Audience) -> AppResult<Vec<String>>;
}
