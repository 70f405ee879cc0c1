//! Address resolution backed by the user directory.

use std::sync::Arc;

use async_trait::async_trait;

use bakery_core::result::AppResult;
use bakery_database::repositories::user::UserRepository;
use bakery_push::{AddressResolver, Audience};

/// Resolves audiences to push addresses via the user directory.
///
/// Returns whatever addresses are currently registered; structural
/// validation happens in the dispatcher.
#[derive(Debug, Clone)]
pub struct DirectoryAddressResolver {
    user_repo: Arc<UserRepository>,
}

impl DirectoryAddressResolver {
    /// Creates a new directory-backed resolver.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl AddressResolver for DirectoryAddressResolver {
    async fn resolve(&self, audience: &Audience) -> AppResult<Vec<String>> {
        match audience {
            Audience::User(id) => self.user_repo.push_token_for_user(*id).await,
            Audience::Role(role) => self.user_repo.push_tokens_for_role(*role).await,
            Audience::Everyone => self.user_repo.all_push_tokens().await,
        }
    }
}
