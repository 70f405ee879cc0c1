//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// JWT validation configuration.
///
/// Token *issuance* belongs to the external user-management service;
/// this backend only validates bearer tokens against the shared secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the user-management service.
    pub jwt_secret: String,
    /// Clock-skew leeway applied during `exp` validation, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_leeway() -> u64 {
    30
}
