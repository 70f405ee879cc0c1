//! JWT validation.
//!
//! Token issuance belongs to the external user-management service; this
//! backend only validates bearer tokens against the shared HMAC secret.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakery_core::config::auth::AuthConfig;
use bakery_core::error::AppError;
use bakery_entity::user::UserRole;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: Uuid,
    /// Display name.
    pub nombre: String,
    /// Role at issuance time.
    pub rol: UserRole,
    /// Expiry (seconds since epoch).
    pub exp: usize,
}

/// Decodes and validates access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl JwtDecoder {
    /// Build a decoder from configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decode an access token into its claims.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::authentication(format!("Invalid access token: {e}")))
    }
}
