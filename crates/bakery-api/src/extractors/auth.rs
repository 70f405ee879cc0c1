//! Bearer-token authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use bakery_core::error::AppError;
use bakery_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracts the authenticated caller from the `Authorization` header.
///
/// Rejects the request with 401 when the header is missing, malformed,
/// or carries an invalid token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Expected a Bearer token"))?;

        let claims = state.jwt_decoder.decode(token)?;

        Ok(Self(RequestContext::new(
            claims.sub,
            claims.nombre,
            claims.rol,
        )))
    }
}
