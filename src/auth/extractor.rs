use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use super::jwt::JwtKeys;
use crate::{error::ApiError, state::AppState, users::repo::User};

/// Verified caller identity for protected routes.
///
/// 401 when no bearer credential is presented, 403 when one is presented but
/// rejected. The token's subject is re-checked against the users table, so
/// deleting an account revokes its outstanding tokens immediately.
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Access token required".into()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Access token required".into()))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token verification failed");
            ApiError::Forbidden("Invalid or expired token".into())
        })?;

        if !User::exists(&state.db, claims.sub).await? {
            warn!(user_id = %claims.sub, "token subject no longer exists");
            return Err(ApiError::Forbidden("Invalid or expired token".into()));
        }

        Ok(AuthUser(claims.sub))
    }
}
