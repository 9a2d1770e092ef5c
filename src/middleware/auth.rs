use axum::{extract::FromRequestParts, http::header};
use uuid::Uuid;

use crate::{error::AppError, services::auth_service::validate_token, state::AppState};

/// Packer identity taken from a validated bearer token. Handlers never read
/// the packer id from the request body.
#[derive(Debug, Clone)]
pub struct AuthPacker {
    pub packer_id: Uuid,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthPacker {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("Authorization token not provided".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid Authorization header".into()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Authorization token not provided".into()))?;

        let claims = validate_token(&state.config.jwt_secret, token)?;

        let packer_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Forbidden("Invalid token".into()))?;

        Ok(AuthPacker {
            packer_id,
            username: claims.username,
        })
    }
}
