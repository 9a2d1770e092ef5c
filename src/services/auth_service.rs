use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_hash::rand_core::OsRng;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    dto::auth::{Claims, LoginRequest, LoginResponse},
    entity::users::{Column as UserCol, Entity as Users},
    error::{AppError, AppResult},
    models::Packer,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { username, password } = payload;
    let packer: Packer = Users::find()
        .filter(UserCol::Username.eq(username.as_str()))
        .one(&state.orm)
        .await?
        .map(Packer::from)
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if !verify_credential(&password, &packer.password_hash)? {
        tracing::debug!(username = %packer.username, "rejected credential");
        return Err(AppError::Unauthorized("Authentication failed".into()));
    }

    let token = issue_token(
        &state.config.jwt_secret,
        packer.id,
        &packer.username,
        state.config.token_ttl_minutes,
    )?;
    tracing::info!(packer_id = %packer.id, "packer logged in");

    Ok(ApiResponse::success(
        "Logged in",
        LoginResponse {
            token: format!("Bearer {}", token),
        },
        Some(Meta::empty()),
    ))
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

/// Checks a submitted password against a stored argon2 hash.
pub fn verify_credential(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

pub fn issue_token(
    secret: &str,
    packer_id: Uuid,
    username: &str,
    ttl_minutes: i64,
) -> AppResult<String> {
    let lifetime = TimeDelta::try_minutes(ttl_minutes)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Invalid token lifetime")))?;
    let expiration = Utc::now()
        .checked_add_signed(lifetime)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: packer_id.to_string(),
        username: username.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

/// Decodes a session token. Bad signatures and expired tokens are `Forbidden`.
pub fn validate_token(secret: &str, token: &str) -> AppResult<Claims> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Forbidden("Invalid token".into()))?;
    Ok(decoded.claims)
}
