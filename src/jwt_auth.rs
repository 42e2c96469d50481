use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::IntoResponse,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, model::User, AppState};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

pub fn issue_token(user: &User, secret: &str, expires_in_days: i64) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let iat = now.timestamp() as usize;
    let exp = chrono::Duration::try_days(expires_in_days)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| {
            AppError::Internal(format!("Token lifetime of {} days is out of range", expires_in_days))
        })?
        .timestamp() as usize;
    let claims = TokenClaims {
        sub: user.id,
        username: user.username.to_owned(),
        iat,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AppError::Internal(format!("Error while signing token: {}", e)))
}

/// Checks signature and expiry. `None` means the caller sent no token.
pub fn verify(token: Option<&str>, secret: &str) -> Result<TokenClaims, AppError> {
    let token = token.ok_or(AppError::Unauthorized)?;
    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "rejected token");
        AppError::Forbidden
    })
}

/// Pulls the credential out of an `Authorization: Bearer <token>` value.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

pub async fn auth<B>(
    State(data): State<Arc<AppState>>,
    mut req: Request<B>,
    next: Next<B>,
) -> Result<impl IntoResponse, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token);

    let claims = verify(token, &data.config.jwt_secret)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
