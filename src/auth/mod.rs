use anyhow::Result;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::usecases::authentication::SessionUser;
use crate::config::config_loader;

pub const SESSION_COOKIE: &str = "session_token";

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub exp: usize,
}

/// The signed-in user attached to a request once its session cookie checks
/// out. Extracting this is the login gate.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
}

pub fn mint_session_token(secret: &str, ttl_seconds: u64, user: &SessionUser) -> Result<String> {
    let claims = SessionClaims {
        sub: user.id.to_string(),
        name: user.name.clone(),
        email: user.email.clone(),
        exp: Utc::now().timestamp() as usize + ttl_seconds as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn validate_session_token(secret: &str, token: &str) -> Result<SessionClaims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(jsonwebtoken::Algorithm::HS256);

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation)
        .map_err(|e| anyhow::anyhow!("session token validation failed: {}", e))?;

    Ok(token_data.claims)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // 1. Get the session cookie
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing session cookie".to_string(),
            ))?;

        // 2. Validate the session token
        let config = config_loader::load().map_err(|e| {
            (
                StatusCode::UNAUTHORIZED,
                format!("Failed to load config: {}", e),
            )
        })?;

        let claims = validate_session_token(&config.session.jwt_secret, &token)
            .map_err(|e| (StatusCode::UNAUTHORIZED, e.to_string()))?;

        // 3. Parse sub to Uuid
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid user ID in session".to_string(),
            )
        })?;

        // 4. Return AuthUser
        Ok(AuthUser {
            user_id,
            name: claims.name,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests;
