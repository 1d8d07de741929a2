//! Bearer token authentication.
//!
//! Access tokens are HS256 JWTs whose claims double as the
//! [`AuthenticatedUser`] extracted by handlers.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::api_user::ApiUser;
use crate::models::config::ServerConfig;
use crate::services::{ServiceError, ServiceResult};

/// bcrypt work factor for stored passwords.
pub const PASSWORD_HASH_COST: u32 = if cfg!(test) { 4 } else { bcrypt::DEFAULT_COST };

/// Claims carried by an access token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// API user id.
    pub sub: String,
    pub username: String,
    pub roles: Vec<String>,
    pub iat: usize,
    pub exp: usize,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Signs a token for `user` that expires after `ttl_minutes`.
pub fn issue_token(user: &ApiUser, secret: &str, ttl_minutes: i64) -> ServiceResult<String> {
    let now = Utc::now();
    let claims = AuthenticatedUser {
        sub: user.id.to_string(),
        username: user.username.clone(),
        roles: vec![user.role.as_str().to_string()],
        iat: now.timestamp().max(0) as usize,
        exp: (now + Duration::minutes(ttl_minutes)).timestamp().max(0) as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ServiceError::Internal(format!("failed to sign token: {e}")))
}

/// Verifies signature and expiry, returning the embedded claims.
pub fn decode_token(token: &str, secret: &str) -> ServiceResult<AuthenticatedUser> {
    decode::<AuthenticatedUser>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        log::debug!("Rejected access token: {e}");
        ServiceError::Unauthorized
    })
}

pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, PASSWORD_HASH_COST)
}

/// Malformed hashes count as a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}

fn authenticate(req: &HttpRequest) -> ServiceResult<AuthenticatedUser> {
    let config = req
        .app_data::<web::Data<ServerConfig>>()
        .ok_or_else(|| ServiceError::Internal("server configuration is not registered".into()))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(ServiceError::Unauthorized)?;

    decode_token(token, &config.secret)
}

impl FromRequest for AuthenticatedUser {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
