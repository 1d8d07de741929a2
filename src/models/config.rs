//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::PaginationSettings;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// HMAC secret used to sign access tokens.
    pub secret: String,
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,
    #[serde(default)]
    pub pagination: PaginationSettings,
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
    /// Administrator account created at startup when it does not exist yet.
    #[serde(default)]
    pub admin: Option<AdminAccount>,
}

fn default_token_ttl_minutes() -> i64 {
    60
}

#[derive(Clone, Copy, Debug, Deserialize)]
/// Token bucket parameters applied per client IP.
pub struct RateLimitSettings {
    /// Seconds needed to replenish one request.
    pub seconds_per_request: u64,
    /// Requests allowed in a burst.
    pub burst_size: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            seconds_per_request: 1,
            burst_size: 30,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}
