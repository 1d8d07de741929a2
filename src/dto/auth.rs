use serde::Serialize;

/// Result payload returned by [`crate::services::auth::login`].
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    /// Always `Bearer`.
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer",
            expires_in,
        }
    }
}
