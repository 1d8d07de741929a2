use serde::Deserialize;
use validator::Validate;

/// Credentials posted to `/api/auth/login`.
#[derive(Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}
