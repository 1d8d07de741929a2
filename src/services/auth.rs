//! Login and account bootstrap.

use std::sync::LazyLock;

use validator::Validate;

use crate::auth::{hash_password, issue_token, verify_password};
use crate::domain::api_user::{ApiUser, NewApiUser};
use crate::domain::types::Role;
use crate::dto::auth::TokenResponse;
use crate::forms::FormError;
use crate::forms::auth::LoginForm;
use crate::models::config::AdminAccount;
use crate::repository::{ApiUserReader, EntityWriter};
use crate::services::{ServiceError, ServiceResult};

const UNKNOWN_USER_PASSWORD: &str = "unknown-user";

/// Verified against when the username does not exist, so that both login
/// failures spend one bcrypt verification.
static UNKNOWN_USER_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password(UNKNOWN_USER_PASSWORD).unwrap_or_default());

/// Exchanges valid credentials for a signed bearer token.
///
/// Unknown usernames and wrong passwords are indistinguishable to the caller.
pub fn login<R>(
    repo: &R,
    form: LoginForm,
    secret: &str,
    ttl_minutes: i64,
) -> ServiceResult<TokenResponse>
where
    R: ApiUserReader + ?Sized,
{
    form.validate().map_err(FormError::from)?;

    let username = form.username.trim();
    let credentials = repo.get_api_user_credentials(username)?;
    let password_hash = credentials
        .as_ref()
        .map_or(UNKNOWN_USER_HASH.as_str(), |c| c.password_hash.as_str());
    let password_matches = verify_password(&form.password, password_hash);

    let credentials = match credentials {
        Some(credentials) if password_matches => credentials,
        Some(_) => {
            log::info!("Wrong password for user {username}");
            return Err(ServiceError::InvalidCredentials);
        }
        None => {
            log::info!("Login attempt for unknown user {username}");
            return Err(ServiceError::InvalidCredentials);
        }
    };

    let token = issue_token(&credentials.user, secret, ttl_minutes)?;
    Ok(TokenResponse::bearer(token, ttl_minutes * 60))
}

/// Creates the configured administrator unless a user with that name exists.
///
/// Returns `true` when a new account was created.
pub fn ensure_admin_account<R>(repo: &R, account: &AdminAccount) -> ServiceResult<bool>
where
    R: ApiUserReader + EntityWriter<ApiUser> + ?Sized,
{
    let username = account.username.trim();
    if repo.get_api_user_credentials(username)?.is_some() {
        return Ok(false);
    }

    let password_hash = hash_password(&account.password).map_err(FormError::from)?;
    let new_user = NewApiUser::new(username.to_string(), password_hash, Role::Admin);
    repo.create(&new_user)?;
    log::info!("Created administrator account {username}");
    Ok(true)
}
