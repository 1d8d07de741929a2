//! Business logic shared by the HTTP handlers.
//!
//! Services are synchronous and generic over the repository traits so they
//! can be exercised against in-memory fakes.

use actix_web::error::BlockingError;
use thiserror::Error;

use crate::auth::AuthenticatedUser;
use crate::domain::Entity;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::pagination::PaginationError;
use crate::repository::errors::RepositoryError;
use crate::{ADMIN_ROLE, USER_ROLE};

pub mod auth;
pub mod records;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("authentication required")]
    Unauthorized,

    #[error("insufficient role")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("malformed request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] BlockingError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Fails with [`ServiceError::Forbidden`] unless the user holds `role`.
pub fn ensure_role(user: &AuthenticatedUser, role: &str) -> ServiceResult<()> {
    if user.has_role(role) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden)
    }
}

/// Readers need any known role; restricted entities need `Admin`.
pub fn ensure_can_read<E: Entity>(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.has_role(ADMIN_ROLE) || (!E::RESTRICTED && user.has_role(USER_ROLE)) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden)
    }
}

pub fn ensure_can_write(user: &AuthenticatedUser) -> ServiceResult<()> {
    ensure_role(user, ADMIN_ROLE)
}
