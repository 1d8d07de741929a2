use std::convert::Infallible;

use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A unique, foreign key, not null or check constraint rejected the write.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Label of the constraint family, `None` for non-constraint failures.
fn constraint_kind(kind: &DatabaseErrorKind, message: &str) -> Option<&'static str> {
    match kind {
        DatabaseErrorKind::UniqueViolation => Some("unique"),
        DatabaseErrorKind::ForeignKeyViolation => Some("foreign key"),
        DatabaseErrorKind::NotNullViolation => Some("not null"),
        DatabaseErrorKind::CheckViolation => Some("check"),
        // SQLite reports some constraint failures without an extended code.
        _ if message.contains("constraint failed") => Some("sqlite"),
        _ => None,
    }
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,

            DieselError::DatabaseError(kind, info) => {
                let message = info.message();
                match constraint_kind(&kind, message) {
                    Some(label) => {
                        RepositoryError::ConstraintViolation(format!("{label}: {message}"))
                    }
                    None => RepositoryError::DatabaseError(message.to_string()),
                }
            }

            DieselError::InvalidCString(_)
            | DieselError::SerializationError(_)
            | DieselError::DeserializationError(_)
            | DieselError::QueryBuilderError(_) => RepositoryError::ValidationError(err.to_string()),

            DieselError::RollbackTransaction
            | DieselError::AlreadyInTransaction
            | DieselError::NotInTransaction
            | DieselError::BrokenTransactionManager => {
                RepositoryError::DatabaseError(err.to_string())
            }

            _ => RepositoryError::Unexpected(err.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

/// A stored row that no longer satisfies a domain invariant.
impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(err.to_string())
    }
}

impl From<Infallible> for RepositoryError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}
