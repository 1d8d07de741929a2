//! Request payloads and query strings accepted by the REST routes.
//!
//! Every form converts into a domain value through `TryFrom`, running the
//! `validator` rules first. Filter query strings keep their raw text so that
//! blank parameters collapse into an empty filter.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::Entity;
use crate::domain::types::TypeConstraintError;

pub mod airline;
pub mod api_user;
pub mod auth;
pub mod converters;
pub mod destination;
pub mod flight;
pub mod passenger;
pub mod pilot;
pub mod plane_ticket;
pub mod travel_class;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid date for {field}: {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("invalid date-time for {field}: {value}")]
    InvalidDateTime { field: &'static str, value: String },

    #[error("invalid number for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),

    #[error("arrival time must be after departure time")]
    InvalidSchedule,

    #[error("failed to hash password: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

/// Binds an entity to the payloads its routes deserialize.
pub trait RecordForms: Entity {
    /// Filter query string.
    type Query: DeserializeOwned + TryInto<Self::Filter, Error = FormError> + Send + 'static;
    /// Body of `POST` and `PUT`.
    type Form: DeserializeOwned + TryInto<Self::New, Error = FormError> + Send + 'static;
    /// Body of `PATCH`.
    type PatchForm: DeserializeOwned + TryInto<Self::Patch, Error = FormError> + Send + 'static;
}

/// `page` and `pageSize` query parameters shared by every list route.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageQuery {
    /// Parsed `(page, page_size)`; range checks happen in pagination.
    pub fn window(&self) -> Result<(Option<i64>, Option<i64>), FormError> {
        Ok((
            converters::optional_page_param("page", &self.page)?,
            converters::optional_page_param("pageSize", &self.page_size)?,
        ))
    }
}

pub(crate) fn validate_non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Trimmed copy of an optional text field.
pub(crate) fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|value| value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(validate_non_blank("  \t").is_err());
        assert!(validate_non_blank(" Zagreb ").is_ok());
    }

    #[test]
    fn page_query_reads_camel_case() {
        let query: PageQuery = serde_json::from_str(r#"{"page":"2","pageSize":"25"}"#).unwrap();
        assert_eq!(query.window().unwrap(), (Some(2), Some(25)));
    }

    #[test]
    fn overflowing_page_size_saturates() {
        let query = PageQuery {
            page: None,
            page_size: Some("99999999999999999999".into()),
        };
        assert_eq!(query.window().unwrap(), (None, Some(i64::MAX)));
    }
}
