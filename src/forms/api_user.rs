//! Payloads for managing API accounts.
//!
//! Plain-text passwords never leave this module: conversion into the domain
//! values replaces them with a bcrypt hash.

use serde::Deserialize;
use validator::Validate;

use crate::auth::hash_password;
use crate::domain::api_user::{ApiUser, ApiUserFilter, ApiUserPatch, NewApiUser};
use crate::forms::converters::{optional_role, parse_role};
use crate::forms::{FormError, RecordForms, trimmed, validate_non_blank};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApiUserForm {
    #[validate(length(min = 3, max = 50), custom(function = "validate_non_blank"))]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub role: String,
}

#[derive(Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApiUserPatchForm {
    #[validate(length(min = 3, max = 50), custom(function = "validate_non_blank"))]
    pub username: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUserQuery {
    pub username: Option<String>,
    pub role: Option<String>,
}

impl TryFrom<ApiUserForm> for NewApiUser {
    type Error = FormError;

    fn try_from(form: ApiUserForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let role = parse_role(&form.role)?;
        let password_hash = hash_password(&form.password)?;
        Ok(NewApiUser::new(form.username, password_hash, role))
    }
}

impl TryFrom<ApiUserPatchForm> for ApiUserPatch {
    type Error = FormError;

    fn try_from(form: ApiUserPatchForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let role = form.role.as_deref().map(parse_role).transpose()?;
        let password_hash = form
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        Ok(ApiUserPatch {
            username: trimmed(form.username),
            password_hash,
            role,
        })
    }
}

impl TryFrom<ApiUserQuery> for ApiUserFilter {
    type Error = FormError;

    fn try_from(query: ApiUserQuery) -> Result<Self, Self::Error> {
        Ok(ApiUserFilter {
            role: optional_role(&query.role)?,
            username: query.username,
        })
    }
}

impl RecordForms for ApiUser {
    type Query = ApiUserQuery;
    type Form = ApiUserForm;
    type PatchForm = ApiUserPatchForm;
}
