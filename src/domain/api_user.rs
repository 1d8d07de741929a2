//! Accounts allowed to call the API.
//!
//! The password hash never leaves the persistence layer except through
//! [`ApiUserCredentials`], which is only used to verify a login.

use serde::{Deserialize, Serialize};

use crate::domain::filter::{ListFilter, is_blank};
use crate::domain::types::Role;
use crate::domain::{Entity, Patch};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

/// Stored account together with its bcrypt password hash.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiUserCredentials {
    pub user: ApiUser,
    pub password_hash: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewApiUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewApiUser {
    #[must_use]
    pub fn new(username: String, password_hash: String, role: Role) -> Self {
        Self {
            username: username.trim().to_string(),
            password_hash,
            role,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiUserPatch {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

impl Patch for ApiUserPatch {
    fn is_noop(&self) -> bool {
        self.username.is_none() && self.password_hash.is_none() && self.role.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiUserFilter {
    pub username: Option<String>,
    pub role: Option<Role>,
}

impl ListFilter for ApiUserFilter {
    fn is_empty(&self) -> bool {
        is_blank(&self.username) && self.role.is_none()
    }
}

impl Entity for ApiUser {
    const NAME: &'static str = "api user";
    const RESTRICTED: bool = true;
    type Filter = ApiUserFilter;
    type New = NewApiUser;
    type Patch = ApiUserPatch;
}
