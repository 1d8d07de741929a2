//! Diesel models representing API accounts.

use diesel::prelude::*;

use crate::domain::api_user::{
    ApiUser as DomainApiUser, ApiUserCredentials, ApiUserPatch as DomainApiUserPatch,
    NewApiUser as DomainNewApiUser,
};
use crate::domain::types::{Role, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::api_users)]
/// Diesel model for [`crate::domain::api_user::ApiUser`].
pub struct ApiUser {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::api_users)]
pub struct NewApiUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::api_users)]
pub struct ApiUserPatch<'a> {
    pub username: Option<&'a str>,
    pub password_hash: Option<&'a str>,
    pub role: Option<&'a str>,
}

impl TryFrom<ApiUser> for DomainApiUser {
    type Error = TypeConstraintError;

    fn try_from(user: ApiUser) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user.id,
            username: user.username,
            role: user.role.parse::<Role>()?,
        })
    }
}

impl TryFrom<ApiUser> for ApiUserCredentials {
    type Error = TypeConstraintError;

    fn try_from(mut user: ApiUser) -> Result<Self, Self::Error> {
        let password_hash = std::mem::take(&mut user.password_hash);
        Ok(Self {
            user: DomainApiUser::try_from(user)?,
            password_hash,
        })
    }
}

impl<'a> From<&'a DomainNewApiUser> for NewApiUser<'a> {
    fn from(user: &'a DomainNewApiUser) -> Self {
        Self {
            username: user.username.as_str(),
            password_hash: user.password_hash.as_str(),
            role: user.role.as_str(),
        }
    }
}

impl<'a> From<&'a DomainApiUserPatch> for ApiUserPatch<'a> {
    fn from(patch: &'a DomainApiUserPatch) -> Self {
        Self {
            username: patch.username.as_deref(),
            password_hash: patch.password_hash.as_deref(),
            role: patch.role.map(Role::as_str),
        }
    }
}
