use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::api_user::{ApiUser, ApiUserCredentials, ApiUserFilter};
use crate::domain::filter::{ListFilter, contains_pattern, non_blank};
use crate::models::api_user::{
    ApiUser as DbApiUser, ApiUserPatch as DbApiUserPatch, NewApiUser as DbNewApiUser,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ApiUserReader, DieselRepository};
use crate::schema::api_users;

fn filtered(filter: &ApiUserFilter) -> api_users::BoxedQuery<'static, Sqlite> {
    let mut query = api_users::table.into_boxed();
    if filter.is_empty() {
        return query;
    }

    if let Some(username) = non_blank(&filter.username) {
        query = query.filter(
            api_users::username
                .like(contains_pattern(username))
                .escape('\\'),
        );
    }
    if let Some(role) = filter.role {
        query = query.filter(api_users::role.eq(role.as_str()));
    }
    query
}

diesel_entity_repository! {
    entity: ApiUser,
    table: api_users,
    row: DbApiUser,
    insert: DbNewApiUser<'_>,
    patch: DbApiUserPatch<'_>,
    filtered: filtered,
}

impl ApiUserReader for DieselRepository {
    fn get_api_user_credentials(
        &self,
        username: &str,
    ) -> RepositoryResult<Option<ApiUserCredentials>> {
        let mut conn = self.conn()?;
        let user = api_users::table
            .filter(api_users::username.eq(username))
            .first::<DbApiUser>(&mut conn)
            .optional()?;

        Ok(user.map(ApiUserCredentials::try_from).transpose()?)
    }
}
