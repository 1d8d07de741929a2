//! Persistence contracts and their Diesel implementation.
//!
//! Every entity is read through [`EntityReader`] and written through
//! [`EntityWriter`]. Listing is split into [`EntityReader::fetch_page`] and
//! [`EntityReader::count`], which run as two separate reads without a shared
//! snapshot, so the count may drift from the page under concurrent writes.

use diesel::prelude::*;

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::Entity;
use crate::domain::api_user::ApiUserCredentials;
use crate::domain::types::RecordId;
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryResult;

/// Implements [`EntityReader`] and [`EntityWriter`] for [`DieselRepository`].
///
/// `filtered` names a function in the calling module that builds the boxed
/// `WHERE` query for the entity filter.
macro_rules! diesel_entity_repository {
    (
        entity: $entity:ty,
        table: $table:ident,
        row: $row:ty,
        insert: $insert:ty,
        patch: $patch:ty,
        filtered: $filtered:ident $(,)?
    ) => {
        impl $crate::repository::EntityReader<$entity> for $crate::repository::DieselRepository {
            fn get(
                &self,
                id: $crate::domain::types::RecordId,
            ) -> $crate::repository::errors::RepositoryResult<Option<$entity>> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.conn()?;
                let row = $table::table
                    .find(id.get())
                    .first::<$row>(&mut conn)
                    .optional()?;

                row.map(|row| {
                    <$entity>::try_from(row).map_err($crate::repository::errors::RepositoryError::from)
                })
                .transpose()
            }

            fn fetch_page(
                &self,
                page: &$crate::pagination::PageRequest,
                filter: &<$entity as $crate::domain::Entity>::Filter,
            ) -> $crate::repository::errors::RepositoryResult<Vec<$entity>> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.conn()?;
                let rows = $filtered(filter)
                    .order($table::id.asc())
                    .limit(page.limit())
                    .offset(page.offset())
                    .load::<$row>(&mut conn)?;

                rows.into_iter()
                    .map(|row| {
                        <$entity>::try_from(row)
                            .map_err($crate::repository::errors::RepositoryError::from)
                    })
                    .collect()
            }

            fn count(
                &self,
                filter: &<$entity as $crate::domain::Entity>::Filter,
            ) -> $crate::repository::errors::RepositoryResult<usize> {
                use diesel::prelude::*;

                let mut conn = self.conn()?;
                let total: i64 = $filtered(filter).count().get_result(&mut conn)?;

                Ok(usize::try_from(total).unwrap_or_default())
            }
        }

        impl $crate::repository::EntityWriter<$entity> for $crate::repository::DieselRepository {
            fn create(
                &self,
                new: &<$entity as $crate::domain::Entity>::New,
            ) -> $crate::repository::errors::RepositoryResult<$entity> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.conn()?;
                let insertable: $insert = new.into();
                let row = diesel::insert_into($table::table)
                    .values(&insertable)
                    .get_result::<$row>(&mut conn)?;

                <$entity>::try_from(row).map_err($crate::repository::errors::RepositoryError::from)
            }

            fn update(
                &self,
                id: $crate::domain::types::RecordId,
                replacement: &<$entity as $crate::domain::Entity>::New,
            ) -> $crate::repository::errors::RepositoryResult<$entity> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.conn()?;
                let changes: $insert = replacement.into();
                let row = diesel::update($table::table.find(id.get()))
                    .set(&changes)
                    .get_result::<$row>(&mut conn)?;

                <$entity>::try_from(row).map_err($crate::repository::errors::RepositoryError::from)
            }

            fn patch(
                &self,
                id: $crate::domain::types::RecordId,
                patch: &<$entity as $crate::domain::Entity>::Patch,
            ) -> $crate::repository::errors::RepositoryResult<$entity> {
                use diesel::prelude::*;
                use $crate::domain::Patch as _;
                use $crate::schema::$table;

                if patch.is_noop() {
                    return <Self as $crate::repository::EntityReader<$entity>>::get(self, id)?
                        .ok_or($crate::repository::errors::RepositoryError::NotFound);
                }

                let mut conn = self.conn()?;
                let changes: $patch = patch.into();
                let row = diesel::update($table::table.find(id.get()))
                    .set(&changes)
                    .get_result::<$row>(&mut conn)?;

                <$entity>::try_from(row).map_err($crate::repository::errors::RepositoryError::from)
            }

            fn delete(
                &self,
                id: $crate::domain::types::RecordId,
            ) -> $crate::repository::errors::RepositoryResult<()> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.conn()?;
                let deleted = diesel::delete($table::table.find(id.get())).execute(&mut conn)?;
                if deleted == 0 {
                    return Err($crate::repository::errors::RepositoryError::NotFound);
                }
                Ok(())
            }
        }
    };
}

pub mod airline;
pub mod api_user;
pub mod destination;
pub mod errors;
pub mod flight;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod passenger;
pub mod pilot;
pub mod plane_ticket;
pub mod travel_class;

/// Read access to one entity type.
pub trait EntityReader<E: Entity> {
    fn get(&self, id: RecordId) -> RepositoryResult<Option<E>>;
    /// Loads at most `page.page_size()` records in primary key order,
    /// skipping the records of earlier pages.
    fn fetch_page(&self, page: &PageRequest, filter: &E::Filter) -> RepositoryResult<Vec<E>>;
    /// Counts every record matching `filter`, ignoring the page window.
    fn count(&self, filter: &E::Filter) -> RepositoryResult<usize>;
}

/// Write access to one entity type.
pub trait EntityWriter<E: Entity> {
    fn create(&self, new: &E::New) -> RepositoryResult<E>;
    /// Replaces every writable column of an existing record.
    fn update(&self, id: RecordId, replacement: &E::New) -> RepositoryResult<E>;
    /// Applies the set fields of `patch`; a no-op patch returns the record as is.
    fn patch(&self, id: RecordId, patch: &E::Patch) -> RepositoryResult<E>;
    fn delete(&self, id: RecordId) -> RepositoryResult<()>;
}

/// Lookup of stored credentials during login.
pub trait ApiUserReader {
    fn get_api_user_credentials(
        &self,
        username: &str,
    ) -> RepositoryResult<Option<ApiUserCredentials>>;
}

/// Diesel-backed repository shared by every handler.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }

    /// Verifies that a pooled connection can run a trivial query.
    pub fn ping(&self) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::sql_query("SELECT 1").execute(&mut conn)?;
        Ok(())
    }
}
