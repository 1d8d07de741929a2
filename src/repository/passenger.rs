use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::filter::{ListFilter, contains_pattern, non_blank};
use crate::domain::passenger::{Passenger, PassengerFilter};
use crate::models::passenger::{
    NewPassenger as DbNewPassenger, Passenger as DbPassenger, PassengerPatch as DbPassengerPatch,
};
use crate::schema::passengers;

fn filtered(filter: &PassengerFilter) -> passengers::BoxedQuery<'static, Sqlite> {
    let mut query = passengers::table.into_boxed();
    if filter.is_empty() {
        return query;
    }

    if let Some(first_name) = non_blank(&filter.first_name) {
        query = query.filter(
            passengers::first_name
                .like(contains_pattern(first_name))
                .escape('\\'),
        );
    }
    if let Some(last_name) = non_blank(&filter.last_name) {
        query = query.filter(
            passengers::last_name
                .like(contains_pattern(last_name))
                .escape('\\'),
        );
    }
    if let Some(uid) = non_blank(&filter.uid) {
        query = query.filter(passengers::uid.like(contains_pattern(uid)).escape('\\'));
    }
    if let Some(email) = non_blank(&filter.email) {
        query = query.filter(passengers::email.like(contains_pattern(email)).escape('\\'));
    }
    if let Some(gender) = non_blank(&filter.gender) {
        query = query.filter(passengers::gender.like(contains_pattern(gender)).escape('\\'));
    }
    query
}

diesel_entity_repository! {
    entity: Passenger,
    table: passengers,
    row: DbPassenger,
    insert: DbNewPassenger<'_>,
    patch: DbPassengerPatch<'_>,
    filtered: filtered,
}
