use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::destination::{Destination, DestinationFilter};
use crate::domain::filter::{ListFilter, contains_pattern, non_blank};
use crate::models::destination::{
    Destination as DbDestination, DestinationPatch as DbDestinationPatch,
    NewDestination as DbNewDestination,
};
use crate::schema::destinations;

fn filtered(filter: &DestinationFilter) -> destinations::BoxedQuery<'static, Sqlite> {
    let mut query = destinations::table.into_boxed();
    if filter.is_empty() {
        return query;
    }

    if let Some(city) = non_blank(&filter.city) {
        query = query.filter(destinations::city.like(contains_pattern(city)).escape('\\'));
    }
    if let Some(country) = non_blank(&filter.country) {
        query = query.filter(destinations::country.like(contains_pattern(country)).escape('\\'));
    }
    if let Some(code) = non_blank(&filter.airport_code) {
        query = query.filter(
            destinations::airport_code
                .like(contains_pattern(code))
                .escape('\\'),
        );
    }
    query
}

diesel_entity_repository! {
    entity: Destination,
    table: destinations,
    row: DbDestination,
    insert: DbNewDestination<'_>,
    patch: DbDestinationPatch<'_>,
    filtered: filtered,
}
