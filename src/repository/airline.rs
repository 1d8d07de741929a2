use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::airline::{Airline, AirlineFilter};
use crate::domain::filter::{ListFilter, contains_pattern, non_blank};
use crate::models::airline::{
    Airline as DbAirline, AirlinePatch as DbAirlinePatch, NewAirline as DbNewAirline,
};
use crate::schema::airlines;

fn filtered(filter: &AirlineFilter) -> airlines::BoxedQuery<'static, Sqlite> {
    let mut query = airlines::table.into_boxed();
    if filter.is_empty() {
        return query;
    }

    if let Some(name) = non_blank(&filter.name) {
        query = query.filter(airlines::name.like(contains_pattern(name)).escape('\\'));
    }
    if let Some(country) = non_blank(&filter.country) {
        query = query.filter(airlines::country.like(contains_pattern(country)).escape('\\'));
    }
    if let Some(year) = filter.founded_year {
        query = query.filter(airlines::founded_year.eq(year));
    }
    query
}

diesel_entity_repository! {
    entity: Airline,
    table: airlines,
    row: DbAirline,
    insert: DbNewAirline<'_>,
    patch: DbAirlinePatch<'_>,
    filtered: filtered,
}
