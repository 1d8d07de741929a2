use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::filter::{ListFilter, contains_pattern, non_blank};
use crate::domain::travel_class::{TravelClass, TravelClassFilter};
use crate::models::travel_class::{
    NewTravelClass as DbNewTravelClass, TravelClass as DbTravelClass,
    TravelClassPatch as DbTravelClassPatch,
};
use crate::schema::travel_classes;

fn filtered(filter: &TravelClassFilter) -> travel_classes::BoxedQuery<'static, Sqlite> {
    let mut query = travel_classes::table.into_boxed();
    if filter.is_empty() {
        return query;
    }

    if let Some(name) = non_blank(&filter.name) {
        query = query.filter(travel_classes::name.like(contains_pattern(name)).escape('\\'));
    }
    query
}

diesel_entity_repository! {
    entity: TravelClass,
    table: travel_classes,
    row: DbTravelClass,
    insert: DbNewTravelClass<'_>,
    patch: DbTravelClassPatch<'_>,
    filtered: filtered,
}
