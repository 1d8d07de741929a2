use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::filter::{ListFilter, contains_pattern, non_blank};
use crate::domain::pilot::{Pilot, PilotFilter};
use crate::models::pilot::{NewPilot as DbNewPilot, Pilot as DbPilot, PilotPatch as DbPilotPatch};
use crate::schema::pilots;

/// Builds the `WHERE` clause for a pilot listing.
///
/// Name fields match as case-insensitive substrings while numeric fields
/// match exactly, so `flying_hours = Some(0)` selects pilots with no hours.
fn filtered(filter: &PilotFilter) -> pilots::BoxedQuery<'static, Sqlite> {
    let mut query = pilots::table.into_boxed();
    if filter.is_empty() {
        return query;
    }

    if let Some(first_name) = non_blank(&filter.first_name) {
        query = query.filter(
            pilots::first_name
                .like(contains_pattern(first_name))
                .escape('\\'),
        );
    }
    if let Some(last_name) = non_blank(&filter.last_name) {
        query = query.filter(
            pilots::last_name
                .like(contains_pattern(last_name))
                .escape('\\'),
        );
    }
    if let Some(hours) = filter.flying_hours {
        query = query.filter(pilots::flying_hours.eq(hours));
    }
    if let Some(airline_id) = filter.airline_id {
        query = query.filter(pilots::airline_id.eq(airline_id));
    }
    query
}

diesel_entity_repository! {
    entity: Pilot,
    table: pilots,
    row: DbPilot,
    insert: DbNewPilot<'_>,
    patch: DbPilotPatch<'_>,
    filtered: filtered,
}
