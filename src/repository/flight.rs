use chrono::{Days, NaiveTime};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::filter::{ListFilter, contains_pattern, non_blank};
use crate::domain::flight::{Flight, FlightFilter};
use crate::models::flight::{
    Flight as DbFlight, FlightPatch as DbFlightPatch, NewFlight as DbNewFlight,
};
use crate::schema::flights;

/// Builds the `WHERE` clause for a flight listing.
///
/// `departure_date` selects every flight departing on that calendar day.
fn filtered(filter: &FlightFilter) -> flights::BoxedQuery<'static, Sqlite> {
    let mut query = flights::table.into_boxed();
    if filter.is_empty() {
        return query;
    }

    if let Some(number) = non_blank(&filter.flight_number) {
        query = query.filter(
            flights::flight_number
                .like(contains_pattern(number))
                .escape('\\'),
        );
    }
    if let Some(airline_id) = filter.airline_id {
        query = query.filter(flights::airline_id.eq(airline_id));
    }
    if let Some(destination_id) = filter.destination_id {
        query = query.filter(flights::destination_id.eq(destination_id));
    }
    if let Some(pilot_id) = filter.pilot_id {
        query = query.filter(flights::pilot_id.eq(pilot_id));
    }
    if let Some(day) = filter.departure_date {
        query = query.filter(flights::departure_time.ge(day.and_time(NaiveTime::MIN)));
        if let Some(next_day) = day.checked_add_days(Days::new(1)) {
            query = query.filter(flights::departure_time.lt(next_day.and_time(NaiveTime::MIN)));
        }
    }
    query
}

diesel_entity_repository! {
    entity: Flight,
    table: flights,
    row: DbFlight,
    insert: DbNewFlight<'_>,
    patch: DbFlightPatch<'_>,
    filtered: filtered,
}
