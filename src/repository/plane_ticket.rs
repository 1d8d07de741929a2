use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::filter::{ListFilter, contains_pattern, non_blank};
use crate::domain::plane_ticket::{PlaneTicket, PlaneTicketFilter};
use crate::models::plane_ticket::{
    NewPlaneTicket as DbNewPlaneTicket, PlaneTicket as DbPlaneTicket,
    PlaneTicketPatch as DbPlaneTicketPatch,
};
use crate::schema::plane_tickets;

fn filtered(filter: &PlaneTicketFilter) -> plane_tickets::BoxedQuery<'static, Sqlite> {
    let mut query = plane_tickets::table.into_boxed();
    if filter.is_empty() {
        return query;
    }

    if let Some(seat) = non_blank(&filter.seat_number) {
        query = query.filter(
            plane_tickets::seat_number
                .like(contains_pattern(seat))
                .escape('\\'),
        );
    }
    if let Some(passenger_id) = filter.passenger_id {
        query = query.filter(plane_tickets::passenger_id.eq(passenger_id));
    }
    if let Some(flight_id) = filter.flight_id {
        query = query.filter(plane_tickets::flight_id.eq(flight_id));
    }
    if let Some(travel_class_id) = filter.travel_class_id {
        query = query.filter(plane_tickets::travel_class_id.eq(travel_class_id));
    }
    if let Some(purchase_date) = filter.purchase_date {
        query = query.filter(plane_tickets::purchase_date.eq(purchase_date));
    }
    query
}

diesel_entity_repository! {
    entity: PlaneTicket,
    table: plane_tickets,
    row: DbPlaneTicket,
    insert: DbNewPlaneTicket<'_>,
    patch: DbPlaneTicketPatch<'_>,
    filtered: filtered,
}
