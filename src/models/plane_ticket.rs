use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::plane_ticket::{
    NewPlaneTicket as DomainNewPlaneTicket, PlaneTicket as DomainPlaneTicket,
    PlaneTicketPatch as DomainPlaneTicketPatch,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::plane_tickets)]
pub struct PlaneTicket {
    pub id: i32,
    pub seat_number: String,
    pub price: f64,
    pub purchase_date: NaiveDate,
    pub passenger_id: i32,
    pub flight_id: i32,
    pub travel_class_id: i32,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::plane_tickets)]
pub struct NewPlaneTicket<'a> {
    pub seat_number: &'a str,
    pub price: f64,
    pub purchase_date: NaiveDate,
    pub passenger_id: i32,
    pub flight_id: i32,
    pub travel_class_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::plane_tickets)]
pub struct PlaneTicketPatch<'a> {
    pub seat_number: Option<&'a str>,
    pub price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub passenger_id: Option<i32>,
    pub flight_id: Option<i32>,
    pub travel_class_id: Option<i32>,
}

impl From<PlaneTicket> for DomainPlaneTicket {
    fn from(ticket: PlaneTicket) -> Self {
        Self {
            id: ticket.id,
            seat_number: ticket.seat_number,
            price: ticket.price,
            purchase_date: ticket.purchase_date,
            passenger_id: ticket.passenger_id,
            flight_id: ticket.flight_id,
            travel_class_id: ticket.travel_class_id,
        }
    }
}

impl<'a> From<&'a DomainNewPlaneTicket> for NewPlaneTicket<'a> {
    fn from(ticket: &'a DomainNewPlaneTicket) -> Self {
        Self {
            seat_number: ticket.seat_number.as_str(),
            price: ticket.price,
            purchase_date: ticket.purchase_date,
            passenger_id: ticket.passenger_id,
            flight_id: ticket.flight_id,
            travel_class_id: ticket.travel_class_id,
        }
    }
}

impl<'a> From<&'a DomainPlaneTicketPatch> for PlaneTicketPatch<'a> {
    fn from(patch: &'a DomainPlaneTicketPatch) -> Self {
        Self {
            seat_number: patch.seat_number.as_deref(),
            price: patch.price,
            purchase_date: patch.purchase_date,
            passenger_id: patch.passenger_id,
            flight_id: patch.flight_id,
            travel_class_id: patch.travel_class_id,
        }
    }
}
