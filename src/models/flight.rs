//! Diesel models representing scheduled flights.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::flight::{
    Flight as DomainFlight, FlightPatch as DomainFlightPatch, NewFlight as DomainNewFlight,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::flights)]
/// Diesel model for [`crate::domain::flight::Flight`].
pub struct Flight {
    pub id: i32,
    pub flight_number: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub airline_id: i32,
    pub destination_id: i32,
    pub pilot_id: i32,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::flights)]
pub struct NewFlight<'a> {
    pub flight_number: &'a str,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub airline_id: i32,
    pub destination_id: i32,
    pub pilot_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::flights)]
pub struct FlightPatch<'a> {
    pub flight_number: Option<&'a str>,
    pub departure_time: Option<NaiveDateTime>,
    pub arrival_time: Option<NaiveDateTime>,
    pub airline_id: Option<i32>,
    pub destination_id: Option<i32>,
    pub pilot_id: Option<i32>,
}

impl From<Flight> for DomainFlight {
    fn from(flight: Flight) -> Self {
        Self {
            id: flight.id,
            flight_number: flight.flight_number,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            airline_id: flight.airline_id,
            destination_id: flight.destination_id,
            pilot_id: flight.pilot_id,
        }
    }
}

impl<'a> From<&'a DomainNewFlight> for NewFlight<'a> {
    fn from(flight: &'a DomainNewFlight) -> Self {
        Self {
            flight_number: flight.flight_number.as_str(),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            airline_id: flight.airline_id,
            destination_id: flight.destination_id,
            pilot_id: flight.pilot_id,
        }
    }
}

impl<'a> From<&'a DomainFlightPatch> for FlightPatch<'a> {
    fn from(patch: &'a DomainFlightPatch) -> Self {
        Self {
            flight_number: patch.flight_number.as_deref(),
            departure_time: patch.departure_time,
            arrival_time: patch.arrival_time,
            airline_id: patch.airline_id,
            destination_id: patch.destination_id,
            pilot_id: patch.pilot_id,
        }
    }
}
