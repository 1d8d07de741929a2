use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::filter::{ListFilter, is_blank};
use crate::domain::{Entity, Patch};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: i32,
    pub flight_number: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub airline_id: i32,
    pub destination_id: i32,
    pub pilot_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewFlight {
    pub flight_number: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub airline_id: i32,
    pub destination_id: i32,
    pub pilot_id: i32,
}

impl NewFlight {
    #[must_use]
    pub fn new(
        flight_number: String,
        departure_time: NaiveDateTime,
        arrival_time: NaiveDateTime,
        airline_id: i32,
        destination_id: i32,
        pilot_id: i32,
    ) -> Self {
        Self {
            flight_number: flight_number.trim().to_uppercase(),
            departure_time,
            arrival_time,
            airline_id,
            destination_id,
            pilot_id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightPatch {
    pub flight_number: Option<String>,
    pub departure_time: Option<NaiveDateTime>,
    pub arrival_time: Option<NaiveDateTime>,
    pub airline_id: Option<i32>,
    pub destination_id: Option<i32>,
    pub pilot_id: Option<i32>,
}

impl Patch for FlightPatch {
    fn is_noop(&self) -> bool {
        self.flight_number.is_none()
            && self.departure_time.is_none()
            && self.arrival_time.is_none()
            && self.airline_id.is_none()
            && self.destination_id.is_none()
            && self.pilot_id.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightFilter {
    pub flight_number: Option<String>,
    pub airline_id: Option<i32>,
    pub destination_id: Option<i32>,
    pub pilot_id: Option<i32>,
    /// Calendar day of departure.
    pub departure_date: Option<NaiveDate>,
}

impl ListFilter for FlightFilter {
    fn is_empty(&self) -> bool {
        is_blank(&self.flight_number)
            && self.airline_id.is_none()
            && self.destination_id.is_none()
            && self.pilot_id.is_none()
            && self.departure_date.is_none()
    }
}

impl Entity for Flight {
    const NAME: &'static str = "flight";
    type Filter = FlightFilter;
    type New = NewFlight;
    type Patch = FlightPatch;
}
