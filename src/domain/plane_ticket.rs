use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::filter::{ListFilter, is_blank};
use crate::domain::{Entity, Patch};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaneTicket {
    pub id: i32,
    pub seat_number: String,
    pub price: f64,
    pub purchase_date: NaiveDate,
    pub passenger_id: i32,
    pub flight_id: i32,
    pub travel_class_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPlaneTicket {
    pub seat_number: String,
    pub price: f64,
    pub purchase_date: NaiveDate,
    pub passenger_id: i32,
    pub flight_id: i32,
    pub travel_class_id: i32,
}

impl NewPlaneTicket {
    #[must_use]
    pub fn new(
        seat_number: String,
        price: f64,
        purchase_date: NaiveDate,
        passenger_id: i32,
        flight_id: i32,
        travel_class_id: i32,
    ) -> Self {
        Self {
            seat_number: seat_number.trim().to_uppercase(),
            price,
            purchase_date,
            passenger_id,
            flight_id,
            travel_class_id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaneTicketPatch {
    pub seat_number: Option<String>,
    pub price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub passenger_id: Option<i32>,
    pub flight_id: Option<i32>,
    pub travel_class_id: Option<i32>,
}

impl Patch for PlaneTicketPatch {
    fn is_noop(&self) -> bool {
        self.seat_number.is_none()
            && self.price.is_none()
            && self.purchase_date.is_none()
            && self.passenger_id.is_none()
            && self.flight_id.is_none()
            && self.travel_class_id.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaneTicketFilter {
    pub seat_number: Option<String>,
    pub passenger_id: Option<i32>,
    pub flight_id: Option<i32>,
    pub travel_class_id: Option<i32>,
    pub purchase_date: Option<NaiveDate>,
}

impl ListFilter for PlaneTicketFilter {
    fn is_empty(&self) -> bool {
        is_blank(&self.seat_number)
            && self.passenger_id.is_none()
            && self.flight_id.is_none()
            && self.travel_class_id.is_none()
            && self.purchase_date.is_none()
    }
}

impl Entity for PlaneTicket {
    const NAME: &'static str = "plane ticket";
    type Filter = PlaneTicketFilter;
    type New = NewPlaneTicket;
    type Patch = PlaneTicketPatch;
}
