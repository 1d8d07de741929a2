use serde::Deserialize;
use validator::Validate;

use crate::domain::plane_ticket::{NewPlaneTicket, PlaneTicket, PlaneTicketFilter, PlaneTicketPatch};
use crate::forms::converters::{optional_date, optional_i32, parse_date};
use crate::forms::{FormError, RecordForms, validate_non_blank};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlaneTicketForm {
    #[validate(length(min = 1, max = 5), custom(function = "validate_non_blank"))]
    pub seat_number: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub purchase_date: String,
    #[validate(range(min = 1))]
    pub passenger_id: i32,
    #[validate(range(min = 1))]
    pub flight_id: i32,
    #[validate(range(min = 1))]
    pub travel_class_id: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlaneTicketPatchForm {
    #[validate(length(min = 1, max = 5), custom(function = "validate_non_blank"))]
    pub seat_number: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub purchase_date: Option<String>,
    #[validate(range(min = 1))]
    pub passenger_id: Option<i32>,
    #[validate(range(min = 1))]
    pub flight_id: Option<i32>,
    #[validate(range(min = 1))]
    pub travel_class_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneTicketQuery {
    pub seat_number: Option<String>,
    pub passenger_id: Option<String>,
    pub flight_id: Option<String>,
    pub travel_class_id: Option<String>,
    pub purchase_date: Option<String>,
}

impl TryFrom<PlaneTicketForm> for NewPlaneTicket {
    type Error = FormError;

    fn try_from(form: PlaneTicketForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let purchase_date = parse_date("purchaseDate", &form.purchase_date)?;
        Ok(NewPlaneTicket::new(
            form.seat_number,
            form.price,
            purchase_date,
            form.passenger_id,
            form.flight_id,
            form.travel_class_id,
        ))
    }
}

impl TryFrom<PlaneTicketPatchForm> for PlaneTicketPatch {
    type Error = FormError;

    fn try_from(form: PlaneTicketPatchForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(PlaneTicketPatch {
            purchase_date: form
                .purchase_date
                .as_deref()
                .map(|value| parse_date("purchaseDate", value))
                .transpose()?,
            seat_number: form.seat_number.map(|seat| seat.trim().to_uppercase()),
            price: form.price,
            passenger_id: form.passenger_id,
            flight_id: form.flight_id,
            travel_class_id: form.travel_class_id,
        })
    }
}

impl TryFrom<PlaneTicketQuery> for PlaneTicketFilter {
    type Error = FormError;

    fn try_from(query: PlaneTicketQuery) -> Result<Self, Self::Error> {
        Ok(PlaneTicketFilter {
            passenger_id: optional_i32("passengerId", &query.passenger_id)?,
            flight_id: optional_i32("flightId", &query.flight_id)?,
            travel_class_id: optional_i32("travelClassId", &query.travel_class_id)?,
            purchase_date: optional_date("purchaseDate", &query.purchase_date)?,
            seat_number: query.seat_number,
        })
    }
}

impl RecordForms for PlaneTicket {
    type Query = PlaneTicketQuery;
    type Form = PlaneTicketForm;
    type PatchForm = PlaneTicketPatchForm;
}
