use serde::Deserialize;
use validator::Validate;

use crate::domain::flight::{Flight, FlightFilter, FlightPatch, NewFlight};
use crate::forms::converters::{optional_date, optional_i32, parse_date_time};
use crate::forms::{FormError, RecordForms, validate_non_blank};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FlightForm {
    #[validate(length(min = 2, max = 10), custom(function = "validate_non_blank"))]
    pub flight_number: String,
    pub departure_time: String,
    pub arrival_time: String,
    #[validate(range(min = 1))]
    pub airline_id: i32,
    #[validate(range(min = 1))]
    pub destination_id: i32,
    #[validate(range(min = 1))]
    pub pilot_id: i32,
}

/// Partial flight update.
///
/// The schedule is only checked when both times are supplied together.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FlightPatchForm {
    #[validate(length(min = 2, max = 10), custom(function = "validate_non_blank"))]
    pub flight_number: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    #[validate(range(min = 1))]
    pub airline_id: Option<i32>,
    #[validate(range(min = 1))]
    pub destination_id: Option<i32>,
    #[validate(range(min = 1))]
    pub pilot_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightQuery {
    pub flight_number: Option<String>,
    pub airline_id: Option<String>,
    pub destination_id: Option<String>,
    pub pilot_id: Option<String>,
    pub departure_date: Option<String>,
}

impl TryFrom<FlightForm> for NewFlight {
    type Error = FormError;

    fn try_from(form: FlightForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let departure_time = parse_date_time("departureTime", &form.departure_time)?;
        let arrival_time = parse_date_time("arrivalTime", &form.arrival_time)?;
        if arrival_time <= departure_time {
            return Err(FormError::InvalidSchedule);
        }

        Ok(NewFlight::new(
            form.flight_number,
            departure_time,
            arrival_time,
            form.airline_id,
            form.destination_id,
            form.pilot_id,
        ))
    }
}

impl TryFrom<FlightPatchForm> for FlightPatch {
    type Error = FormError;

    fn try_from(form: FlightPatchForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let departure_time = form
            .departure_time
            .as_deref()
            .map(|value| parse_date_time("departureTime", value))
            .transpose()?;
        let arrival_time = form
            .arrival_time
            .as_deref()
            .map(|value| parse_date_time("arrivalTime", value))
            .transpose()?;
        if let (Some(departure), Some(arrival)) = (departure_time, arrival_time)
            && arrival <= departure
        {
            return Err(FormError::InvalidSchedule);
        }

        Ok(FlightPatch {
            flight_number: form.flight_number.map(|number| number.trim().to_uppercase()),
            departure_time,
            arrival_time,
            airline_id: form.airline_id,
            destination_id: form.destination_id,
            pilot_id: form.pilot_id,
        })
    }
}

impl TryFrom<FlightQuery> for FlightFilter {
    type Error = FormError;

    fn try_from(query: FlightQuery) -> Result<Self, Self::Error> {
        Ok(FlightFilter {
            airline_id: optional_i32("airlineId", &query.airline_id)?,
            destination_id: optional_i32("destinationId", &query.destination_id)?,
            pilot_id: optional_i32("pilotId", &query.pilot_id)?,
            departure_date: optional_date("departureDate", &query.departure_date)?,
            flight_number: query.flight_number,
        })
    }
}

impl RecordForms for Flight {
    type Query = FlightQuery;
    type Form = FlightForm;
    type PatchForm = FlightPatchForm;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(departure: &str, arrival: &str) -> FlightForm {
        FlightForm {
            flight_number: "ou 650".into(),
            departure_time: departure.into(),
            arrival_time: arrival.into(),
            airline_id: 1,
            destination_id: 2,
            pilot_id: 3,
        }
    }

    #[test]
    fn arrival_before_departure_is_rejected() {
        let result = NewFlight::try_from(form("2024-05-01T12:00:00", "2024-05-01T11:00:00"));
        assert!(matches!(result, Err(FormError::InvalidSchedule)));
    }

    #[test]
    fn valid_flight_upper_cases_number() {
        let flight = NewFlight::try_from(form("2024-05-01T12:00:00", "2024-05-01T13:05:00")).unwrap();
        assert_eq!(flight.flight_number, "OU 650");
    }

    #[test]
    fn unparseable_departure_date_filter_is_an_error() {
        let query = FlightQuery {
            departure_date: Some("31/31/2024".into()),
            ..FlightQuery::default()
        };
        assert!(matches!(
            FlightFilter::try_from(query),
            Err(FormError::InvalidDate {
                field: "departureDate",
                ..
            })
        ));
    }

    #[test]
    fn patch_with_blank_departure_is_rejected() {
        let form = FlightPatchForm {
            departure_time: Some(String::new()),
            ..FlightPatchForm::default()
        };
        assert!(matches!(
            FlightPatch::try_from(form),
            Err(FormError::InvalidDateTime {
                field: "departureTime",
                ..
            })
        ));
    }

    #[test]
    fn patch_with_one_time_skips_schedule_check() {
        let form = FlightPatchForm {
            arrival_time: Some("2024-05-01T09:00:00".into()),
            ..FlightPatchForm::default()
        };
        assert!(FlightPatch::try_from(form).is_ok());
    }
}
