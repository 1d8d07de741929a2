use serde::Deserialize;
use validator::Validate;

use crate::domain::pilot::{NewPilot, Pilot, PilotFilter, PilotPatch};
use crate::forms::converters::{optional_i32, parse_date};
use crate::forms::{FormError, RecordForms, trimmed, validate_non_blank};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PilotForm {
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub last_name: String,
    pub date_of_birth: String,
    #[validate(range(min = 0))]
    pub flying_hours: i32,
    #[validate(range(min = 1))]
    pub airline_id: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PilotPatchForm {
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    #[validate(range(min = 0))]
    pub flying_hours: Option<i32>,
    #[validate(range(min = 1))]
    pub airline_id: Option<i32>,
}

/// Query string of `GET /api/pilots`.
///
/// `flyingHours=0` is a real constraint; only a missing or blank value
/// leaves the field unset.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub flying_hours: Option<String>,
    pub airline_id: Option<String>,
}

impl TryFrom<PilotForm> for NewPilot {
    type Error = FormError;

    fn try_from(form: PilotForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let date_of_birth = parse_date("dateOfBirth", &form.date_of_birth)?;
        Ok(NewPilot::new(
            form.first_name,
            form.last_name,
            date_of_birth,
            form.flying_hours,
            form.airline_id,
        ))
    }
}

impl TryFrom<PilotPatchForm> for PilotPatch {
    type Error = FormError;

    fn try_from(form: PilotPatchForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(PilotPatch {
            date_of_birth: form
                .date_of_birth
                .as_deref()
                .map(|value| parse_date("dateOfBirth", value))
                .transpose()?,
            first_name: trimmed(form.first_name),
            last_name: trimmed(form.last_name),
            flying_hours: form.flying_hours,
            airline_id: form.airline_id,
        })
    }
}

impl TryFrom<PilotQuery> for PilotFilter {
    type Error = FormError;

    fn try_from(query: PilotQuery) -> Result<Self, Self::Error> {
        Ok(PilotFilter {
            flying_hours: optional_i32("flyingHours", &query.flying_hours)?,
            airline_id: optional_i32("airlineId", &query.airline_id)?,
            first_name: query.first_name,
            last_name: query.last_name,
        })
    }
}

impl RecordForms for Pilot {
    type Query = PilotQuery;
    type Form = PilotForm;
    type PatchForm = PilotPatchForm;
}
