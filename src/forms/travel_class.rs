use serde::Deserialize;
use validator::Validate;

use crate::domain::travel_class::{NewTravelClass, TravelClass, TravelClassFilter, TravelClassPatch};
use crate::forms::{FormError, RecordForms, trimmed, validate_non_blank};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TravelClassForm {
    #[validate(length(min = 1, max = 50), custom(function = "validate_non_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TravelClassPatchForm {
    #[validate(length(min = 1, max = 50), custom(function = "validate_non_blank"))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelClassQuery {
    pub name: Option<String>,
}

impl TryFrom<TravelClassForm> for NewTravelClass {
    type Error = FormError;

    fn try_from(form: TravelClassForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewTravelClass::new(form.name, form.description))
    }
}

impl TryFrom<TravelClassPatchForm> for TravelClassPatch {
    type Error = FormError;

    fn try_from(form: TravelClassPatchForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(TravelClassPatch {
            name: trimmed(form.name),
            description: trimmed(form.description),
        })
    }
}

impl TryFrom<TravelClassQuery> for TravelClassFilter {
    type Error = FormError;

    fn try_from(query: TravelClassQuery) -> Result<Self, Self::Error> {
        Ok(TravelClassFilter { name: query.name })
    }
}

impl RecordForms for TravelClass {
    type Query = TravelClassQuery;
    type Form = TravelClassForm;
    type PatchForm = TravelClassPatchForm;
}
