use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::destination::{Destination, DestinationFilter, DestinationPatch, NewDestination};
use crate::forms::{FormError, RecordForms, trimmed, validate_non_blank};

fn validate_airport_code(code: &str) -> Result<(), ValidationError> {
    let code = code.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::new("airport_code"))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DestinationForm {
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub city: String,
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub country: String,
    #[validate(custom(function = "validate_airport_code"))]
    pub airport_code: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DestinationPatchForm {
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub country: Option<String>,
    #[validate(custom(function = "validate_airport_code"))]
    pub airport_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationQuery {
    pub city: Option<String>,
    pub country: Option<String>,
    pub airport_code: Option<String>,
}

impl TryFrom<DestinationForm> for NewDestination {
    type Error = FormError;

    fn try_from(form: DestinationForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewDestination::new(form.city, form.country, form.airport_code))
    }
}

impl TryFrom<DestinationPatchForm> for DestinationPatch {
    type Error = FormError;

    fn try_from(form: DestinationPatchForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(DestinationPatch {
            city: trimmed(form.city),
            country: trimmed(form.country),
            airport_code: form.airport_code.map(|code| code.trim().to_uppercase()),
        })
    }
}

impl TryFrom<DestinationQuery> for DestinationFilter {
    type Error = FormError;

    fn try_from(query: DestinationQuery) -> Result<Self, Self::Error> {
        Ok(DestinationFilter {
            city: query.city,
            country: query.country,
            airport_code: query.airport_code,
        })
    }
}

impl RecordForms for Destination {
    type Query = DestinationQuery;
    type Form = DestinationForm;
    type PatchForm = DestinationPatchForm;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airport_code_must_have_three_letters() {
        assert!(validate_airport_code("spu").is_ok());
        assert!(validate_airport_code("SP").is_err());
        assert!(validate_airport_code("S1U").is_err());
    }

    #[test]
    fn patch_upper_cases_airport_code() {
        let form = DestinationPatchForm {
            airport_code: Some(" zag ".into()),
            ..DestinationPatchForm::default()
        };
        let patch = DestinationPatch::try_from(form).unwrap();
        assert_eq!(patch.airport_code.as_deref(), Some("ZAG"));
        assert_eq!(patch.city, None);
    }
}
