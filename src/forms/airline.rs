use serde::Deserialize;
use validator::Validate;

use crate::domain::airline::{Airline, AirlineFilter, AirlinePatch, NewAirline};
use crate::forms::converters::optional_i32;
use crate::forms::{FormError, RecordForms, trimmed, validate_non_blank};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AirlineForm {
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub name: String,
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub country: String,
    #[validate(range(min = 1900, max = 2100))]
    pub founded_year: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AirlinePatchForm {
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub country: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub founded_year: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineQuery {
    pub name: Option<String>,
    pub country: Option<String>,
    pub founded_year: Option<String>,
}

impl TryFrom<AirlineForm> for NewAirline {
    type Error = FormError;

    fn try_from(form: AirlineForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewAirline::new(form.name, form.country, form.founded_year))
    }
}

impl TryFrom<AirlinePatchForm> for AirlinePatch {
    type Error = FormError;

    fn try_from(form: AirlinePatchForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(AirlinePatch {
            name: trimmed(form.name),
            country: trimmed(form.country),
            founded_year: form.founded_year,
        })
    }
}

impl TryFrom<AirlineQuery> for AirlineFilter {
    type Error = FormError;

    fn try_from(query: AirlineQuery) -> Result<Self, Self::Error> {
        Ok(AirlineFilter {
            founded_year: optional_i32("foundedYear", &query.founded_year)?,
            name: query.name,
            country: query.country,
        })
    }
}

impl RecordForms for Airline {
    type Query = AirlineQuery;
    type Form = AirlineForm;
    type PatchForm = AirlinePatchForm;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn founded_year_outside_range_is_rejected() {
        let form = AirlineForm {
            name: "Croatia Airlines".into(),
            country: "Croatia".into(),
            founded_year: 1850,
        };
        assert!(matches!(
            NewAirline::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn blank_name_is_rejected() {
        let form = AirlineForm {
            name: "   ".into(),
            country: "Croatia".into(),
            founded_year: 1989,
        };
        assert!(NewAirline::try_from(form).is_err());
    }

    #[test]
    fn query_keeps_blank_text_and_parses_year() {
        let query = AirlineQuery {
            name: Some(" ".into()),
            country: None,
            founded_year: Some("1989".into()),
        };
        let filter = AirlineFilter::try_from(query).unwrap();
        assert_eq!(filter.founded_year, Some(1989));
        assert_eq!(filter.name.as_deref(), Some(" "));
    }
}
