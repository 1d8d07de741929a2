use serde::Deserialize;
use validator::Validate;

use crate::domain::passenger::{NewPassenger, Passenger, PassengerFilter, PassengerPatch};
use crate::domain::types::normalize_email;
use crate::forms::converters::parse_date;
use crate::forms::{FormError, RecordForms, trimmed, validate_non_blank};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PassengerForm {
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub last_name: String,
    #[validate(length(min = 1, max = 20), custom(function = "validate_non_blank"))]
    pub uid: String,
    #[validate(email)]
    pub email: String,
    pub date_of_birth: String,
    #[validate(length(min = 1, max = 20), custom(function = "validate_non_blank"))]
    pub gender: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PassengerPatchForm {
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100), custom(function = "validate_non_blank"))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 20), custom(function = "validate_non_blank"))]
    pub uid: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    #[validate(length(min = 1, max = 20), custom(function = "validate_non_blank"))]
    pub gender: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub uid: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
}

impl TryFrom<PassengerForm> for NewPassenger {
    type Error = FormError;

    fn try_from(form: PassengerForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let date_of_birth = parse_date("dateOfBirth", &form.date_of_birth)?;
        Ok(NewPassenger::new(
            form.first_name,
            form.last_name,
            form.uid,
            normalize_email(form.email)?,
            date_of_birth,
            form.gender,
        ))
    }
}

impl TryFrom<PassengerPatchForm> for PassengerPatch {
    type Error = FormError;

    fn try_from(form: PassengerPatchForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(PassengerPatch {
            date_of_birth: form
                .date_of_birth
                .as_deref()
                .map(|value| parse_date("dateOfBirth", value))
                .transpose()?,
            first_name: trimmed(form.first_name),
            last_name: trimmed(form.last_name),
            uid: trimmed(form.uid),
            email: form.email.map(normalize_email).transpose()?,
            gender: trimmed(form.gender),
        })
    }
}

impl TryFrom<PassengerQuery> for PassengerFilter {
    type Error = FormError;

    fn try_from(query: PassengerQuery) -> Result<Self, Self::Error> {
        Ok(PassengerFilter {
            first_name: query.first_name,
            last_name: query.last_name,
            uid: query.uid,
            email: query.email,
            gender: query.gender,
        })
    }
}

impl RecordForms for Passenger {
    type Query = PassengerQuery;
    type Form = PassengerForm;
    type PatchForm = PassengerPatchForm;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_email_is_rejected() {
        let form = PassengerForm {
            first_name: "Ivo".into(),
            last_name: "Ivić".into(),
            uid: "12345678901".into(),
            email: "not-an-email".into(),
            date_of_birth: "1990-01-01".into(),
            gender: "M".into(),
        };
        assert!(matches!(
            NewPassenger::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn patch_with_blank_birth_date_is_rejected() {
        let form = PassengerPatchForm {
            date_of_birth: Some("  ".into()),
            ..PassengerPatchForm::default()
        };
        assert!(matches!(
            PassengerPatch::try_from(form),
            Err(FormError::InvalidDate {
                field: "dateOfBirth",
                ..
            })
        ));
    }

    #[test]
    fn patch_lowercases_email() {
        let form = PassengerPatchForm {
            email: Some("Ivo@Example.COM".into()),
            ..PassengerPatchForm::default()
        };
        let patch = PassengerPatch::try_from(form).unwrap();
        assert_eq!(patch.email.as_deref(), Some("ivo@example.com"));
    }
}
