//! Parsing helpers for values that arrive as text.

use std::num::IntErrorKind;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::filter::non_blank;
use crate::domain::types::Role;
use crate::forms::FormError;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| FormError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

/// Accepts RFC 3339 (converted to UTC) and ISO 8601 local date-times.
pub fn parse_date_time(field: &'static str, value: &str) -> Result<NaiveDateTime, FormError> {
    let value = value.trim();
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_utc());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| FormError::InvalidDateTime {
            field,
            value: value.to_string(),
        })
}

pub fn optional_date(
    field: &'static str,
    value: &Option<String>,
) -> Result<Option<NaiveDate>, FormError> {
    non_blank(value)
        .map(|value| parse_date(field, value))
        .transpose()
}

/// Page window parameter. Out-of-range integers saturate so that an
/// oversized page size is clamped later instead of rejected here.
pub fn optional_page_param(
    field: &'static str,
    value: &Option<String>,
) -> Result<Option<i64>, FormError> {
    non_blank(value)
        .map(|value| {
            value.parse::<i64>().or_else(|err| match err.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(FormError::InvalidNumber {
                    field,
                    value: value.to_string(),
                }),
            })
        })
        .transpose()
}

/// Blank input is "unset"; `"0"` is a real value.
pub fn optional_i32(field: &'static str, value: &Option<String>) -> Result<Option<i32>, FormError> {
    non_blank(value)
        .map(|value| {
            value.parse::<i32>().map_err(|_| FormError::InvalidNumber {
                field,
                value: value.to_string(),
            })
        })
        .transpose()
}

pub fn parse_role(value: &str) -> Result<Role, FormError> {
    value
        .parse::<Role>()
        .map_err(|_| FormError::InvalidRole(value.trim().to_string()))
}

pub fn optional_role(value: &Option<String>) -> Result<Option<Role>, FormError> {
    non_blank(value).map(parse_role).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_accept_iso_and_dotted_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(parse_date("date", "2024-03-09").unwrap(), expected);
        assert_eq!(parse_date("date", "09.03.2024").unwrap(), expected);
        assert!(matches!(
            parse_date("departureDate", "not-a-date"),
            Err(FormError::InvalidDate {
                field: "departureDate",
                ..
            })
        ));
    }

    #[test]
    fn date_times_accept_offsets_and_local_time() {
        let local = parse_date_time("departureTime", "2024-03-09T10:30:00").unwrap();
        let offset = parse_date_time("departureTime", "2024-03-09T11:30:00+01:00").unwrap();
        assert_eq!(local, offset);
        assert_eq!(
            parse_date_time("departureTime", "2024-03-09 10:30:00").unwrap(),
            local
        );
    }

    #[test]
    fn blank_numbers_are_unset_and_zero_is_kept() {
        assert_eq!(optional_i32("flyingHours", &None).unwrap(), None);
        assert_eq!(optional_i32("flyingHours", &Some(" ".into())).unwrap(), None);
        assert_eq!(optional_i32("flyingHours", &Some("0".into())).unwrap(), Some(0));
        assert!(optional_i32("flyingHours", &Some("many".into())).is_err());
    }

    #[test]
    fn page_params_saturate_on_overflow() {
        let huge = Some("99999999999999999999".to_string());
        assert_eq!(optional_page_param("pageSize", &huge).unwrap(), Some(i64::MAX));
        let tiny = Some("-99999999999999999999".to_string());
        assert_eq!(optional_page_param("page", &tiny).unwrap(), Some(i64::MIN));
        assert_eq!(optional_page_param("page", &Some(" 3 ".into())).unwrap(), Some(3));
        assert_eq!(optional_page_param("page", &Some("".into())).unwrap(), None);
        assert!(matches!(
            optional_page_param("page", &Some("first".into())),
            Err(FormError::InvalidNumber { field: "page", .. })
        ));
    }

    #[test]
    fn roles_parse_case_insensitively() {
        assert_eq!(parse_role("admin").unwrap(), Role::Admin);
        assert_eq!(optional_role(&Some("".into())).unwrap(), None);
        assert!(matches!(parse_role("Pilot"), Err(FormError::InvalidRole(_))));
    }
}
