use serde::{Deserialize, Serialize};

use crate::domain::filter::{ListFilter, is_blank};
use crate::domain::{Entity, Patch};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub founded_year: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewAirline {
    pub name: String,
    pub country: String,
    pub founded_year: i32,
}

impl NewAirline {
    #[must_use]
    pub fn new(name: String, country: String, founded_year: i32) -> Self {
        Self {
            name: name.trim().to_string(),
            country: country.trim().to_string(),
            founded_year,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AirlinePatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub founded_year: Option<i32>,
}

impl Patch for AirlinePatch {
    fn is_noop(&self) -> bool {
        self.name.is_none() && self.country.is_none() && self.founded_year.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AirlineFilter {
    pub name: Option<String>,
    pub country: Option<String>,
    pub founded_year: Option<i32>,
}

impl ListFilter for AirlineFilter {
    fn is_empty(&self) -> bool {
        is_blank(&self.name) && is_blank(&self.country) && self.founded_year.is_none()
    }
}

impl Entity for Airline {
    const NAME: &'static str = "airline";
    type Filter = AirlineFilter;
    type New = NewAirline;
    type Patch = AirlinePatch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_airline_trims_text() {
        let airline = NewAirline::new(" Croatia Airlines ".into(), " Croatia".into(), 1989);
        assert_eq!(airline.name, "Croatia Airlines");
        assert_eq!(airline.country, "Croatia");
    }

    #[test]
    fn filter_with_year_is_not_empty() {
        assert!(AirlineFilter::default().is_empty());
        let filter = AirlineFilter {
            founded_year: Some(1989),
            ..AirlineFilter::default()
        };
        assert!(!filter.is_empty());
    }
}
