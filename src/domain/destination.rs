use serde::{Deserialize, Serialize};

use crate::domain::filter::{ListFilter, is_blank};
use crate::domain::{Entity, Patch};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i32,
    pub city: String,
    pub country: String,
    pub airport_code: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewDestination {
    pub city: String,
    pub country: String,
    pub airport_code: String,
}

impl NewDestination {
    #[must_use]
    pub fn new(city: String, country: String, airport_code: String) -> Self {
        Self {
            city: city.trim().to_string(),
            country: country.trim().to_string(),
            airport_code: airport_code.trim().to_uppercase(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DestinationPatch {
    pub city: Option<String>,
    pub country: Option<String>,
    pub airport_code: Option<String>,
}

impl Patch for DestinationPatch {
    fn is_noop(&self) -> bool {
        self.city.is_none() && self.country.is_none() && self.airport_code.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DestinationFilter {
    pub city: Option<String>,
    pub country: Option<String>,
    pub airport_code: Option<String>,
}

impl ListFilter for DestinationFilter {
    fn is_empty(&self) -> bool {
        is_blank(&self.city) && is_blank(&self.country) && is_blank(&self.airport_code)
    }
}

impl Entity for Destination {
    const NAME: &'static str = "destination";
    type Filter = DestinationFilter;
    type New = NewDestination;
    type Patch = DestinationPatch;
}
