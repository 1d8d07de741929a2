use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::filter::{ListFilter, is_blank};
use crate::domain::{Entity, Patch};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pilot {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub flying_hours: i32,
    pub airline_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPilot {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub flying_hours: i32,
    pub airline_id: i32,
}

impl NewPilot {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
        flying_hours: i32,
        airline_id: i32,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            date_of_birth,
            flying_hours,
            airline_id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PilotPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub flying_hours: Option<i32>,
    pub airline_id: Option<i32>,
}

impl Patch for PilotPatch {
    fn is_noop(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.date_of_birth.is_none()
            && self.flying_hours.is_none()
            && self.airline_id.is_none()
    }
}

/// Search constraints for pilots. `flying_hours: Some(0)` matches pilots
/// without any recorded hours.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PilotFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub flying_hours: Option<i32>,
    pub airline_id: Option<i32>,
}

impl ListFilter for PilotFilter {
    fn is_empty(&self) -> bool {
        is_blank(&self.first_name)
            && is_blank(&self.last_name)
            && self.flying_hours.is_none()
            && self.airline_id.is_none()
    }
}

impl Entity for Pilot {
    const NAME: &'static str = "pilot";
    type Filter = PilotFilter;
    type New = NewPilot;
    type Patch = PilotPatch;
}
