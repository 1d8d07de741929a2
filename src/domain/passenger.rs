use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::filter::{ListFilter, is_blank};
use crate::domain::{Entity, Patch};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Personal identification number, unique per passenger.
    pub uid: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPassenger {
    pub first_name: String,
    pub last_name: String,
    pub uid: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
}

impl NewPassenger {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        uid: String,
        email: String,
        date_of_birth: NaiveDate,
        gender: String,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            uid: uid.trim().to_string(),
            email: email.trim().to_lowercase(),
            date_of_birth,
            gender: gender.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassengerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub uid: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

impl Patch for PassengerPatch {
    fn is_noop(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.uid.is_none()
            && self.email.is_none()
            && self.date_of_birth.is_none()
            && self.gender.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassengerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub uid: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
}

impl ListFilter for PassengerFilter {
    fn is_empty(&self) -> bool {
        is_blank(&self.first_name)
            && is_blank(&self.last_name)
            && is_blank(&self.uid)
            && is_blank(&self.email)
            && is_blank(&self.gender)
    }
}

impl Entity for Passenger {
    const NAME: &'static str = "passenger";
    type Filter = PassengerFilter;
    type New = NewPassenger;
    type Patch = PassengerPatch;
}
