use serde::{Deserialize, Serialize};

use crate::domain::filter::{ListFilter, is_blank};
use crate::domain::{Entity, Patch};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelClass {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewTravelClass {
    pub name: String,
    pub description: String,
}

impl NewTravelClass {
    #[must_use]
    pub fn new(name: String, description: String) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TravelClassPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Patch for TravelClassPatch {
    fn is_noop(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TravelClassFilter {
    pub name: Option<String>,
}

impl ListFilter for TravelClassFilter {
    fn is_empty(&self) -> bool {
        is_blank(&self.name)
    }
}

impl Entity for TravelClass {
    const NAME: &'static str = "travel class";
    type Filter = TravelClassFilter;
    type New = NewTravelClass;
    type Patch = TravelClassPatch;
}
