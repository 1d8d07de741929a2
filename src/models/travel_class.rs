use diesel::prelude::*;

use crate::domain::travel_class::{
    NewTravelClass as DomainNewTravelClass, TravelClass as DomainTravelClass,
    TravelClassPatch as DomainTravelClassPatch,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::travel_classes)]
pub struct TravelClass {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::travel_classes)]
pub struct NewTravelClass<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::travel_classes)]
pub struct TravelClassPatch<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl From<TravelClass> for DomainTravelClass {
    fn from(class: TravelClass) -> Self {
        Self {
            id: class.id,
            name: class.name,
            description: class.description,
        }
    }
}

impl<'a> From<&'a DomainNewTravelClass> for NewTravelClass<'a> {
    fn from(class: &'a DomainNewTravelClass) -> Self {
        Self {
            name: class.name.as_str(),
            description: class.description.as_str(),
        }
    }
}

impl<'a> From<&'a DomainTravelClassPatch> for TravelClassPatch<'a> {
    fn from(patch: &'a DomainTravelClassPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            description: patch.description.as_deref(),
        }
    }
}
