use diesel::prelude::*;

use crate::domain::destination::{
    Destination as DomainDestination, DestinationPatch as DomainDestinationPatch,
    NewDestination as DomainNewDestination,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::destinations)]
pub struct Destination {
    pub id: i32,
    pub city: String,
    pub country: String,
    pub airport_code: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::destinations)]
pub struct NewDestination<'a> {
    pub city: &'a str,
    pub country: &'a str,
    pub airport_code: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::destinations)]
pub struct DestinationPatch<'a> {
    pub city: Option<&'a str>,
    pub country: Option<&'a str>,
    pub airport_code: Option<&'a str>,
}

impl From<Destination> for DomainDestination {
    fn from(destination: Destination) -> Self {
        Self {
            id: destination.id,
            city: destination.city,
            country: destination.country,
            airport_code: destination.airport_code,
        }
    }
}

impl<'a> From<&'a DomainNewDestination> for NewDestination<'a> {
    fn from(destination: &'a DomainNewDestination) -> Self {
        Self {
            city: destination.city.as_str(),
            country: destination.country.as_str(),
            airport_code: destination.airport_code.as_str(),
        }
    }
}

impl<'a> From<&'a DomainDestinationPatch> for DestinationPatch<'a> {
    fn from(patch: &'a DomainDestinationPatch) -> Self {
        Self {
            city: patch.city.as_deref(),
            country: patch.country.as_deref(),
            airport_code: patch.airport_code.as_deref(),
        }
    }
}
