//! Diesel models representing airlines.

use diesel::prelude::*;

use crate::domain::airline::{
    Airline as DomainAirline, AirlinePatch as DomainAirlinePatch, NewAirline as DomainNewAirline,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::airlines)]
/// Diesel model for [`crate::domain::airline::Airline`].
pub struct Airline {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub founded_year: i32,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::airlines)]
pub struct NewAirline<'a> {
    pub name: &'a str,
    pub country: &'a str,
    pub founded_year: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::airlines)]
pub struct AirlinePatch<'a> {
    pub name: Option<&'a str>,
    pub country: Option<&'a str>,
    pub founded_year: Option<i32>,
}

impl From<Airline> for DomainAirline {
    fn from(airline: Airline) -> Self {
        Self {
            id: airline.id,
            name: airline.name,
            country: airline.country,
            founded_year: airline.founded_year,
        }
    }
}

impl<'a> From<&'a DomainNewAirline> for NewAirline<'a> {
    fn from(airline: &'a DomainNewAirline) -> Self {
        Self {
            name: airline.name.as_str(),
            country: airline.country.as_str(),
            founded_year: airline.founded_year,
        }
    }
}

impl<'a> From<&'a DomainAirlinePatch> for AirlinePatch<'a> {
    fn from(patch: &'a DomainAirlinePatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            country: patch.country.as_deref(),
            founded_year: patch.founded_year,
        }
    }
}
