//! Diesel models representing passengers.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::passenger::{
    NewPassenger as DomainNewPassenger, Passenger as DomainPassenger,
    PassengerPatch as DomainPassengerPatch,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::passengers)]
/// Diesel model for [`crate::domain::passenger::Passenger`].
pub struct Passenger {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub uid: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::passengers)]
pub struct NewPassenger<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub uid: &'a str,
    pub email: &'a str,
    pub date_of_birth: NaiveDate,
    pub gender: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::passengers)]
pub struct PassengerPatch<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub uid: Option<&'a str>,
    pub email: Option<&'a str>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<&'a str>,
}

impl From<Passenger> for DomainPassenger {
    fn from(passenger: Passenger) -> Self {
        Self {
            id: passenger.id,
            first_name: passenger.first_name,
            last_name: passenger.last_name,
            uid: passenger.uid,
            email: passenger.email,
            date_of_birth: passenger.date_of_birth,
            gender: passenger.gender,
        }
    }
}

impl<'a> From<&'a DomainNewPassenger> for NewPassenger<'a> {
    fn from(passenger: &'a DomainNewPassenger) -> Self {
        Self {
            first_name: passenger.first_name.as_str(),
            last_name: passenger.last_name.as_str(),
            uid: passenger.uid.as_str(),
            email: passenger.email.as_str(),
            date_of_birth: passenger.date_of_birth,
            gender: passenger.gender.as_str(),
        }
    }
}

impl<'a> From<&'a DomainPassengerPatch> for PassengerPatch<'a> {
    fn from(patch: &'a DomainPassengerPatch) -> Self {
        Self {
            first_name: patch.first_name.as_deref(),
            last_name: patch.last_name.as_deref(),
            uid: patch.uid.as_deref(),
            email: patch.email.as_deref(),
            date_of_birth: patch.date_of_birth,
            gender: patch.gender.as_deref(),
        }
    }
}
