//! Diesel models representing pilots.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::pilot::{
    NewPilot as DomainNewPilot, Pilot as DomainPilot, PilotPatch as DomainPilotPatch,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::pilots)]
/// Diesel model for [`crate::domain::pilot::Pilot`].
pub struct Pilot {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub flying_hours: i32,
    pub airline_id: i32,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::pilots)]
/// Insertable form of [`Pilot`], also used to replace every column.
pub struct NewPilot<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub date_of_birth: NaiveDate,
    pub flying_hours: i32,
    pub airline_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::pilots)]
/// Partial update of a [`Pilot`]; `None` columns are left untouched.
pub struct PilotPatch<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub date_of_birth: Option<NaiveDate>,
    pub flying_hours: Option<i32>,
    pub airline_id: Option<i32>,
}

impl From<Pilot> for DomainPilot {
    fn from(pilot: Pilot) -> Self {
        Self {
            id: pilot.id,
            first_name: pilot.first_name,
            last_name: pilot.last_name,
            date_of_birth: pilot.date_of_birth,
            flying_hours: pilot.flying_hours,
            airline_id: pilot.airline_id,
        }
    }
}

impl<'a> From<&'a DomainNewPilot> for NewPilot<'a> {
    fn from(pilot: &'a DomainNewPilot) -> Self {
        Self {
            first_name: pilot.first_name.as_str(),
            last_name: pilot.last_name.as_str(),
            date_of_birth: pilot.date_of_birth,
            flying_hours: pilot.flying_hours,
            airline_id: pilot.airline_id,
        }
    }
}

impl<'a> From<&'a DomainPilotPatch> for PilotPatch<'a> {
    fn from(patch: &'a DomainPilotPatch) -> Self {
        Self {
            first_name: patch.first_name.as_deref(),
            last_name: patch.last_name.as_deref(),
            date_of_birth: patch.date_of_birth,
            flying_hours: patch.flying_hours,
            airline_id: patch.airline_id,
        }
    }
}
