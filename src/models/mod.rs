//! Database models shared across the airport repository.

pub mod airline;
pub mod api_user;
#[cfg(feature = "server")]
pub mod config;
pub mod destination;
pub mod flight;
pub mod passenger;
pub mod pilot;
pub mod plane_ticket;
pub mod travel_class;
