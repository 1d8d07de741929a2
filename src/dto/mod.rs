//! DTOs returned by the API endpoints that do not map to a stored record.

pub mod auth;
pub mod health;
