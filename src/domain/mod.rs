//! Domain aggregates exposed by the airport administration service layer.

use crate::domain::filter::ListFilter;

pub mod airline;
pub mod api_user;
pub mod destination;
pub mod filter;
pub mod flight;
pub mod passenger;
pub mod pilot;
pub mod plane_ticket;
pub mod travel_class;
pub mod types;

/// A stored record type and the payloads used to list and change it.
pub trait Entity: Send + 'static {
    /// Human readable name used in logs and error messages.
    const NAME: &'static str;
    /// Restricted records are only visible to administrators.
    const RESTRICTED: bool = false;

    type Filter: ListFilter + Default + Send + 'static;
    /// Full set of writable fields, used for both create and replace.
    type New: Send + 'static;
    type Patch: Patch + Send + 'static;
}

/// Partial update where every field is optional.
pub trait Patch {
    /// Returns `true` when the patch would not change anything.
    fn is_noop(&self) -> bool;
}
