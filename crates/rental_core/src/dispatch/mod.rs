//! Rental dispatch: choose a vehicle for a request, then book the trip on it.

pub mod dispatcher;
pub mod first_available;
pub mod nearest;
pub mod policy;
pub mod types;

pub use dispatcher::{apply_trip, BookingContext, RentalDispatcher};
pub use first_available::FirstAvailable;
pub use nearest::NearestZone;
pub use policy::SelectionPolicy;
pub use types::{Selection, ServiceOutcome, VehicleBinding, WaitEstimate};
