//! In-memory car-rental engine: fleet and account inventory, vehicle selection,
//! trip booking with odometer and service tracking, and an append-only trip ledger.
//!
//! [`service::RentalService`] owns all state; everything else is a component it
//! routes requests through.

pub mod accounts;
pub mod clock;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod fleet;
pub mod ledger;
pub mod pricing;
pub mod receipt;
pub mod request;
pub mod seed;
pub mod service;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;
pub mod zone;

pub use error::{RentalError, Result};
pub use service::RentalService;
