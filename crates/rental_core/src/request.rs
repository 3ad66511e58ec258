//! Request-boundary validation.
//!
//! Each function checks one raw field and either returns the typed value or an
//! [`RentalError::InvalidInput`]. Nothing here retries or prompts; callers decide how
//! to ask again.

use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::error::{RentalError, Result};
use crate::fleet::VehicleClass;
use crate::pricing::PricingTable;
use crate::zone::Zone;

/// First phase of a rental: what kind of vehicle, for how many, picked up where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub class: VehicleClass,
    pub passengers: u32,
    pub origin: Zone,
}

impl TripRequest {
    pub fn new(class: VehicleClass, passengers: u32, origin: Zone) -> Self {
        Self {
            class,
            passengers,
            origin,
        }
    }

    /// Validate all three raw fields of a request.
    pub fn parse(
        class: &str,
        passengers: &str,
        origin: &str,
        pricing: &PricingTable,
    ) -> Result<Self> {
        let class = parse_class(class)?;
        let passengers = parse_passenger_count(passengers, class, pricing)?;
        let origin = parse_zone(origin)?;
        Ok(Self::new(class, passengers, origin))
    }
}

pub fn parse_zone(raw: &str) -> Result<Zone> {
    raw.parse()
}

pub fn parse_class(raw: &str) -> Result<VehicleClass> {
    raw.parse()
}

/// Passenger count as a non-negative integer no larger than the class capacity.
pub fn parse_passenger_count(raw: &str, class: VehicleClass, pricing: &PricingTable) -> Result<u32> {
    let passengers: u32 = raw.trim().parse().map_err(|_| RentalError::InvalidInput {
        field: "passenger count",
        reason: format!("'{raw}' is not a non-negative integer"),
    })?;
    match pricing.capacity(class) {
        Some(capacity) if passengers > capacity => Err(RentalError::InvalidInput {
            field: "passenger count",
            reason: format!("maximum number of passengers for {class} is {capacity}"),
        }),
        _ => Ok(passengers),
    }
}

/// Plates are stored upper-case with surrounding whitespace removed.
pub fn parse_plate(raw: &str) -> Result<String> {
    let plate = raw.trim().to_ascii_uppercase();
    if plate.is_empty() {
        return Err(RentalError::InvalidInput {
            field: "license plate",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(plate)
}

pub fn validate_account(account: &Account) -> Result<()> {
    let fields = [
        ("name", &account.name),
        ("surname", &account.surname),
        ("address", &account.address),
        ("credit card", &account.credit_card),
        ("driving license", &account.driving_license),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(RentalError::InvalidInput {
                field,
                reason: "must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
