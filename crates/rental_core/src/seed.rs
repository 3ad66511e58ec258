//! Initial fleet and account data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::error::Result;
use crate::fleet::{Vehicle, VehicleClass};
use crate::zone::Zone;

/// Vehicles and accounts a service starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub vehicles: Vec<Vehicle>,
    pub accounts: Vec<Account>,
}

impl SeedData {
    /// Five vehicles spread over the three zones and three customers.
    pub fn demo() -> Self {
        Self {
            vehicles: vec![
                Vehicle::new("ABC123", VehicleClass::Economy, "Toyota", "Yaris", Zone::Inner),
                Vehicle::new("XYZ456", VehicleClass::MidClass, "Honda", "Accord", Zone::Middle),
                Vehicle::new("DEF789", VehicleClass::Deluxe, "Mercedes", "S-Class", Zone::Outer),
                Vehicle::new("ABC1234", VehicleClass::Economy, "Toyota", "Yaris_2", Zone::Outer),
                Vehicle::new("ABC1235", VehicleClass::MidClass, "Honda", "Accord_2", Zone::Outer),
            ],
            accounts: vec![
                Account::new("Federica", "Ferrari", "Via A", "ABC", "DEF"),
                Account::new("Giulia", "Bianchi", "Via B", "GHI", "LMN"),
                Account::new("Martina", "Rossi", "Via C", "OPQ", "RST"),
            ],
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
