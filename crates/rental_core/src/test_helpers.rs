//! Test helpers for common test setup and utilities.
//!
//! Shared fixtures for unit tests, integration tests and benches.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::accounts::{Account, ChargeReceipt, PaymentGateway};
use crate::clock::FixedClock;
use crate::config::RentalConfig;
use crate::error::{RentalError, Result};
use crate::fleet::{Vehicle, VehicleClass};
use crate::seed::SeedData;
use crate::service::RentalService;
use crate::zone::Zone;

/// The instant every fixture clock reports.
pub fn test_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0)
        .single()
        .expect("test timestamp should be unambiguous")
}

pub fn fixed_clock() -> Box<FixedClock> {
    Box::new(FixedClock(test_timestamp()))
}

/// A fresh, available vehicle with placeholder display fields.
pub fn vehicle(plate: &str, class: VehicleClass, zone: Zone) -> Vehicle {
    Vehicle::new(plate, class, "TestBrand", "TestModel", zone)
}

pub fn test_account(name: &str) -> Account {
    Account::new(name, "Tester", "Via Test 1", "4000-0000", "DL-0001")
}

/// Empty fleet, one registered account named `"tester"`, fixed clock.
pub fn empty_service(config: RentalConfig) -> RentalService {
    let seed = SeedData {
        vehicles: Vec::new(),
        accounts: vec![test_account("tester")],
    };
    RentalService::with_seed(config, seed).with_clock(fixed_clock())
}

/// Demo fleet and accounts with a fixed clock.
pub fn demo_service() -> RentalService {
    RentalService::with_seed(RentalConfig::default(), SeedData::demo()).with_clock(fixed_clock())
}

/// `count` vehicles with random class and zone. Same seed, same fleet.
pub fn random_fleet(seed: u64, count: usize) -> Vec<Vehicle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let class = VehicleClass::ALL[rng.gen_range(0..VehicleClass::ALL.len())];
            let zone = Zone::ALL[rng.gen_range(0..Zone::ALL.len())];
            vehicle(&format!("RND{i:05}"), class, zone)
        })
        .collect()
}

/// Gateway that refuses every charge.
#[derive(Debug, Default)]
pub struct DecliningGateway;

impl PaymentGateway for DecliningGateway {
    fn charge(&mut self, account: &Account, amount: u32) -> Result<ChargeReceipt> {
        Err(RentalError::PaymentDeclined {
            account: account.name.clone(),
            amount,
            reason: "card declined".to_string(),
        })
    }
}
