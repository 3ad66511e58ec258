//! `RentalService`: the one context object that owns the fleet, the accounts and the
//! ledger, and routes requests through the dispatcher.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::accounts::{Account, AccountDirectory, AccountUpdate, PaymentGateway};
use crate::clock::{Clock, SystemClock};
use crate::config::RentalConfig;
use crate::dispatch::{BookingContext, RentalDispatcher, Selection, SelectionPolicy, VehicleBinding};
use crate::error::{RentalError, Result};
use crate::fleet::{FleetCatalog, Vehicle, VehicleUpdate};
use crate::ledger::{TripLedger, TripRecord};
use crate::receipt::Receipt;
use crate::request::TripRequest;
use crate::seed::SeedData;
use crate::zone::Zone;

/// Where a vehicle is, as reported by [`RentalService::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusLocation {
    Parked { zone: Zone },
    /// Rented out; the route of its latest trip.
    Rented { origin: Zone, destination: Zone },
}

impl fmt::Display for StatusLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLocation::Parked { zone } => write!(f, "{zone}"),
            StatusLocation::Rented {
                origin,
                destination,
            } => write!(f, "{origin} -> {destination}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStatus {
    pub plate: String,
    pub location: StatusLocation,
    pub cumulative_distance: u32,
    pub next_service_remaining: i64,
    pub in_service: bool,
    pub available: bool,
}

#[derive(Debug)]
pub struct RentalService {
    config: RentalConfig,
    dispatcher: RentalDispatcher,
    fleet: FleetCatalog,
    accounts: AccountDirectory,
    ledger: TripLedger,
    clock: Box<dyn Clock>,
}

impl Default for RentalService {
    fn default() -> Self {
        Self::new(RentalConfig::default())
    }
}

impl RentalService {
    pub fn new(config: RentalConfig) -> Self {
        Self {
            dispatcher: RentalDispatcher::new(&config),
            config,
            fleet: FleetCatalog::new(),
            accounts: AccountDirectory::default(),
            ledger: TripLedger::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Build a service and load `seed` into it. Seed entries that fail validation are
    /// skipped with a warning.
    pub fn with_seed(config: RentalConfig, seed: SeedData) -> Self {
        let mut service = Self::new(config);
        for vehicle in seed.vehicles {
            if let Err(err) = service.fleet.add(vehicle) {
                warn!(%err, "skipping seed vehicle");
            }
        }
        for account in seed.accounts {
            if let Err(err) = service.accounts.register(account) {
                warn!(%err, "skipping seed account");
            }
        }
        service
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_gateway(mut self, gateway: Box<dyn PaymentGateway>) -> Self {
        self.accounts.set_gateway(gateway);
        self
    }

    pub fn with_policy(mut self, policy: Box<dyn SelectionPolicy>) -> Self {
        self.dispatcher = self.dispatcher.with_policy(policy);
        self
    }

    pub fn config(&self) -> &RentalConfig {
        &self.config
    }

    pub fn fleet(&self) -> &FleetCatalog {
        &self.fleet
    }

    pub fn accounts(&self) -> &AccountDirectory {
        &self.accounts
    }

    pub fn ledger(&self) -> &TripLedger {
        &self.ledger
    }

    pub fn dispatcher(&self) -> &RentalDispatcher {
        &self.dispatcher
    }

    // Fleet administration.

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<()> {
        self.fleet.add(vehicle)
    }

    pub fn update_vehicle(&mut self, plate: &str, update: VehicleUpdate) -> Result<&Vehicle> {
        self.fleet.update(plate, update)
    }

    pub fn remove_vehicle(&mut self, plate: &str) -> Result<Vehicle> {
        self.fleet.remove(plate)
    }

    // Account administration and self-service.

    pub fn register_account(&mut self, account: Account) -> Result<()> {
        self.accounts.register(account)
    }

    pub fn update_account(&mut self, name: &str, update: AccountUpdate) -> Result<&Account> {
        self.accounts.update(name, update)
    }

    pub fn remove_account(&mut self, name: &str) -> Result<Account> {
        self.accounts.remove(name)
    }

    // Rentals.

    pub fn select_vehicle(&self, request: &TripRequest) -> Selection {
        self.dispatcher.select(&self.fleet, request)
    }

    pub fn book_trip(
        &mut self,
        binding: &VehicleBinding,
        destination: Zone,
        account: &str,
    ) -> Result<TripRecord> {
        let ctx = BookingContext {
            fleet: &mut self.fleet,
            accounts: &mut self.accounts,
            ledger: &mut self.ledger,
            now: self.clock.now(),
        };
        self.dispatcher.book(ctx, binding, destination, account)
    }

    /// Select and book in one call. Fails with [`RentalError::NoEligibleVehicle`] when
    /// nothing can be bound.
    pub fn rent(
        &mut self,
        request: &TripRequest,
        destination: Zone,
        account: &str,
    ) -> Result<TripRecord> {
        let binding = self
            .select_vehicle(request)
            .into_binding(request.class, request.passengers)?;
        self.book_trip(&binding, destination, account)
    }

    pub fn status(&self, plate: &str) -> Result<VehicleStatus> {
        let vehicle = self
            .fleet
            .find_by_plate(plate)
            .ok_or_else(|| RentalError::VehicleNotFound(plate.to_string()))?;

        let location = match self.ledger.find_by_plate(&vehicle.plate) {
            Some(trip) if !vehicle.available => StatusLocation::Rented {
                origin: trip.origin,
                destination: trip.destination,
            },
            _ => StatusLocation::Parked { zone: vehicle.zone },
        };

        Ok(VehicleStatus {
            plate: vehicle.plate.clone(),
            location,
            cumulative_distance: vehicle.cumulative_distance,
            next_service_remaining: vehicle.next_service_remaining,
            in_service: vehicle.in_service,
            available: vehicle.available,
        })
    }

    /// Receipt for a trip taken with a vehicle still in the fleet.
    pub fn receipt(&self, record: &TripRecord) -> Result<Receipt> {
        let vehicle = self
            .fleet
            .find_by_plate(&record.plate)
            .ok_or_else(|| RentalError::VehicleNotFound(record.plate.clone()))?;
        Ok(Receipt::new(record, vehicle))
    }
}
