use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::accounts::AccountDirectory;
use crate::config::RentalConfig;
use crate::error::{RentalError, Result};
use crate::fleet::{FleetCatalog, Vehicle, VehicleClass};
use crate::ledger::{TripLedger, TripRecord};
use crate::pricing::PricingTable;
use crate::request::TripRequest;
use crate::zone::{distance, Zone};

use super::policy::SelectionPolicy;
use super::types::{Selection, ServiceOutcome, VehicleBinding, WaitEstimate};

/// Everything a booking may touch. Borrowed mutably for the duration of one booking.
pub struct BookingContext<'a> {
    pub fleet: &'a mut FleetCatalog,
    pub accounts: &'a mut AccountDirectory,
    pub ledger: &'a mut TripLedger,
    pub now: DateTime<Utc>,
}

/// Selection and booking rules for rental trips.
#[derive(Debug)]
pub struct RentalDispatcher {
    pricing: PricingTable,
    service_threshold: u32,
    max_network_span: u32,
    policy: Box<dyn SelectionPolicy>,
}

impl RentalDispatcher {
    pub fn new(config: &RentalConfig) -> Self {
        Self {
            pricing: config.pricing.clone(),
            service_threshold: config.service_threshold,
            max_network_span: config.max_network_span,
            policy: config.selection.build(),
        }
    }

    pub fn with_policy(mut self, policy: Box<dyn SelectionPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Worst-case wait for a vehicle of `class`: the full network span at class speed.
    /// `None` when the class has no speed entry.
    pub fn wait_estimate(&self, class: VehicleClass) -> Option<WaitEstimate> {
        let speed = self.pricing.speed(class).filter(|speed| *speed > 0)?;
        Some(WaitEstimate {
            class,
            hours: f64::from(self.max_network_span) / f64::from(speed),
        })
    }

    /// Selection phase: bind the best eligible vehicle, or explain why none is free.
    pub fn select(&self, fleet: &FleetCatalog, request: &TripRequest) -> Selection {
        let candidates = fleet.eligible_for(request.class, request.passengers, &self.pricing);
        debug!(
            class = %request.class,
            passengers = request.passengers,
            origin = %request.origin,
            candidates = candidates.len(),
            policy = self.policy.name(),
            "selecting vehicle"
        );

        if let Some(vehicle) = self.policy.choose(request.origin, &candidates) {
            return Selection::Bound(VehicleBinding {
                plate: vehicle.plate.clone(),
                class: vehicle.class,
                origin: request.origin,
                passengers: request.passengers,
                approach_distance: distance(vehicle.zone, request.origin),
            });
        }

        match self.wait_estimate(request.class) {
            Some(estimate) => {
                warn!(
                    class = %request.class,
                    hours = estimate.hours,
                    "no eligible vehicle, reporting wait estimate"
                );
                Selection::Wait(estimate)
            }
            None => {
                warn!(class = %request.class, "no eligible vehicle and no wait estimate");
                Selection::NoneAvailable
            }
        }
    }

    /// Booking phase: price the trip, charge the account, then move the vehicle and
    /// record the trip.
    ///
    /// Every failure happens before the vehicle is touched, so an `Err` leaves the
    /// fleet, the ledger and the account charges exactly as they were.
    pub fn book(
        &self,
        ctx: BookingContext<'_>,
        binding: &VehicleBinding,
        destination: Zone,
        account: &str,
    ) -> Result<TripRecord> {
        let vehicle = ctx
            .fleet
            .find_by_plate(&binding.plate)
            .ok_or_else(|| RentalError::VehicleNotFound(binding.plate.clone()))?;
        if !vehicle.available {
            return Err(RentalError::VehicleUnavailable(binding.plate.clone()));
        }

        let trip_distance = distance(binding.origin, destination);
        let cost = self.pricing.cost(vehicle.class, trip_distance)?;
        let class = vehicle.class;

        ctx.accounts.charge(account, cost)?;

        let vehicle = ctx
            .fleet
            .find_by_plate_mut(&binding.plate)
            .ok_or_else(|| RentalError::VehicleNotFound(binding.plate.clone()))?;
        let (updated, outcome) = apply_trip(vehicle, destination, trip_distance, self.service_threshold);
        *vehicle = updated;

        if outcome == ServiceOutcome::DueForService {
            warn!(plate = %vehicle.plate, "vehicle requires service");
        }

        let record = TripRecord {
            plate: binding.plate.clone(),
            account: account.to_string(),
            class,
            origin: binding.origin,
            destination,
            distance: trip_distance,
            cost,
            completed_at: ctx.now,
        };
        info!(
            plate = %record.plate,
            account = %record.account,
            origin = %record.origin,
            destination = %record.destination,
            distance = record.distance,
            cost = record.cost,
            "trip completed"
        );
        ctx.ledger.add(record.clone());
        Ok(record)
    }
}

/// Vehicle state after driving `trip_distance` to `destination`.
///
/// Crossing `service_threshold` flags the vehicle for service and resets its odometer;
/// the remaining distance is computed from the post-reset odometer. The vehicle is
/// unavailable afterwards whether or not it is due for service.
pub fn apply_trip(
    vehicle: &Vehicle,
    destination: Zone,
    trip_distance: u32,
    service_threshold: u32,
) -> (Vehicle, ServiceOutcome) {
    let mut next = vehicle.clone();
    next.zone = destination;
    next.cumulative_distance = next.cumulative_distance.saturating_add(trip_distance);

    let outcome = if next.cumulative_distance >= service_threshold {
        next.in_service = true;
        next.cumulative_distance = 0;
        ServiceOutcome::DueForService
    } else {
        ServiceOutcome::Running
    };

    next.next_service_remaining =
        i64::from(service_threshold) - i64::from(next.cumulative_distance);
    next.available = false;
    (next, outcome)
}
