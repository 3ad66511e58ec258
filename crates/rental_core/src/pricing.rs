//! Per-class rental terms: rate per distance unit, seat capacity and cruising speed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RentalError, Result};
use crate::fleet::VehicleClass;

/// Lookup tables keyed by [`VehicleClass`].
///
/// Every lookup returns `Option`: a class missing from a table has no rate, no capacity
/// or no speed, and the caller decides what that means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    /// Currency units charged per distance unit.
    pub rates: BTreeMap<VehicleClass, u32>,
    /// Maximum number of passengers.
    pub capacities: BTreeMap<VehicleClass, u32>,
    /// Distance units per hour, used for wait estimates.
    pub speeds: BTreeMap<VehicleClass, u32>,
}

impl Default for PricingTable {
    fn default() -> Self {
        use VehicleClass::*;
        Self {
            rates: BTreeMap::from([(Economy, 1), (MidClass, 2), (Deluxe, 5)]),
            capacities: BTreeMap::from([(Economy, 2), (MidClass, 4), (Deluxe, 7)]),
            speeds: BTreeMap::from([(Economy, 15), (MidClass, 25), (Deluxe, 50)]),
        }
    }
}

impl PricingTable {
    pub fn rate_per_unit(&self, class: VehicleClass) -> Option<u32> {
        self.rates.get(&class).copied()
    }

    pub fn capacity(&self, class: VehicleClass) -> Option<u32> {
        self.capacities.get(&class).copied()
    }

    pub fn speed(&self, class: VehicleClass) -> Option<u32> {
        self.speeds.get(&class).copied()
    }

    /// Trip cost: `distance * rate_per_unit(class)`.
    pub fn cost(&self, class: VehicleClass, distance: u32) -> Result<u32> {
        let rate = self
            .rate_per_unit(class)
            .ok_or(RentalError::PricingUndefined(class))?;
        distance
            .checked_mul(rate)
            .ok_or(RentalError::CostOverflow { class, distance })
    }

    pub fn without_rate(mut self, class: VehicleClass) -> Self {
        self.rates.remove(&class);
        self
    }

    pub fn without_capacity(mut self, class: VehicleClass) -> Self {
        self.capacities.remove(&class);
        self
    }

    pub fn without_speed(mut self, class: VehicleClass) -> Self {
        self.speeds.remove(&class);
        self
    }
}
