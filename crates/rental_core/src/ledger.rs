//! Trip ledger: append-only record of completed rentals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fleet::VehicleClass;
use crate::zone::Zone;

/// One completed rental, recorded when the booking is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    pub plate: String,
    pub account: String,
    pub class: VehicleClass,
    pub origin: Zone,
    pub destination: Zone,
    pub distance: u32,
    pub cost: u32,
    pub completed_at: DateTime<Utc>,
}

impl TripRecord {
    /// True when the trip started and ended in the same zone.
    pub fn is_intra_zone(&self) -> bool {
        self.origin == self.destination
    }
}

/// Completed trips in booking order. Records are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct TripLedger {
    records: Vec<TripRecord>,
}

impl TripLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: TripRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent trip taken with the vehicle.
    pub fn find_by_plate(&self, plate: &str) -> Option<&TripRecord> {
        self.records.iter().rev().find(|r| r.plate == plate)
    }

    pub fn total_distance(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.distance)).sum()
    }

    pub fn total_revenue(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.cost)).sum()
    }
}
