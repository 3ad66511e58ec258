//! Service configuration, loadable from JSON. Every field has a default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatch::{FirstAvailable, NearestZone, SelectionPolicy};
use crate::error::Result;
use crate::fleet::SERVICE_THRESHOLD;
use crate::pricing::PricingTable;
use crate::zone::max_network_span;

/// Which [`SelectionPolicy`] the dispatcher ranks candidates with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    #[default]
    NearestZone,
    FirstAvailable,
}

impl SelectionStrategy {
    pub fn build(self) -> Box<dyn SelectionPolicy> {
        match self {
            SelectionStrategy::NearestZone => Box::new(NearestZone),
            SelectionStrategy::FirstAvailable => Box::new(FirstAvailable),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalConfig {
    /// Odometer reading at which a vehicle is flagged for service.
    pub service_threshold: u32,
    /// Worst-case travel distance across the network, used for wait estimates.
    pub max_network_span: u32,
    pub selection: SelectionStrategy,
    pub pricing: PricingTable,
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            service_threshold: SERVICE_THRESHOLD,
            max_network_span: max_network_span(),
            selection: SelectionStrategy::default(),
            pricing: PricingTable::default(),
        }
    }
}

impl RentalConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
