use serde::{Deserialize, Serialize};

use crate::error::{RentalError, Result};
use crate::fleet::VehicleClass;
use crate::zone::Zone;

/// A vehicle chosen for a request, waiting for the customer to name a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleBinding {
    pub plate: String,
    pub class: VehicleClass,
    pub origin: Zone,
    pub passengers: u32,
    /// Zone distance from where the vehicle is parked to the pickup zone.
    pub approach_distance: u32,
}

/// Advisory worst-case wait when no vehicle of the class is free.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaitEstimate {
    pub class: VehicleClass,
    pub hours: f64,
}

/// Outcome of the selection phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Bound(VehicleBinding),
    Wait(WaitEstimate),
    NoneAvailable,
}

impl Selection {
    pub fn binding(&self) -> Option<&VehicleBinding> {
        match self {
            Selection::Bound(binding) => Some(binding),
            _ => None,
        }
    }

    /// Turn a non-binding outcome into [`RentalError::NoEligibleVehicle`].
    pub fn into_binding(self, class: VehicleClass, passengers: u32) -> Result<VehicleBinding> {
        match self {
            Selection::Bound(binding) => Ok(binding),
            Selection::Wait(_) | Selection::NoneAvailable => {
                Err(RentalError::NoEligibleVehicle { class, passengers })
            }
        }
    }
}

/// Whether a booking pushed the vehicle over its service threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOutcome {
    Running,
    DueForService,
}
