//! Fleet catalog: the vehicles known to the service and the filters dispatch runs over them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{RentalError, Result};
use crate::pricing::PricingTable;
use crate::request::parse_plate;
use crate::zone::Zone;

/// Cumulative distance after which a vehicle is flagged for maintenance.
pub const SERVICE_THRESHOLD: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Economy,
    MidClass,
    Deluxe,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::Economy,
        VehicleClass::MidClass,
        VehicleClass::Deluxe,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VehicleClass::Economy => "ECO",
            VehicleClass::MidClass => "MID-CLASS",
            VehicleClass::Deluxe => "DELUXE",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleClass {
    type Err = RentalError;

    fn from_str(raw: &str) -> Result<Self> {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "eco" | "economy" => Ok(VehicleClass::Economy),
            "mid" | "midclass" => Ok(VehicleClass::MidClass),
            "deluxe" => Ok(VehicleClass::Deluxe),
            _ => Err(RentalError::InvalidInput {
                field: "vehicle class",
                reason: format!("'{raw}' is not one of ECO, MID-CLASS, DELUXE"),
            }),
        }
    }
}

/// One rentable vehicle.
///
/// Odometer and service fields are only written by the dispatcher after a trip;
/// admin edits go through [`VehicleUpdate`] and leave them alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate: String,
    pub class: VehicleClass,
    pub brand: String,
    pub model: String,
    pub zone: Zone,
    /// Distance driven since the last service.
    #[serde(default)]
    pub cumulative_distance: u32,
    /// Distance left before the next service is due.
    #[serde(default = "default_next_service_remaining")]
    pub next_service_remaining: i64,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub in_service: bool,
}

fn default_next_service_remaining() -> i64 {
    i64::from(SERVICE_THRESHOLD)
}

fn default_available() -> bool {
    true
}

impl Vehicle {
    pub fn new(
        plate: impl Into<String>,
        class: VehicleClass,
        brand: impl Into<String>,
        model: impl Into<String>,
        zone: Zone,
    ) -> Self {
        Self {
            plate: plate.into(),
            class,
            brand: brand.into(),
            model: model.into(),
            zone,
            cumulative_distance: 0,
            next_service_remaining: i64::from(SERVICE_THRESHOLD),
            available: true,
            in_service: false,
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({}, {})", self.brand, self.model, self.class, self.plate)
    }
}

/// Partial admin edit. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleUpdate {
    pub class: Option<VehicleClass>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub zone: Option<Zone>,
}

/// Vehicles in insertion order, keyed by plate.
#[derive(Debug, Clone, Default)]
pub struct FleetCatalog {
    vehicles: Vec<Vehicle>,
}

impl FleetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    /// Lookup ignores surrounding whitespace and case; stored plates are canonical.
    pub fn find_by_plate(&self, plate: &str) -> Option<&Vehicle> {
        let key = plate.trim();
        self.vehicles.iter().find(|v| v.plate.eq_ignore_ascii_case(key))
    }

    pub(crate) fn find_by_plate_mut(&mut self, plate: &str) -> Option<&mut Vehicle> {
        let key = plate.trim();
        self.vehicles
            .iter_mut()
            .find(|v| v.plate.eq_ignore_ascii_case(key))
    }

    /// Vehicles of `class` that are available and seat at least `passengers`.
    ///
    /// Order follows insertion order so callers can break ties deterministically.
    /// A class without a capacity entry in `pricing` yields nothing.
    pub fn eligible_for(
        &self,
        class: VehicleClass,
        passengers: u32,
        pricing: &PricingTable,
    ) -> Vec<&Vehicle> {
        let Some(capacity) = pricing.capacity(class) else {
            return Vec::new();
        };
        if capacity < passengers {
            return Vec::new();
        }
        self.vehicles
            .iter()
            .filter(|v| v.class == class && v.available)
            .collect()
    }

    /// Store a vehicle under its canonical plate. A vehicle flagged for service must
    /// not be marked available.
    pub fn add(&mut self, mut vehicle: Vehicle) -> Result<()> {
        vehicle.plate = parse_plate(&vehicle.plate)?;
        if vehicle.in_service && vehicle.available {
            return Err(RentalError::InvalidInput {
                field: "vehicle state",
                reason: format!("'{}' is in service and cannot be available", vehicle.plate),
            });
        }
        if self.find_by_plate(&vehicle.plate).is_some() {
            return Err(RentalError::DuplicatePlate(vehicle.plate));
        }
        info!(plate = %vehicle.plate, class = %vehicle.class, zone = %vehicle.zone, "vehicle added");
        self.vehicles.push(vehicle);
        Ok(())
    }

    pub fn update(&mut self, plate: &str, update: VehicleUpdate) -> Result<&Vehicle> {
        let vehicle = self
            .find_by_plate_mut(plate)
            .ok_or_else(|| RentalError::VehicleNotFound(plate.to_string()))?;
        if let Some(class) = update.class {
            vehicle.class = class;
        }
        if let Some(brand) = update.brand {
            vehicle.brand = brand;
        }
        if let Some(model) = update.model {
            vehicle.model = model;
        }
        if let Some(zone) = update.zone {
            vehicle.zone = zone;
        }
        info!(plate, "vehicle updated");
        Ok(vehicle)
    }

    pub fn remove(&mut self, plate: &str) -> Result<Vehicle> {
        let key = plate.trim();
        let index = self
            .vehicles
            .iter()
            .position(|v| v.plate.eq_ignore_ascii_case(key))
            .ok_or_else(|| RentalError::VehicleNotFound(plate.to_string()))?;
        info!(plate, "vehicle removed");
        Ok(self.vehicles.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FleetCatalog {
        let mut catalog = FleetCatalog::new();
        catalog
            .add(Vehicle::new("E1", VehicleClass::Economy, "Toyota", "Yaris", Zone::Inner))
            .expect("add E1");
        catalog
            .add(Vehicle::new("M1", VehicleClass::MidClass, "Honda", "Accord", Zone::Middle))
            .expect("add M1");
        catalog
            .add(Vehicle::new("E2", VehicleClass::Economy, "Toyota", "Yaris", Zone::Outer))
            .expect("add E2");
        catalog
    }

    #[test]
    fn eligible_filters_by_class_availability_and_capacity() {
        let mut catalog = catalog();
        catalog.find_by_plate_mut("E2").expect("E2").available = false;
        let pricing = PricingTable::default();

        let plates: Vec<_> = catalog
            .eligible_for(VehicleClass::Economy, 2, &pricing)
            .into_iter()
            .map(|v| v.plate.as_str())
            .collect();
        assert_eq!(plates, vec!["E1"]);

        assert!(catalog.eligible_for(VehicleClass::Economy, 3, &pricing).is_empty());
        assert!(catalog.eligible_for(VehicleClass::Deluxe, 1, &pricing).is_empty());
    }

    #[test]
    fn class_without_capacity_is_never_eligible() {
        let catalog = catalog();
        let pricing = PricingTable::default().without_capacity(VehicleClass::Economy);
        assert!(catalog.eligible_for(VehicleClass::Economy, 0, &pricing).is_empty());
    }

    #[test]
    fn duplicate_plate_is_rejected() {
        let mut catalog = catalog();
        let err = catalog
            .add(Vehicle::new("E1", VehicleClass::Deluxe, "Mercedes", "S", Zone::Outer))
            .unwrap_err();
        assert!(matches!(err, RentalError::DuplicatePlate(plate) if plate == "E1"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn plates_are_stored_canonical_and_found_in_any_case() {
        let mut catalog = catalog();
        catalog
            .add(Vehicle::new(" abc1 ", VehicleClass::Economy, "Fiat", "Panda", Zone::Inner))
            .expect("add");

        assert_eq!(catalog.find_by_plate("ABC1").map(|v| v.plate.as_str()), Some("ABC1"));
        assert!(catalog.find_by_plate("abc1").is_some());
        assert!(matches!(
            catalog.add(Vehicle::new("Abc1", VehicleClass::Deluxe, "Audi", "A8", Zone::Outer)),
            Err(RentalError::DuplicatePlate(plate)) if plate == "ABC1"
        ));
        assert_eq!(catalog.remove("abc1").expect("remove").plate, "ABC1");
    }

    #[test]
    fn blank_plate_is_rejected() {
        let mut catalog = catalog();
        let err = catalog
            .add(Vehicle::new("  ", VehicleClass::Economy, "Fiat", "Panda", Zone::Inner))
            .unwrap_err();
        assert!(matches!(err, RentalError::InvalidInput { field: "license plate", .. }));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn in_service_vehicle_cannot_be_added_as_available() {
        let mut catalog = catalog();
        let mut vehicle = Vehicle::new("SVC", VehicleClass::Economy, "Fiat", "Panda", Zone::Inner);
        vehicle.in_service = true;

        let err = catalog.add(vehicle.clone()).unwrap_err();
        assert!(matches!(err, RentalError::InvalidInput { field: "vehicle state", .. }));
        assert!(catalog.find_by_plate("SVC").is_none());

        vehicle.available = false;
        catalog.add(vehicle).expect("consistent state");
        let pricing = PricingTable::default();
        assert!(catalog
            .eligible_for(VehicleClass::Economy, 1, &pricing)
            .iter()
            .all(|v| v.plate != "SVC"));
    }

    #[test]
    fn update_keeps_odometer_and_service_state() {
        let mut catalog = catalog();
        {
            let vehicle = catalog.find_by_plate_mut("M1").expect("M1");
            vehicle.cumulative_distance = 700;
            vehicle.next_service_remaining = 800;
            vehicle.available = false;
        }

        let updated = catalog
            .update(
                "M1",
                VehicleUpdate {
                    model: Some("Civic".to_string()),
                    zone: Some(Zone::Outer),
                    ..Default::default()
                },
            )
            .expect("update");

        assert_eq!(updated.model, "Civic");
        assert_eq!(updated.brand, "Honda");
        assert_eq!(updated.zone, Zone::Outer);
        assert_eq!(updated.cumulative_distance, 700);
        assert_eq!(updated.next_service_remaining, 800);
        assert!(!updated.available);
    }

    #[test]
    fn update_and_remove_report_missing_plate() {
        let mut catalog = catalog();
        assert!(matches!(
            catalog.update("NOPE", VehicleUpdate::default()),
            Err(RentalError::VehicleNotFound(_))
        ));
        assert!(matches!(catalog.remove("NOPE"), Err(RentalError::VehicleNotFound(_))));

        let removed = catalog.remove("E1").expect("remove");
        assert_eq!(removed.plate, "E1");
        assert!(catalog.find_by_plate("E1").is_none());
    }

    #[test]
    fn parses_class_spellings() {
        assert_eq!("ECO".parse::<VehicleClass>().unwrap(), VehicleClass::Economy);
        assert_eq!("mid-class".parse::<VehicleClass>().unwrap(), VehicleClass::MidClass);
        assert_eq!("MidClass".parse::<VehicleClass>().unwrap(), VehicleClass::MidClass);
        assert_eq!("deluxe".parse::<VehicleClass>().unwrap(), VehicleClass::Deluxe);
        assert!("limo".parse::<VehicleClass>().is_err());
    }
}
