use rental_core::fleet::{Vehicle, VehicleClass};
use rental_core::zone::Zone;

/// Builder for vehicle fixtures. Defaults to a fresh, available economy car in the
/// inner zone.
#[derive(Clone, Debug)]
pub struct VehicleBuilder {
    plate: String,
    class: VehicleClass,
    zone: Zone,
    cumulative_distance: u32,
    available: bool,
    in_service: bool,
}

impl VehicleBuilder {
    pub fn new(plate: &str) -> Self {
        Self {
            plate: plate.to_string(),
            class: VehicleClass::Economy,
            zone: Zone::Inner,
            cumulative_distance: 0,
            available: true,
            in_service: false,
        }
    }

    pub fn with_class(mut self, class: VehicleClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_odometer(mut self, cumulative_distance: u32) -> Self {
        self.cumulative_distance = cumulative_distance;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn in_service(mut self) -> Self {
        self.in_service = true;
        self.available = false;
        self
    }

    pub fn build(self) -> Vehicle {
        let mut vehicle = Vehicle::new(self.plate, self.class, "Toyota", "Yaris", self.zone);
        vehicle.cumulative_distance = self.cumulative_distance;
        vehicle.next_service_remaining = 1500 - i64::from(self.cumulative_distance);
        vehicle.available = self.available;
        vehicle.in_service = self.in_service;
        vehicle
    }
}
