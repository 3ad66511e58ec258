use crate::fleet::Vehicle;
use crate::zone::Zone;

/// Strategy that picks one vehicle out of the eligible candidates for a pickup zone.
///
/// Candidates arrive already filtered for class, availability and capacity, in catalog
/// insertion order. Implementations must be deterministic for a given input order.
///
/// # Examples
///
/// ```rust
/// use rental_core::dispatch::{NearestZone, SelectionPolicy};
/// use rental_core::fleet::{Vehicle, VehicleClass};
/// use rental_core::zone::Zone;
///
/// let far = Vehicle::new("FAR1", VehicleClass::Economy, "Toyota", "Yaris", Zone::Outer);
/// let near = Vehicle::new("NEAR1", VehicleClass::Economy, "Toyota", "Yaris", Zone::Inner);
/// let chosen = NearestZone.choose(Zone::Inner, &[&far, &near]);
/// assert_eq!(chosen.map(|v| v.plate.as_str()), Some("NEAR1"));
/// ```
pub trait SelectionPolicy: Send + Sync + std::fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Return the chosen candidate, or `None` when `candidates` is empty.
    fn choose<'a>(&self, origin: Zone, candidates: &[&'a Vehicle]) -> Option<&'a Vehicle>;
}
