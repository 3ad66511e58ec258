use tracing::debug;

use crate::fleet::Vehicle;
use crate::zone::{distance, Zone};

use super::policy::SelectionPolicy;

/// Picks the candidate parked closest to the pickup zone.
///
/// Ties go to the candidate seen first, so with catalog order as input the
/// earliest-added vehicle wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestZone;

impl SelectionPolicy for NearestZone {
    fn name(&self) -> &'static str {
        "nearest_zone"
    }

    fn choose<'a>(&self, origin: Zone, candidates: &[&'a Vehicle]) -> Option<&'a Vehicle> {
        let mut best: Option<(&'a Vehicle, u32)> = None;

        for &vehicle in candidates {
            let approach = distance(vehicle.zone, origin);
            debug!(plate = %vehicle.plate, zone = %vehicle.zone, approach, "ranking candidate");
            match best {
                Some((_, best_approach)) if approach >= best_approach => {}
                _ => best = Some((vehicle, approach)),
            }
        }

        best.map(|(vehicle, _)| vehicle)
    }
}
