use crate::fleet::Vehicle;
use crate::zone::Zone;

use super::policy::SelectionPolicy;

/// Baseline policy: the first eligible vehicle in catalog order, wherever it is parked.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailable;

impl SelectionPolicy for FirstAvailable {
    fn name(&self) -> &'static str {
        "first_available"
    }

    fn choose<'a>(&self, _origin: Zone, candidates: &[&'a Vehicle]) -> Option<&'a Vehicle> {
        candidates.first().copied()
    }
}
