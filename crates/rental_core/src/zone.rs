//! Zone model: three concentric service tiers and the travel distance between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RentalError;

/// Fixed cost of a trip that starts and ends in the same zone.
pub const INTRA_ZONE_DISTANCE: u32 = 5;

/// Distance added per tier crossed between two different zones.
pub const TIER_STEP_DISTANCE: u32 = 10;

/// Concentric service tier. Ordered from the centre outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Inner,
    Middle,
    Outer,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Inner, Zone::Middle, Zone::Outer];

    /// Tier number: Inner=1, Middle=2, Outer=3.
    pub fn tier(self) -> u32 {
        match self {
            Zone::Inner => 1,
            Zone::Middle => 2,
            Zone::Outer => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::Inner => "Inner Circle",
            Zone::Middle => "Middle Circle",
            Zone::Outer => "Outer Circle",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = RentalError;

    /// Accepts `inner`, `Inner Circle`, `1` and similar spellings, case-insensitively.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        let key = normalized
            .strip_suffix(" circle")
            .unwrap_or(&normalized)
            .trim();
        match key {
            "inner" | "1" => Ok(Zone::Inner),
            "middle" | "2" => Ok(Zone::Middle),
            "outer" | "3" => Ok(Zone::Outer),
            _ => Err(RentalError::InvalidInput {
                field: "zone",
                reason: format!("'{raw}' is not one of Inner, Middle, Outer"),
            }),
        }
    }
}

/// Travel distance between two zones.
///
/// Staying inside one zone costs [`INTRA_ZONE_DISTANCE`]; otherwise each tier crossed
/// costs [`TIER_STEP_DISTANCE`]. Symmetric and total.
pub fn distance(from: Zone, to: Zone) -> u32 {
    if from == to {
        INTRA_ZONE_DISTANCE
    } else {
        from.tier().abs_diff(to.tier()) * TIER_STEP_DISTANCE
    }
}

/// Largest distance [`distance`] can return: a trip from the inner to the outer zone.
pub fn max_network_span() -> u32 {
    distance(Zone::Inner, Zone::Outer)
}
