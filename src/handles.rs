//! Opaque handles for the collaborators a tower is associated with but never
//! owns: the board location it stands on and the player controlling it.

use serde::{Deserialize, Serialize};

/// A board location supplied by the host's map/grid system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementPoint {
    pub x: f64,
    pub y: f64,
}

impl PlacementPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: &PlacementPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Identifies the side controlling a tower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn is_ally_of(&self, other: PlayerId) -> bool {
        *self == other
    }
}
