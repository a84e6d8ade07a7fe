//! Position component: where a tower stands on the board.

use crate::component::{Component, ComponentKind};
use crate::handles::PlacementPoint;

/// Where the tower stands on the board
#[derive(Debug, Clone)]
pub struct Position {
    point: PlacementPoint,
}

impl Position {
    pub fn new(point: PlacementPoint) -> Self {
        Self { point }
    }

    pub fn point(&self) -> PlacementPoint {
        self.point
    }

    /// Move to a new board location. Non-finite targets are ignored.
    pub fn relocate(&mut self, point: PlacementPoint) -> bool {
        if !point.is_finite() {
            return false;
        }
        self.point = point;
        true
    }
}

impl Component for Position {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Position
    }
}
