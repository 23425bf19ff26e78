// Item geometry model
// Read-only snapshot of one laid-out cell, supplied by the host each layout pass

use serde::{Deserialize, Serialize};

use crate::models::date_window::Position;

/// Horizontal extent of a laid-out cell, in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemGeometry {
    pub position: Position,
    pub left_edge: f32,
    pub right_edge: f32,
}

impl ItemGeometry {
    pub fn new(position: Position, left_edge: f32, right_edge: f32) -> Self {
        Self {
            position,
            left_edge,
            right_edge,
        }
    }

    pub fn center(&self) -> f32 {
        (self.left_edge + self.right_edge) / 2.0
    }

    pub fn width(&self) -> f32 {
        self.right_edge - self.left_edge
    }

    pub fn contains_x(&self, x: f32) -> bool {
        self.left_edge <= x && x < self.right_edge
    }
}
