//! Fundamental identity and geometry types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One of the two fixed combatants. Side A starts on the left and moves first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub fn opponent(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Array index for per-side storage.
    pub fn index(&self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Axis-aligned bounding box in mixed play-area units
/// (x in pixels, y normalized).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Box of the given half-extents centered on `center`.
    pub fn centered(center: DVec2, half_width: f64, half_height: f64) -> Self {
        Self::new(
            center.x - half_width,
            center.x + half_width,
            center.y - half_height,
            center.y + half_height,
        )
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
