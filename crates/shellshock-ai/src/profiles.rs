//! Difficulty-specific aiming profiles.
//!
//! Consolidates per-tier parameters for the targeting heuristic.

use shellshock_core::enums::Difficulty;

/// Aiming profile for a difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimProfile {
    /// Largest error (degrees for angle, percent for power) added to a
    /// candidate aim. Drawn uniformly from [-max_error, max_error].
    pub max_error: f64,
    /// Out of ten: rolls below this adjust the angle instead of firing.
    pub angle_adjust_rolls: u32,
    /// Out of ten: rolls below this (and not below the angle threshold)
    /// adjust the power instead of firing.
    pub power_adjust_rolls: u32,
    /// Current aim within this distance of the candidate counts as close
    /// enough to fire.
    pub tolerance: f64,
}

/// Get the aiming profile for a given difficulty.
pub fn get_profile(difficulty: Difficulty) -> AimProfile {
    let max_error = match difficulty {
        Difficulty::Easy => 20.0,
        Difficulty::Medium => 10.0,
        Difficulty::Hard => 5.0,
    };

    AimProfile {
        max_error,
        angle_adjust_rolls: 2,
        power_adjust_rolls: 4,
        tolerance: 5.0,
    }
}
