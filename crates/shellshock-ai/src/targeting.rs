//! Targeting heuristic.
//!
//! Pure functions compute a candidate angle and power from the geometry
//! between the two tanks. [`TargetingAi`] wraps them with an injected,
//! seedable random source that supplies aiming error and decides whether
//! to nudge the aim or fire.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use shellshock_core::enums::{ActionKind, Difficulty};

use crate::profiles::{get_profile, AimProfile};

/// Elevation used against a target at zero distance.
const BASE_ANGLE_NEAR: f64 = 45.0;
/// Extra elevation at full field width.
const BASE_ANGLE_SPAN: f64 = 30.0;
/// Elevation correction for a target above or below the shooter.
const HEIGHT_ADJUST: f64 = 10.0;
const ANGLE_LIMITS: (f64, f64) = (10.0, 170.0);

/// Power used against a target at zero distance.
const BASE_POWER_NEAR: f64 = 20.0;
/// Extra power at full field width.
const BASE_POWER_SPAN: f64 = 80.0;
const POWER_LIMITS: (f64, f64) = (10.0, 100.0);

/// Input to the heuristic for one decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetingContext {
    pub own_x: f64,
    pub own_y: f64,
    /// Current barrel angle in degrees.
    pub own_angle: f64,
    /// Current power in percent.
    pub own_power: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub field_width: f64,
}

impl TargetingContext {
    /// Horizontal distance as a fraction of the field width.
    fn distance_fraction(&self) -> f64 {
        if self.field_width <= 0.0 {
            return 0.0;
        }
        ((self.target_x - self.own_x).abs() / self.field_width).min(1.0)
    }

    fn target_is_left(&self) -> bool {
        self.target_x < self.own_x
    }
}

/// Candidate barrel angle before error.
///
/// Elevation grows linearly from 45° to 75° with distance, gains 10° against
/// a higher target and loses 10° against a lower one (smaller y is higher).
/// The result is mirrored into the left half-plane when the target is to
/// the left.
pub fn ideal_angle(ctx: &TargetingContext) -> f64 {
    aim_angle(ctx, 0.0)
}

/// Candidate power before error: 20% at point blank up to 100% at full width.
pub fn ideal_power(ctx: &TargetingContext) -> f64 {
    aim_power(ctx, 0.0)
}

/// Candidate angle with `error` degrees of elevation error, clamped to
/// the heuristic's limits.
pub fn aim_angle(ctx: &TargetingContext, error: f64) -> f64 {
    let mut elevation = BASE_ANGLE_NEAR + ctx.distance_fraction() * BASE_ANGLE_SPAN;

    let height_diff = ctx.target_y - ctx.own_y;
    if height_diff < 0.0 {
        elevation += HEIGHT_ADJUST;
    } else if height_diff > 0.0 {
        elevation -= HEIGHT_ADJUST;
    }
    elevation += error;

    let angle = if ctx.target_is_left() {
        180.0 - elevation
    } else {
        elevation
    };
    angle.clamp(ANGLE_LIMITS.0, ANGLE_LIMITS.1)
}

/// Candidate power with `error` percent of error, clamped to the
/// heuristic's limits.
pub fn aim_power(ctx: &TargetingContext, error: f64) -> f64 {
    let power = BASE_POWER_NEAR + ctx.distance_fraction() * BASE_POWER_SPAN + error;
    power.clamp(POWER_LIMITS.0, POWER_LIMITS.1)
}

/// Single step toward a candidate angle, or `None` if already close enough.
pub fn angle_correction(current: f64, candidate: f64, tolerance: f64) -> Option<ActionKind> {
    if (current - candidate).abs() <= tolerance {
        return None;
    }
    Some(if current < candidate {
        ActionKind::IncreaseAngle
    } else {
        ActionKind::DecreaseAngle
    })
}

/// Single step toward a candidate power, or `None` if already close enough.
pub fn power_correction(current: f64, candidate: f64, tolerance: f64) -> Option<ActionKind> {
    if (current - candidate).abs() <= tolerance {
        return None;
    }
    Some(if current < candidate {
        ActionKind::IncreasePower
    } else {
        ActionKind::DecreasePower
    })
}

/// A computer opponent with its own random source.
#[derive(Debug, Clone)]
pub struct TargetingAi {
    difficulty: Difficulty,
    profile: AimProfile,
    rng: ChaCha8Rng,
}

impl TargetingAi {
    /// Create an AI whose randomness is fully determined by `seed`.
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(difficulty: Difficulty, rng: ChaCha8Rng) -> Self {
        Self {
            difficulty,
            profile: get_profile(difficulty),
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Choose the next action: occasionally a one-step aim correction,
    /// otherwise fire.
    pub fn next_action(&mut self, ctx: &TargetingContext) -> ActionKind {
        let roll = self.rng.gen_range(0..10);
        let tolerance = self.profile.tolerance;

        if roll < self.profile.angle_adjust_rolls {
            let candidate = aim_angle(ctx, self.sample_error());
            if let Some(kind) = angle_correction(ctx.own_angle, candidate, tolerance) {
                return kind;
            }
        } else if roll < self.profile.power_adjust_rolls {
            let candidate = aim_power(ctx, self.sample_error());
            if let Some(kind) = power_correction(ctx.own_power, candidate, tolerance) {
                return kind;
            }
        }

        ActionKind::Fire
    }

    /// Symmetric error in [-max_error, max_error).
    fn sample_error(&mut self) -> f64 {
        (self.rng.gen::<f64>() * 2.0 - 1.0) * self.profile.max_error
    }
}
