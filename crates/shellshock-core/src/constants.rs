//! Simulation constants and tuning parameters.
//!
//! Horizontal quantities are in pixels of the play area. Vertical quantities
//! are normalized: 0.0 is the top of the play area, 1.0 the bottom.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 25;

/// Seconds per tick (40 ms).
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Battlefield ---

/// Default play-area width in pixels.
pub const DEFAULT_FIELD_WIDTH: usize = 800;

/// Default gravitational acceleration fed to the projectile integrator.
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Wind is drawn uniformly from [-WIND_MAX, WIND_MAX].
pub const WIND_MAX: f64 = 5.0;

// --- Terrain ---

/// Highest ground allowed (smallest normalized height).
pub const TERRAIN_MIN_HEIGHT: f64 = 0.5;

/// Lowest ground allowed (largest normalized height).
pub const TERRAIN_MAX_HEIGHT: f64 = 0.92;

/// Height reported for columns outside the profile ("below ground").
pub const OFF_MAP_HEIGHT: f64 = 1.0;

/// Depth carved at the center of a crater.
pub const CRATER_DEPTH: f64 = 0.1;

/// Crater radius in pixels.
pub const CRATER_RADIUS: f64 = 25.0;

/// Smoothing passes applied over the whole profile after a crater.
pub const CRATER_SMOOTHING_PASSES: usize = 2;

// --- Tanks ---

/// Distance of each starting tank from its own edge of the field.
pub const TANK_START_INSET: f64 = 100.0;

/// Tank collision box width in pixels, centered on the tank's x.
pub const TANK_WIDTH: f64 = 20.0;

/// Tank collision box height (normalized), extending upward from the ground.
pub const TANK_HEIGHT: f64 = 0.03;

pub const MAX_HEALTH: i32 = 100;
pub const DEFAULT_ANGLE: f64 = 45.0;
pub const DEFAULT_POWER: f64 = 50.0;
pub const ANGLE_MIN: f64 = 0.0;
pub const ANGLE_MAX: f64 = 180.0;
pub const POWER_MIN: f64 = 0.0;
pub const POWER_MAX: f64 = 100.0;

/// Degrees per angle adjustment action.
pub const ANGLE_STEP: f64 = 5.0;

/// Percentage points per power adjustment action.
pub const POWER_STEP: f64 = 5.0;

/// Pixels per movement action.
pub const MOVE_STEP: f64 = 10.0;

/// Tanks must stay strictly more than this far from either edge.
pub const MOVE_MARGIN: f64 = 20.0;

/// Movement budget per turn on flat ground.
pub const MOVES_PER_TURN_FLAT: u32 = 5;

/// Movement budget per turn on hills, waves and valleys.
pub const MOVES_PER_TURN_RUGGED: u32 = 7;

// --- Projectile ---

/// Barrel length along the aim direction, horizontal component scale (pixels).
pub const BARREL_LENGTH_PX: f64 = 15.0;

/// Barrel length along the aim direction, vertical component scale (normalized).
pub const BARREL_LENGTH_NORM: f64 = 0.02;

/// Horizontal launch speed (pixels/s) before the cos(angle) factor.
/// Launch speed is the same for every power setting.
pub const LAUNCH_SPEED_X: f64 = 400.0;

/// Vertical launch speed (normalized units/s) before the sin(angle) factor.
pub const LAUNCH_SPEED_Y: f64 = 0.6;

/// Converts `gravity` into normalized vertical acceleration.
pub const BASE_GRAVITY_FACTOR: f64 = 0.0255;

/// Gravity multiplier floor term: scale = 1 / (FLOOR + (1 - FLOOR) * p^EXP).
pub const GRAVITY_SCALE_FLOOR: f64 = 0.15;

/// Exponent applied to normalized power in the gravity multiplier.
pub const GRAVITY_SCALE_EXPONENT: f64 = 1.6;

/// Converts wind into horizontal acceleration (pixels/s² per wind unit).
pub const WIND_INFLUENCE: f64 = 4.0;

/// Damage dealt by a direct hit on a tank.
pub const TANK_HIT_DAMAGE: i32 = 50;

/// Maximum recorded points per side's trajectory trail.
pub const MAX_TRAJECTORY_POINTS: usize = 400;

// --- Pickups ---

/// Health restored to the firing side when its shell hits a health pack.
pub const HEAL_AMOUNT: i32 = 40;

/// Health pack edge length in pixels.
pub const PACK_SIZE: f64 = 30.0;

/// Converts the pack size into normalized vertical half-extent.
pub const PACK_VERTICAL_SCALE: f64 = 0.001;

/// Probability that a health pack appears after a resolved shot.
pub const PICKUP_SPAWN_CHANCE: f64 = 0.3;

/// Health packs float inside this vertical band (normalized).
pub const PICKUP_MIN_Y: f64 = 0.2;
pub const PICKUP_MAX_Y: f64 = 0.4;

/// Health packs spawn within this fraction range of the field width.
pub const PICKUP_MIN_X_FRACTION: f64 = 0.25;
pub const PICKUP_MAX_X_FRACTION: f64 = 0.75;

// --- Events ---

/// Undrained events kept by the engine; older ones are dropped first.
pub const MAX_PENDING_EVENTS: usize = 256;
