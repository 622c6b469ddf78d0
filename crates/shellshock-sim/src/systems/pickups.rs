//! Pickup spawning: after each resolved shot a health pack may appear.

use glam::DVec2;
use log::debug;
use rand::Rng;

use shellshock_core::constants::*;

use crate::battlefield::Battlefield;
use crate::entities::HealthPack;

/// Roll for a new health pack. At most one pack exists at a time; it floats
/// in the middle half of the field, high enough that ground never covers it.
/// Returns the spawn position if one appeared.
pub fn run<R: Rng + ?Sized>(battlefield: &mut Battlefield, rng: &mut R) -> Option<DVec2> {
    if battlefield.pickup.as_ref().is_some_and(|p| p.is_active()) {
        return None;
    }
    if !rng.gen_bool(PICKUP_SPAWN_CHANCE) {
        return None;
    }

    let width = battlefield.width();
    let min_x = width * PICKUP_MIN_X_FRACTION;
    let max_x = width * PICKUP_MAX_X_FRACTION;
    let x = if max_x > min_x {
        rng.gen_range(min_x..=max_x)
    } else {
        min_x
    };
    let y = rng.gen_range(PICKUP_MIN_Y..=PICKUP_MAX_Y);

    debug!("Health pack spawned at ({x:.1}, {y:.3})");
    let pack = HealthPack::new(x, y);
    let position = pack.position();
    battlefield.pickup = Some(pack);
    Some(position)
}
