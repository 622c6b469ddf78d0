//! Ballistics system: integrates the shell in flight and records its path.

use shellshock_core::constants::MAX_TRAJECTORY_POINTS;

use crate::battlefield::Battlefield;

/// Advance the active projectile one step. No-op when nothing is in flight.
pub fn run(battlefield: &mut Battlefield, gravity: f64, dt: f64) {
    let wind = battlefield.wind;
    let Some(projectile) = battlefield.projectile.as_mut() else {
        return;
    };
    if !projectile.is_active() {
        return;
    }

    projectile.advance(gravity, wind, dt);

    let owner = projectile.owner();
    let position = projectile.position();
    let trail = &mut battlefield.trajectories[owner.index()];
    if trail.len() < MAX_TRAJECTORY_POINTS {
        trail.push(position);
    }
}
