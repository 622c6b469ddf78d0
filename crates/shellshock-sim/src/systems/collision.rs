//! Collision system: finds what the shell struck and applies the result.
//!
//! Checks run in a fixed order and the first match wins: terrain, tank A,
//! tank B, health pack, play-area bounds.

use glam::DVec2;
use log::debug;

use shellshock_core::constants::{CRATER_RADIUS, OFF_MAP_HEIGHT, TANK_HIT_DAMAGE};
use shellshock_core::events::BattleEvent;
use shellshock_core::types::Side;

use crate::battlefield::Battlefield;
use crate::entities::{Collidable, Projectile};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Impact {
    Terrain { position: DVec2 },
    Tank { side: Side, position: DVec2 },
    Pickup { position: DVec2 },
    OutOfBounds { position: DVec2 },
}

/// Read-only: what, if anything, `projectile` is touching right now.
pub fn detect(battlefield: &Battlefield, projectile: &Projectile) -> Option<Impact> {
    if !projectile.is_active() {
        return None;
    }
    let position = projectile.position();

    if battlefield.terrain.is_collision(position.x, position.y) {
        return Some(Impact::Terrain { position });
    }

    for side in Side::BOTH {
        if battlefield.tank(side).collides_with(projectile) {
            return Some(Impact::Tank { side, position });
        }
    }

    if let Some(pack) = &battlefield.pickup {
        if pack.collides_with(projectile) {
            return Some(Impact::Pickup { position });
        }
    }

    let out_of_bounds = !position.x.is_finite()
        || !position.y.is_finite()
        || position.x < 0.0
        || position.x > battlefield.width()
        || position.y > OFF_MAP_HEIGHT;
    if out_of_bounds {
        return Some(Impact::OutOfBounds { position });
    }

    None
}

/// Apply terrain and entity mutations for an impact caused by `owner`'s shell.
pub fn apply(
    battlefield: &mut Battlefield,
    impact: Impact,
    owner: Side,
    events: &mut Vec<BattleEvent>,
) {
    match impact {
        Impact::Terrain { position } => {
            debug!("Shell from {owner:?} hit ground at ({:.1}, {:.3})", position.x, position.y);
            battlefield.terrain.destroy(position.x, CRATER_RADIUS);
            battlefield.settle_tanks();
            events.push(BattleEvent::TerrainHit {
                x: position.x,
                y: position.y,
            });
        }
        Impact::Tank { side, .. } => {
            let tank = battlefield.tank_mut(side);
            tank.take_damage(TANK_HIT_DAMAGE);
            let health = tank.health();
            debug!("Shell from {owner:?} hit tank {side:?}, health now {health}");
            events.push(BattleEvent::TankHit {
                side,
                damage: TANK_HIT_DAMAGE,
                health,
            });
            if health == 0 {
                events.push(BattleEvent::TankDestroyed { side });
            }
        }
        Impact::Pickup { .. } => {
            let Some(mut pack) = battlefield.pickup.take() else {
                return;
            };
            let amount = pack.heal_amount();
            pack.deactivate();
            let tank = battlefield.tank_mut(owner);
            tank.heal(amount);
            let health = tank.health();
            debug!("Tank {owner:?} collected a health pack, health now {health}");
            events.push(BattleEvent::PickupCollected {
                side: owner,
                amount,
                health,
            });
        }
        Impact::OutOfBounds { position } => {
            debug!("Shell from {owner:?} left the field at x={:.1}", position.x);
            events.push(BattleEvent::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
    }
}
