//! Battlefield entities: tanks, the shell in flight, and health packs.
//!
//! Entities own their own invariants (clamped aim, non-negative health) but
//! never check turn rules; the turn engine decides what may happen to them.

pub mod pickup;
pub mod projectile;
pub mod tank;

use shellshock_core::types::Bounds;

pub use pickup::HealthPack;
pub use projectile::Projectile;
pub use tank::Tank;

/// Anything a shell can strike other than the ground.
pub trait Collidable {
    /// Axis-aligned collision box in play-area units.
    fn bounds(&self) -> Bounds;

    /// Whether the entity can currently be struck.
    fn is_collidable(&self) -> bool {
        true
    }

    /// Point-in-box test against the shell's current position.
    /// Never modifies either side.
    fn collides_with(&self, projectile: &Projectile) -> bool {
        projectile.is_active() && self.is_collidable() && self.bounds().contains(projectile.position())
    }
}
