//! Health pack: a floating box that heals whoever shoots it.

use glam::DVec2;

use shellshock_core::constants::{HEAL_AMOUNT, PACK_SIZE, PACK_VERTICAL_SCALE};
use shellshock_core::state::PickupView;
use shellshock_core::types::Bounds;

use super::Collidable;

#[derive(Debug, Clone, PartialEq)]
pub struct HealthPack {
    position: DVec2,
    active: bool,
}

impl HealthPack {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            active: true,
        }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Health restored to the shooter.
    pub fn heal_amount(&self) -> i32 {
        HEAL_AMOUNT
    }

    pub fn view(&self) -> PickupView {
        PickupView {
            position: self.position,
        }
    }
}

impl Collidable for HealthPack {
    fn bounds(&self) -> Bounds {
        Bounds::centered(
            self.position,
            PACK_SIZE / 2.0,
            PACK_SIZE * PACK_VERTICAL_SCALE,
        )
    }

    fn is_collidable(&self) -> bool {
        self.active
    }
}
