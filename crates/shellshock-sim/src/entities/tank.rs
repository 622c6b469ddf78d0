//! Tank: a combatant sitting on the terrain.

use glam::DVec2;

use shellshock_core::constants::*;
use shellshock_core::state::TankView;
use shellshock_core::types::{Bounds, Side};
use shellshock_terrain::Terrain;

use super::projectile::Projectile;
use super::Collidable;

/// One side's tank. `y` always equals the terrain height under `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tank {
    side: Side,
    x: f64,
    y: f64,
    angle: f64,
    power: f64,
    health: i32,
}

impl Tank {
    /// Place a fresh tank on the ground at `x` with default aim and full health.
    pub fn new(side: Side, x: f64, terrain: &Terrain) -> Self {
        Self {
            side,
            x,
            y: terrain.height_at(x),
            angle: DEFAULT_ANGLE,
            power: DEFAULT_POWER,
            health: MAX_HEALTH,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Barrel angle in degrees, 0 = right, 90 = up, 180 = left.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Shot power in percent.
    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Shift horizontally and drop onto the ground. No bounds or budget
    /// checks happen here.
    pub fn move_by(&mut self, delta: f64, terrain: &Terrain) {
        self.x += delta;
        self.settle(terrain);
    }

    /// Re-seat the tank on the ground after the terrain changed.
    pub fn settle(&mut self, terrain: &Terrain) {
        self.y = terrain.height_at(self.x);
    }

    pub fn adjust_angle(&mut self, delta: f64) {
        self.angle = (self.angle + delta).clamp(ANGLE_MIN, ANGLE_MAX);
    }

    pub fn adjust_power(&mut self, delta: f64) {
        self.power = (self.power + delta).clamp(POWER_MIN, POWER_MAX);
    }

    /// Set angle and power directly, clamped to their ranges.
    pub fn aim(&mut self, angle: f64, power: f64) {
        self.angle = angle.clamp(ANGLE_MIN, ANGLE_MAX);
        self.power = power.clamp(POWER_MIN, POWER_MAX);
    }

    /// Lose health, never dropping below zero.
    pub fn take_damage(&mut self, damage: i32) {
        self.health = self.health.saturating_sub(damage.max(0)).max(0);
    }

    /// Regain health up to `MAX_HEALTH`. A destroyed tank stays destroyed.
    pub fn heal(&mut self, amount: i32) {
        if !self.is_alive() {
            return;
        }
        self.health = self.health.saturating_add(amount.max(0)).min(MAX_HEALTH);
    }

    /// End of the barrel: one barrel length along the aim direction.
    pub fn barrel_tip(&self) -> DVec2 {
        let rad = self.angle.to_radians();
        DVec2::new(
            self.x + BARREL_LENGTH_PX * rad.cos(),
            self.y - BARREL_LENGTH_NORM * rad.sin(),
        )
    }

    /// Build a shell leaving the barrel with the current aim.
    pub fn fire(&self) -> Projectile {
        Projectile::launch(self.barrel_tip(), self.angle, self.power, self.side)
    }

    pub fn view(&self) -> TankView {
        TankView {
            side: self.side,
            x: self.x,
            y: self.y,
            angle: self.angle,
            power: self.power,
            health: self.health,
            alive: self.is_alive(),
        }
    }
}

impl Collidable for Tank {
    /// Hull box: centered horizontally, standing on the ground.
    fn bounds(&self) -> Bounds {
        Bounds::new(
            self.x - TANK_WIDTH / 2.0,
            self.x + TANK_WIDTH / 2.0,
            self.y - TANK_HEIGHT,
            self.y,
        )
    }
}
