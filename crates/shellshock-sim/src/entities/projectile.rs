//! Projectile: the single shell in flight.

use glam::DVec2;

use shellshock_core::constants::*;
use shellshock_core::state::ProjectileView;
use shellshock_core::types::Side;

/// A fired shell. Position is in play-area units (x pixels, y normalized).
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    position: DVec2,
    velocity: DVec2,
    power: f64,
    owner: Side,
    active: bool,
}

/// Gravity multiplier for a shot power.
///
/// `1 / (0.15 + 0.85 * p^1.6)` with `p = power / 100` clamped to [0, 1]:
/// weak shots fall up to ~6.7x faster, full-power shots feel plain gravity.
pub fn gravity_scale(power: f64) -> f64 {
    let p = if power.is_nan() {
        0.0
    } else {
        (power / POWER_MAX).clamp(0.0, 1.0)
    };
    1.0 / (GRAVITY_SCALE_FLOOR + (1.0 - GRAVITY_SCALE_FLOOR) * p.powf(GRAVITY_SCALE_EXPONENT))
}

impl Projectile {
    pub fn new(position: DVec2, velocity: DVec2, power: f64, owner: Side) -> Self {
        Self {
            position,
            velocity,
            power,
            owner,
            active: true,
        }
    }

    /// Shell leaving `origin` at `angle_deg`. Launch speed does not depend
    /// on power; power only changes how hard gravity pulls.
    pub fn launch(origin: DVec2, angle_deg: f64, power: f64, owner: Side) -> Self {
        let rad = angle_deg.to_radians();
        let velocity = DVec2::new(LAUNCH_SPEED_X * rad.cos(), -LAUNCH_SPEED_Y * rad.sin());
        Self::new(origin, velocity, power, owner)
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn owner(&self) -> Side {
        self.owner
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Integrate one step: power-scaled gravity, wind drift, then position.
    pub fn advance(&mut self, gravity: f64, wind: f64, dt: f64) {
        if !self.active {
            return;
        }

        let scale = gravity_scale(self.power);
        self.velocity.y += gravity * dt * BASE_GRAVITY_FACTOR * scale;
        self.velocity.x += wind * dt * WIND_INFLUENCE;
        self.position += self.velocity * dt;
    }

    pub fn view(&self) -> ProjectileView {
        ProjectileView {
            owner: self.owner,
            position: self.position,
            velocity: self.velocity,
        }
    }
}
