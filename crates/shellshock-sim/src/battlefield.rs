//! Battlefield setup: terrain, the two tanks, wind and per-turn state.
//!
//! The battlefield is plain data owned by the turn engine. Collaborators
//! read it through `CombatRules::battlefield()`.

use glam::DVec2;
use rand::Rng;

use shellshock_core::constants::*;
use shellshock_core::enums::TerrainKind;
use shellshock_core::types::Side;
use shellshock_terrain::Terrain;

use crate::entities::{HealthPack, Projectile, Tank};

#[derive(Debug, Clone)]
pub struct Battlefield {
    pub terrain: Terrain,
    /// Indexed by `Side::index()`.
    pub tanks: [Tank; 2],
    pub projectile: Option<Projectile>,
    pub pickup: Option<HealthPack>,
    /// Horizontal wind, in [-WIND_MAX, WIND_MAX].
    pub wind: f64,
    pub active_side: Side,
    pub movement_budget: u32,
    pub max_movement_budget: u32,
    /// Flight path of each side's most recent shot.
    pub trajectories: [Vec<DVec2>; 2],
}

impl Battlefield {
    /// Put both tanks on `terrain` at their start columns, side A to move.
    pub fn new(terrain: Terrain, wind: f64) -> Self {
        let width = terrain.width() as f64;
        let tanks = [
            Tank::new(Side::A, TANK_START_INSET, &terrain),
            Tank::new(Side::B, width - TANK_START_INSET, &terrain),
        ];
        let budget = movement_budget_for(terrain.kind());

        Self {
            terrain,
            tanks,
            projectile: None,
            pickup: None,
            wind,
            active_side: Side::A,
            movement_budget: budget,
            max_movement_budget: budget,
            trajectories: [Vec::new(), Vec::new()],
        }
    }

    pub fn width(&self) -> f64 {
        self.terrain.width() as f64
    }

    pub fn tank(&self, side: Side) -> &Tank {
        &self.tanks[side.index()]
    }

    pub fn tank_mut(&mut self, side: Side) -> &mut Tank {
        &mut self.tanks[side.index()]
    }

    pub fn trajectory(&self, side: Side) -> &[DVec2] {
        &self.trajectories[side.index()]
    }

    /// Drop every tank back onto the ground.
    pub fn settle_tanks(&mut self) {
        for tank in &mut self.tanks {
            tank.settle(&self.terrain);
        }
    }
}

/// Moves per turn. Rougher ground gets a bigger allowance.
pub fn movement_budget_for(kind: TerrainKind) -> u32 {
    match kind {
        TerrainKind::Flat => MOVES_PER_TURN_FLAT,
        TerrainKind::Hill | TerrainKind::Curvy | TerrainKind::Valley => MOVES_PER_TURN_RUGGED,
    }
}

pub fn random_wind<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(-WIND_MAX..=WIND_MAX)
}

/// Build a fresh battlefield. `kind = None` picks a random terrain shape.
pub fn setup_battle<R: Rng + ?Sized>(
    kind: Option<TerrainKind>,
    width: usize,
    rng: &mut R,
) -> Battlefield {
    let kind = kind.unwrap_or_else(|| shellshock_terrain::random_kind(rng));
    let terrain = Terrain::generate(kind, width, rng);
    let wind = random_wind(rng);
    Battlefield::new(terrain, wind)
}
