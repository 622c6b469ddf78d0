//! Battlefield snapshot: the complete visible state handed to renderers,
//! input mappers and AI after an action or tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Side;

/// Complete read-only copy of the battlefield.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattlefieldSnapshot {
    pub phase: Phase,
    pub active_side: Side,
    pub wind: f64,
    pub movement_budget: u32,
    pub max_movement_budget: u32,
    pub terrain: TerrainView,
    /// Indexed by `Side::index()`.
    pub tanks: Vec<TankView>,
    pub projectile: Option<ProjectileView>,
    pub pickup: Option<PickupView>,
    /// Last shot's flight path per side, indexed by `Side::index()`.
    pub trajectories: Vec<Vec<DVec2>>,
    pub outcome: Outcome,
}

impl BattlefieldSnapshot {
    pub fn tank(&self, side: Side) -> Option<&TankView> {
        self.tanks.get(side.index())
    }
}

/// Ground profile for drawing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainView {
    pub kind: TerrainKind,
    pub width: usize,
    /// One normalized height per pixel column.
    pub heights: Vec<f64>,
}

/// Full tank state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TankView {
    pub side: Side,
    pub x: f64,
    pub y: f64,
    /// Barrel angle in degrees (0 = right, 90 = up, 180 = left).
    pub angle: f64,
    /// Shot power in percent.
    pub power: f64,
    pub health: i32,
    pub alive: bool,
}

/// The shell currently in flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub owner: Side,
    pub position: DVec2,
    pub velocity: DVec2,
}

/// A floating health pack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub position: DVec2,
}
