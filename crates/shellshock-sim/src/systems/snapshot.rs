//! Snapshot system: copies the battlefield into a serializable BattlefieldSnapshot.
//!
//! This system is read-only: it never modifies the battlefield.

use shellshock_core::enums::{Outcome, Phase};
use shellshock_core::state::*;
use shellshock_core::types::Side;

use crate::battlefield::Battlefield;

/// Build a complete snapshot from the current battlefield state.
pub fn build_snapshot(battlefield: &Battlefield, phase: Phase, outcome: Outcome) -> BattlefieldSnapshot {
    BattlefieldSnapshot {
        phase,
        active_side: battlefield.active_side,
        wind: battlefield.wind,
        movement_budget: battlefield.movement_budget,
        max_movement_budget: battlefield.max_movement_budget,
        terrain: build_terrain(battlefield),
        tanks: Side::BOTH.iter().map(|&side| battlefield.tank(side).view()).collect(),
        projectile: battlefield
            .projectile
            .as_ref()
            .filter(|p| p.is_active())
            .map(|p| p.view()),
        pickup: battlefield
            .pickup
            .as_ref()
            .filter(|p| p.is_active())
            .map(|p| p.view()),
        trajectories: Side::BOTH
            .iter()
            .map(|&side| battlefield.trajectory(side).to_vec())
            .collect(),
        outcome,
    }
}

fn build_terrain(battlefield: &Battlefield) -> TerrainView {
    TerrainView {
        kind: battlefield.terrain.kind(),
        width: battlefield.terrain.width(),
        heights: battlefield.terrain.heights().to_vec(),
    }
}
