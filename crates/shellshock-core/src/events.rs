//! Events emitted by the turn engine for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::TerrainKind;
use crate::types::Side;

/// Something noteworthy that happened during an action or tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// Setup left; the first turn begins.
    BattleStarted { terrain: TerrainKind, first: Side },
    /// A shell left the barrel.
    ShotFired { side: Side, angle: f64, power: f64 },
    /// A shell struck the ground and carved a crater.
    TerrainHit { x: f64, y: f64 },
    /// A shell struck a tank.
    TankHit { side: Side, damage: i32, health: i32 },
    /// A tank's health reached zero.
    TankDestroyed { side: Side },
    /// A shell struck a health pack, healing its shooter.
    PickupCollected { side: Side, amount: i32, health: i32 },
    /// A new health pack appeared.
    PickupSpawned { x: f64, y: f64 },
    /// A shell left the play area.
    OutOfBounds { x: f64, y: f64 },
    /// Control passed to another side.
    TurnChanged { side: Side, wind: f64 },
    /// The battle is decided.
    GameOver { winner: Side },
}
