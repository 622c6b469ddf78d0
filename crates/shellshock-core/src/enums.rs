//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Side;

/// Battle phase (top-level state of the turn engine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen; waiting for a start action.
    #[default]
    Setup,
    /// The active side may move, aim and fire.
    Turn,
    /// A shell is flying; only ticks advance the battle.
    InFlight,
    /// One tank destroyed; only a restart is accepted.
    GameOver,
}

/// Every input the turn engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Move left by one step (costs one movement point).
    MoveLeft,
    /// Move right by one step (costs one movement point).
    MoveRight,
    IncreaseAngle,
    DecreaseAngle,
    IncreasePower,
    DecreasePower,
    /// Launch a shell; the turn passes once it lands.
    Fire,
    /// Leave the title screen, or restart after game over.
    StartOrRestart,
}

/// Procedural terrain strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Nearly horizontal battlefield with minimal height variation.
    #[default]
    Flat,
    /// Single hill with randomized position and slopes.
    Hill,
    /// Rolling ground built from layered sine waves.
    Curvy,
    /// V-shaped terrain with a low center point.
    Valley,
}

impl TerrainKind {
    /// Kinds picked at random when a battle starts. Valley is only
    /// reachable by asking for it explicitly.
    pub const RANDOM_POOL: [TerrainKind; 3] =
        [TerrainKind::Flat, TerrainKind::Hill, TerrainKind::Curvy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Hill => "Hill",
            Self::Curvy => "Curvy",
            Self::Valley => "Valley",
        }
    }
}

/// AI skill tier. Higher skill means smaller aiming error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Win check result. A battle never ends in a draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Ongoing,
    Won(Side),
}

impl Outcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Ongoing => None,
            Self::Won(side) => Some(*side),
        }
    }
}
