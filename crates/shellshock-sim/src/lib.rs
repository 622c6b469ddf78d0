//! Turn engine for SHELLSHOCK.
//!
//! Owns the battlefield, validates actions against the turn state machine,
//! steps the shell in flight and produces BattlefieldSnapshots for hosts.

pub mod battlefield;
pub mod engine;
pub mod entities;
pub mod systems;

pub use shellshock_core as core;
pub use battlefield::Battlefield;
pub use engine::{BattleConfig, CombatRules};
