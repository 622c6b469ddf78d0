//! Terrain system for SHELLSHOCK.
//!
//! Procedural height-profile generation and the destructible
//! ground the duel is fought on.

pub use shellshock_core as core;

pub mod generator;
pub mod profile;

// Re-export key types for convenience.
pub use generator::{generate, random_kind};
pub use profile::Terrain;

#[cfg(test)]
mod tests;
