//! Core types and definitions for the SHELLSHOCK artillery duel.
//!
//! This crate defines the vocabulary shared across all other crates:
//! actions, state snapshots, events, enums, and constants.
//! It has no simulation logic and no dependency on any host shell.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
