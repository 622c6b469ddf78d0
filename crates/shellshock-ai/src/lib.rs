//! Targeting AI for SHELLSHOCK.
//!
//! Distance/height aiming heuristics with difficulty-scaled random error.
//! Operates on plain data; the turn engine builds the context.

pub mod profiles;
pub mod targeting;

pub use shellshock_core as core;
pub use targeting::{TargetingAi, TargetingContext};
