//! Player actions sent from the host shell to the turn engine.
//!
//! Actions are applied immediately; an action that does not fit the current
//! phase or side is dropped without touching the battlefield.

use serde::{Deserialize, Serialize};

use crate::enums::ActionKind;
use crate::types::Side;

/// One discrete input, tagged with the side that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub side: Side,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(side: Side, kind: ActionKind) -> Self {
        Self { side, kind }
    }

    /// Start the battle from the title screen, or restart after game over.
    pub fn start(side: Side) -> Self {
        Self::new(side, ActionKind::StartOrRestart)
    }

    pub fn fire(side: Side) -> Self {
        Self::new(side, ActionKind::Fire)
    }
}
