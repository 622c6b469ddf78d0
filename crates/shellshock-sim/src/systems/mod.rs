//! Systems the turn engine runs while a shell is in flight.
//!
//! Systems are free functions over `&mut Battlefield` (or `&Battlefield` for
//! read-only). They do not own state; all state lives on the battlefield.

pub mod ballistics;
pub mod collision;
pub mod pickups;
pub mod snapshot;
