//! Run-layer hand-off: what persists between combats.
//!
//! The engine reads `PlayerResources` and `RunDeck` when a combat starts
//! and never writes to them. The run layer applies a finished combat's
//! result through `CombatResult::apply_to` and the methods here.

pub mod deck;
pub mod error;
pub mod resources;

pub use deck::RunDeck;
pub use error::RunError;
pub use resources::{Blessing, BlessingEffect, PlayerResources};
