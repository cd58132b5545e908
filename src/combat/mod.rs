//! Combat: state, damage math and the turn scheduler.
//!
//! ## Key Types
//!
//! - `Combatant`: HP, block and statuses shared by the player and enemies
//! - `CombatState`: one fight, owned as a single value
//! - `CombatBuilder`: creates a `CombatState` with its first turn started
//! - `CombatResult`: what a finished fight hands to the run layer
//!
//! The entry points `play_card`, `end_turn` and `select_target` are
//! methods on `CombatState` (see `engine`).

pub mod builder;
pub mod combatant;
pub mod damage;
mod engine;
pub mod result;
pub mod state;

pub use builder::{start_combat, CombatBuilder};
pub use combatant::Combatant;
pub use result::{CombatResult, CombatRewards, Outcome, SurvivingPlayerState};
pub use state::{CombatState, Player};
