//! Core engine types: identifiers, phases, RNG, configuration, errors.
//!
//! Everything here is independent of cards and enemies; the other modules
//! build on these types.

pub mod entity;
pub mod phase;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{CardId, CardInstanceId, CombatantId, EnemyId};
pub use phase::CombatPhase;
pub use rng::GameRng;
pub use config::CombatConfig;
pub use error::CombatError;
