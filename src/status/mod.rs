//! Status effects: stacked modifiers attached to a combatant.
//!
//! - `StatusKind`: what the modifier does
//! - `StatusEffect`: kind + stacks + optional duration
//! - `StatusEffects`: a combatant's set, at most one entry per kind
//!
//! The set only stores and merges entries. What each kind *does* to damage,
//! block and HP lives in `combat::damage`.

mod effect;

pub use effect::{StatusEffect, StatusEffects, StatusKind};
