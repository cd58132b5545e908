//! Rules surface for drivers.
//!
//! `RulesEngine` answers "what can the player do?" and applies the answer.
//! Search and training loops use it instead of calling the scheduler
//! directly.

pub mod engine;

pub use engine::{apply_action, legal_actions, CombatAction, RulesEngine};
