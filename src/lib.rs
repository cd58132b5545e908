//! # forge-combat
//!
//! The combat rules engine of a turn-based deck-building roguelike: one
//! player against one or more enemies.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Data**: A card is an ordered list of effect descriptors.
//!    Enemy intents compile to the same descriptors, and one resolver
//!    executes both.
//!
//! 2. **Deterministic**: Every random draw goes through the combat's own
//!    `GameRng`. Same seed, same inputs, same combat.
//!
//! 3. **Explicit State**: A `CombatState` is a single value with cheap
//!    clones (`im-rs` persistent vectors), so drivers can branch, search
//!    and undo without engine support.
//!
//! ## Modules
//!
//! - `core`: Ids, phases, RNG, configuration, errors
//! - `status`: Stacked, duration-bearing status effects
//! - `cards`: Card definitions, instances and registry
//! - `zones`: Draw, hand, discard and exhaust piles
//! - `effects`: Effect descriptors and the resolver
//! - `enemies`: Enemy definitions, intent patterns and abilities
//! - `combat`: Combat state, damage math, turn scheduler, results
//! - `rules`: Legal actions and action application for drivers
//! - `run`: Resources, blessings and deck that persist between combats
//! - `content`: Shipped cards, enemies and blessings
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use forge_combat::{content, CombatBuilder, CombatPhase, legal_actions, apply_action};
//!
//! let cards = content::card_registry();
//! let mut combat = CombatBuilder::new()
//!     .enemy(Arc::new(content::imp_swarm()))
//!     .run_deck(&content::starter_deck(&cards))
//!     .seed(7)
//!     .build();
//!
//! while combat.result().is_none() && combat.turn < 50 {
//!     let action = legal_actions(&combat)[0];
//!     apply_action(&mut combat, &action).unwrap();
//! }
//! assert!(matches!(combat.phase, CombatPhase::Victory | CombatPhase::Defeat));
//! ```

pub mod core;
pub mod status;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod enemies;
pub mod combat;
pub mod rules;
pub mod run;
pub mod content;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardId, CardInstanceId, CombatantId, EnemyId,
    CombatPhase, GameRng,
    CombatConfig, CombatError,
};

pub use crate::status::{StatusEffect, StatusEffects, StatusKind};

pub use crate::cards::{CardDefinition, CardInstance, CardKind, CardRegistry, Rarity, UpgradedVersion};

pub use crate::zones::{DrawOutcome, Pile, Piles};

pub use crate::effects::{
    Condition, EffectDescriptor, EffectKind, TargetSelector, UpgradeScope,
    EffectResolver, ResolutionContext, ResolveResult, SkipReason,
};

pub use crate::enemies::{
    AbilityAction, AbilityTrigger, Enemy, EnemyAbility, EnemyDefinition,
    IntentStatus, IntentTemplate, IntentType, Loot,
};

pub use crate::combat::{
    start_combat, CombatBuilder, CombatResult, CombatRewards, CombatState,
    Combatant, Outcome, Player, SurvivingPlayerState,
};

pub use crate::rules::{apply_action, legal_actions, CombatAction, RulesEngine};

pub use crate::run::{Blessing, BlessingEffect, PlayerResources, RunDeck, RunError};
