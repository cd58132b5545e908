//! Enemies: authored definitions, live instances and intent execution.
//!
//! An enemy's behavior is a cyclic pattern of `IntentTemplate`s. The
//! template under the cursor is the displayed intent; executing it turns
//! the template into effect descriptors and resolves them against the
//! player. HP-threshold abilities can rewrite the pattern mid-combat.

mod definition;
mod enemy;
mod intent;

pub use definition::{
    AbilityAction, AbilityTrigger, EnemyAbility, EnemyDefinition, IntentStatus, IntentTemplate, IntentType, Loot,
};
pub use enemy::Enemy;
pub use intent::execute_intent;
