//! Intent execution: what an enemy does on its turn.

use smallvec::SmallVec;

use super::definition::IntentType;
use super::enemy::Enemy;
use crate::combat::CombatState;
use crate::core::EnemyId;
use crate::effects::{EffectResolver, ResolutionContext, ResolveResult};

/// Execute `id`'s current intent against the player, then move its cursor.
///
/// Dead or missing enemies do nothing. The cursor advances even if the
/// combat ended during the intent.
pub fn execute_intent(state: &mut CombatState, id: EnemyId) -> SmallVec<[ResolveResult; 2]> {
    let Some(enemy) = state.living_enemy(id) else {
        return SmallVec::new();
    };
    let Some(intent) = enemy.current_intent().cloned() else {
        tracing::debug!("{} ({}) has no intent", enemy.name(), id);
        return SmallVec::new();
    };

    tracing::debug!("{} ({}) executes {:?}", enemy.name(), id, intent.kind);

    let effects = Enemy::intent_effects(&intent);
    let mut ctx = ResolutionContext::enemy(id);
    let results = EffectResolver::resolve_all(state, &effects, &mut ctx);

    if intent.kind == IntentType::Summon && !state.is_over() {
        if let Some(definition) = intent.summon.clone() {
            state.spawn_enemy(definition);
        }
    }

    if let Some(enemy) = state.enemy_mut(id) {
        enemy.advance();
    }

    results.into_iter().collect()
}
