//! A live enemy: a definition plus its combat state and pattern cursor.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{AbilityAction, AbilityTrigger, EnemyDefinition, IntentTemplate, IntentType};
use crate::combat::Combatant;
use crate::core::{CombatConfig, EnemyId};
use crate::effects::{EffectDescriptor, EffectKind, TargetSelector};

/// An enemy in combat.
///
/// The pattern is copied from the definition because abilities may rewrite
/// it mid-combat. The displayed intent is never stored: it is always
/// `pattern[pattern_index]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub definition: Arc<EnemyDefinition>,
    pub combatant: Combatant,
    pattern: Vector<IntentTemplate>,
    pattern_index: usize,
    /// Indices into `definition.abilities` that have already fired.
    fired_abilities: SmallVec<[usize; 2]>,
}

impl Enemy {
    /// Instantiate a definition, scaling HP to the combat's act.
    #[must_use]
    pub fn new(id: EnemyId, definition: Arc<EnemyDefinition>, config: &CombatConfig) -> Self {
        let max_hp = config.scaled_hp(definition.max_hp, definition.act);
        Self {
            id,
            combatant: Combatant::new(max_hp),
            pattern: definition.pattern.iter().cloned().collect(),
            pattern_index: 0,
            fired_abilities: SmallVec::new(),
            definition,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    /// The action this enemy will take on its next turn.
    ///
    /// `None` only for an enemy with an empty pattern.
    #[must_use]
    pub fn current_intent(&self) -> Option<&IntentTemplate> {
        self.pattern.get(self.pattern_index)
    }

    #[must_use]
    pub fn pattern(&self) -> &Vector<IntentTemplate> {
        &self.pattern
    }

    #[must_use]
    pub fn pattern_index(&self) -> usize {
        self.pattern_index
    }

    /// Move the cursor to the next intent, wrapping at the end.
    pub fn advance(&mut self) {
        if !self.pattern.is_empty() {
            self.pattern_index = (self.pattern_index + 1) % self.pattern.len();
        }
    }

    #[must_use]
    pub fn has_fired(&self, ability_index: usize) -> bool {
        self.fired_abilities.contains(&ability_index)
    }

    /// Fire every ability whose HP threshold has been crossed and that has
    /// not fired yet.
    ///
    /// Called after each event that lowered this enemy's HP. Returns the
    /// indices of the abilities that fired.
    pub fn check_thresholds(&mut self) -> SmallVec<[usize; 2]> {
        let mut fired = SmallVec::new();
        if !self.is_alive() {
            return fired;
        }

        let definition = Arc::clone(&self.definition);
        for (index, ability) in definition.abilities.iter().enumerate() {
            if self.has_fired(index) {
                continue;
            }
            let triggered = match ability.trigger {
                AbilityTrigger::HpAtOrBelow(percent) => self.combatant.hp_at_or_below(percent),
            };
            if !triggered {
                continue;
            }

            tracing::debug!("{} ({}) triggers {}", self.name(), self.id, ability.name);
            for action in &ability.actions {
                self.apply_ability_action(action);
            }
            self.fired_abilities.push(index);
            fired.push(index);
        }
        fired
    }

    fn apply_ability_action(&mut self, action: &AbilityAction) {
        match action {
            AbilityAction::ReplacePattern(pattern) => {
                self.pattern = pattern.iter().cloned().collect();
                self.pattern_index = 0;
            }
            AbilityAction::SplicePattern(templates) => {
                let at = self.pattern_index.min(self.pattern.len());
                for (offset, template) in templates.iter().enumerate() {
                    self.pattern.insert(at + offset, template.clone());
                }
            }
            AbilityAction::GainStatus { kind, stacks } => {
                self.combatant.statuses.add(*kind, *stacks, None);
            }
        }
    }

    /// Translate an intent into effect descriptors, seen from the enemy:
    /// `Enemy` aims at the player, `Actor` at the enemy itself.
    ///
    /// Summon and Unknown produce nothing here; Summon is handled by the
    /// caller since it adds a combatant rather than changing one.
    #[must_use]
    pub fn intent_effects(intent: &IntentTemplate) -> SmallVec<[EffectDescriptor; 2]> {
        let mut effects = SmallVec::new();

        if intent.kind.is_attack() {
            effects.push(EffectDescriptor::damage(intent.value).times(intent.times));
        }

        match intent.kind {
            IntentType::Defend => effects.push(EffectDescriptor::block(intent.value)),
            IntentType::Heal => effects.push(EffectDescriptor::heal(intent.value)),
            IntentType::Buff | IntentType::AttackBuff => {
                if let Some(status) = intent.status {
                    effects.push(status_effect(status, TargetSelector::Actor));
                }
            }
            IntentType::Debuff | IntentType::AttackDebuff => {
                if let Some(status) = intent.status {
                    effects.push(status_effect(status, TargetSelector::Enemy));
                }
            }
            IntentType::Attack
            | IntentType::HeavyAttack
            | IntentType::Summon
            | IntentType::Unknown => {}
        }

        effects
    }
}

fn status_effect(status: super::definition::IntentStatus, target: TargetSelector) -> EffectDescriptor {
    EffectDescriptor::new(EffectKind::ApplyStatus {
        kind: status.kind,
        stacks: status.stacks,
        duration: status.duration,
    })
    .on(target)
}
