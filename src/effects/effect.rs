//! Effect descriptors.
//!
//! A card's behavior is data: an ordered list of `EffectDescriptor`s.
//! Enemy intents are translated into the same descriptors, so both sides of
//! a combat go through one resolver.

use serde::{Deserialize, Serialize};

use crate::status::StatusKind;

/// Who a descriptor is aimed at, from the acting side's point of view.
///
/// For a card, `Enemy` is the targeted enemy. For an enemy intent, `Enemy`
/// is the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSelector {
    /// The single targeted opponent.
    Enemy,
    /// Every living opponent.
    AllEnemies,
    /// The acting combatant.
    Actor,
}

/// Gate evaluated immediately before each repeat of a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// The most recent damage in this resolution pass reduced its target to 0 HP.
    Kills,
    /// The target's HP is at or below this percent of its max HP.
    EnemyBelow(u32),
}

/// Which cards an `UpgradeCard` descriptor improves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeScope {
    /// The first upgradable card in hand.
    #[default]
    One,
    /// Every upgradable Attack card in hand.
    AllAttacks,
}

/// The primitive a descriptor performs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Damage { amount: u32 },
    DamageAll { amount: u32 },
    Block { amount: u32 },
    Heal { amount: u32 },
    Draw { count: u32 },
    GainEnergy { amount: u32 },
    /// HP loss that ignores block and modifiers.
    LoseHp { amount: u32 },
    ApplyStatus {
        kind: StatusKind,
        stacks: u32,
        duration: Option<i32>,
    },
    UpgradeCard { scope: UpgradeScope },
}

/// One step of a card or intent.
///
/// ```
/// use forge_combat::effects::{Condition, EffectDescriptor};
///
/// // "Deal 10 damage. If this kills an enemy, gain 2 Energy."
/// let effects = vec![
///     EffectDescriptor::damage(10),
///     EffectDescriptor::gain_energy(2).when(Condition::Kills),
/// ];
/// assert!(effects[0].needs_single_target());
/// assert!(!effects[1].needs_single_target());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    pub kind: EffectKind,

    /// Checked before every repeat.
    #[serde(default)]
    pub condition: Option<Condition>,

    /// Repeat count, at least 1.
    #[serde(default = "default_times")]
    pub times: u32,

    /// Explicit target; `None` uses the kind's default.
    #[serde(default)]
    pub target: Option<TargetSelector>,
}

fn default_times() -> u32 {
    1
}

impl EffectDescriptor {
    /// Wrap a kind with no condition, one repeat and its default target.
    pub fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            condition: None,
            times: 1,
            target: None,
        }
    }

    /// Deal damage to the targeted enemy.
    pub fn damage(amount: u32) -> Self {
        Self::new(EffectKind::Damage { amount })
    }

    /// Deal damage to every living enemy.
    pub fn damage_all(amount: u32) -> Self {
        Self::new(EffectKind::DamageAll { amount })
    }

    pub fn block(amount: u32) -> Self {
        Self::new(EffectKind::Block { amount })
    }

    pub fn heal(amount: u32) -> Self {
        Self::new(EffectKind::Heal { amount })
    }

    pub fn draw(count: u32) -> Self {
        Self::new(EffectKind::Draw { count })
    }

    pub fn gain_energy(amount: u32) -> Self {
        Self::new(EffectKind::GainEnergy { amount })
    }

    pub fn lose_hp(amount: u32) -> Self {
        Self::new(EffectKind::LoseHp { amount })
    }

    /// Apply a permanent status. Defaults to the actor; see `on`.
    pub fn apply_status(kind: StatusKind, stacks: u32) -> Self {
        Self::new(EffectKind::ApplyStatus {
            kind,
            stacks,
            duration: None,
        })
    }

    /// Upgrade one card in hand for the rest of the combat.
    pub fn upgrade_card() -> Self {
        Self::new(EffectKind::UpgradeCard {
            scope: UpgradeScope::One,
        })
    }

    /// Upgrade every attack in hand for the rest of the combat.
    pub fn upgrade_all_attacks() -> Self {
        Self::new(EffectKind::UpgradeCard {
            scope: UpgradeScope::AllAttacks,
        })
    }

    /// Repeat the descriptor `times` times (minimum 1).
    #[must_use]
    pub fn times(mut self, times: u32) -> Self {
        self.times = times.max(1);
        self
    }

    /// Gate the descriptor on a condition.
    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Aim the descriptor explicitly.
    #[must_use]
    pub fn on(mut self, target: TargetSelector) -> Self {
        self.target = Some(target);
        self
    }

    /// Give an `ApplyStatus` descriptor a duration. Other kinds are unchanged.
    #[must_use]
    pub fn for_turns(mut self, turns: i32) -> Self {
        if let EffectKind::ApplyStatus { duration, .. } = &mut self.kind {
            *duration = Some(turns);
        }
        self
    }

    /// Target after applying the kind's default.
    ///
    /// Damage aims at the targeted enemy, DamageAll at every enemy,
    /// everything else at the actor.
    #[must_use]
    pub fn resolved_target(&self) -> TargetSelector {
        if let Some(target) = self.target {
            return target;
        }
        match self.kind {
            EffectKind::Damage { .. } => TargetSelector::Enemy,
            EffectKind::DamageAll { .. } => TargetSelector::AllEnemies,
            _ => TargetSelector::Actor,
        }
    }

    /// Does resolving this descriptor require a living single-enemy target?
    ///
    /// Only Damage and ApplyStatus read the target. Block, Heal, Draw,
    /// energy and HP loss always act on the actor.
    #[must_use]
    pub fn needs_single_target(&self) -> bool {
        matches!(
            self.kind,
            EffectKind::Damage { .. } | EffectKind::ApplyStatus { .. }
        ) && self.resolved_target() == TargetSelector::Enemy
    }

    /// Does this descriptor deal attack damage?
    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(
            self.kind,
            EffectKind::Damage { .. } | EffectKind::DamageAll { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        assert_eq!(EffectDescriptor::damage(6).resolved_target(), TargetSelector::Enemy);
        assert_eq!(EffectDescriptor::damage_all(8).resolved_target(), TargetSelector::AllEnemies);
        assert_eq!(EffectDescriptor::block(5).resolved_target(), TargetSelector::Actor);
        assert_eq!(
            EffectDescriptor::apply_status(StatusKind::Vigor, 4).resolved_target(),
            TargetSelector::Actor
        );
    }

    #[test]
    fn test_explicit_target() {
        let burn = EffectDescriptor::apply_status(StatusKind::Burn, 3).on(TargetSelector::AllEnemies);
        assert_eq!(burn.resolved_target(), TargetSelector::AllEnemies);
        assert!(!burn.needs_single_target());

        let burn_one = EffectDescriptor::apply_status(StatusKind::Burn, 2).on(TargetSelector::Enemy);
        assert!(burn_one.needs_single_target());
    }

    #[test]
    fn test_times_minimum() {
        assert_eq!(EffectDescriptor::damage(3).times(2).times, 2);
        assert_eq!(EffectDescriptor::damage(3).times(0).times, 1);
    }

    #[test]
    fn test_for_turns() {
        let weak = EffectDescriptor::apply_status(StatusKind::Weak, 1).for_turns(2);
        match weak.kind {
            EffectKind::ApplyStatus { duration, .. } => assert_eq!(duration, Some(2)),
            _ => panic!("Expected ApplyStatus"),
        }

        // Ignored on other kinds
        assert_eq!(EffectDescriptor::block(5).for_turns(2), EffectDescriptor::block(5));
    }

    #[test]
    fn test_is_attack() {
        assert!(EffectDescriptor::damage(1).is_attack());
        assert!(EffectDescriptor::damage_all(1).is_attack());
        assert!(!EffectDescriptor::lose_hp(1).is_attack());
    }

    #[test]
    fn test_serde_defaults() {
        let json = r#"{"kind":{"Draw":{"count":2}}}"#;
        let effect: EffectDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(effect, EffectDescriptor::draw(2));
        assert_eq!(effect.times, 1);
    }
}
