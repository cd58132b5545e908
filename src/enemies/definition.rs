//! Enemy definitions - static enemy data.
//!
//! An `EnemyDefinition` is authored once ("Hell Hound, 18 HP, attacks
//! twice then buffs") and instantiated into an `Enemy` for each combat.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::status::StatusKind;

/// Telegraphed action category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentType {
    Attack,
    Defend,
    Buff,
    Debuff,
    HeavyAttack,
    AttackDebuff,
    AttackBuff,
    Summon,
    Heal,
    Unknown,
}

impl IntentType {
    /// Does this intent deal damage?
    #[must_use]
    pub const fn is_attack(self) -> bool {
        matches!(
            self,
            IntentType::Attack | IntentType::HeavyAttack | IntentType::AttackDebuff | IntentType::AttackBuff
        )
    }
}

/// Status carried by a Buff/Debuff style intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentStatus {
    pub kind: StatusKind,
    pub stacks: u32,
    #[serde(default)]
    pub duration: Option<i32>,
}

/// One entry of an enemy's pattern.
///
/// `value` is damage for attacks, block for Defend and HP for Heal.
/// Buffs and debuffs read their strength from `status`.
///
/// ```
/// use forge_combat::enemies::{IntentTemplate, IntentType};
/// use forge_combat::status::StatusKind;
///
/// let flurry = IntentTemplate::attack(4).times(2);
/// assert_eq!(flurry.kind, IntentType::Attack);
/// assert_eq!(flurry.total_damage(), 8);
///
/// let scorch = IntentTemplate::attack_debuff(6, StatusKind::Burn, 1).for_turns(2);
/// assert_eq!(scorch.status.unwrap().duration, Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntentTemplate {
    pub kind: IntentType,

    #[serde(default)]
    pub value: u32,

    #[serde(default = "default_times")]
    pub times: u32,

    #[serde(default)]
    pub status: Option<IntentStatus>,

    /// What a Summon intent brings in.
    #[serde(default)]
    pub summon: Option<Arc<EnemyDefinition>>,
}

fn default_times() -> u32 {
    1
}

impl IntentTemplate {
    fn new(kind: IntentType, value: u32) -> Self {
        Self {
            kind,
            value,
            times: 1,
            status: None,
            summon: None,
        }
    }

    fn with_status(mut self, kind: StatusKind, stacks: u32) -> Self {
        self.status = Some(IntentStatus {
            kind,
            stacks,
            duration: None,
        });
        self
    }

    pub fn attack(damage: u32) -> Self {
        Self::new(IntentType::Attack, damage)
    }

    pub fn heavy_attack(damage: u32) -> Self {
        Self::new(IntentType::HeavyAttack, damage)
    }

    pub fn defend(block: u32) -> Self {
        Self::new(IntentType::Defend, block)
    }

    /// Apply a status to the enemy itself.
    pub fn buff(kind: StatusKind, stacks: u32) -> Self {
        Self::new(IntentType::Buff, 0).with_status(kind, stacks)
    }

    /// Apply a status to the player.
    pub fn debuff(kind: StatusKind, stacks: u32) -> Self {
        Self::new(IntentType::Debuff, 0).with_status(kind, stacks)
    }

    pub fn attack_debuff(damage: u32, kind: StatusKind, stacks: u32) -> Self {
        Self::new(IntentType::AttackDebuff, damage).with_status(kind, stacks)
    }

    pub fn attack_buff(damage: u32, kind: StatusKind, stacks: u32) -> Self {
        Self::new(IntentType::AttackBuff, damage).with_status(kind, stacks)
    }

    pub fn heal(amount: u32) -> Self {
        Self::new(IntentType::Heal, amount)
    }

    pub fn summon(definition: Arc<EnemyDefinition>) -> Self {
        let mut intent = Self::new(IntentType::Summon, 0);
        intent.summon = Some(definition);
        intent
    }

    pub fn unknown() -> Self {
        Self::new(IntentType::Unknown, 0)
    }

    /// Repeat the hit (minimum 1).
    #[must_use]
    pub fn times(mut self, times: u32) -> Self {
        self.times = times.max(1);
        self
    }

    /// Give the carried status a duration.
    #[must_use]
    pub fn for_turns(mut self, turns: i32) -> Self {
        if let Some(status) = self.status.as_mut() {
            status.duration = Some(turns);
        }
        self
    }

    /// Nominal damage over all repeats, before modifiers.
    #[must_use]
    pub fn total_damage(&self) -> u32 {
        if self.kind.is_attack() {
            self.value.saturating_mul(self.times)
        } else {
            0
        }
    }
}

/// When an ability fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityTrigger {
    /// HP at or below this percent of max HP.
    HpAtOrBelow(u32),
}

/// What an ability does when it fires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AbilityAction {
    /// Swap the pattern and restart it from the first entry.
    ReplacePattern(Vec<IntentTemplate>),
    /// Insert entries at the cursor; they run next.
    SplicePattern(Vec<IntentTemplate>),
    GainStatus { kind: StatusKind, stacks: u32 },
}

/// A passive, HP-triggered ability. Fires at most once per combat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyAbility {
    pub id: String,
    pub name: String,
    pub trigger: AbilityTrigger,
    pub actions: Vec<AbilityAction>,
}

impl EnemyAbility {
    pub fn new(id: impl Into<String>, name: impl Into<String>, trigger: AbilityTrigger) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            trigger,
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: AbilityAction) -> Self {
        self.actions.push(action);
        self
    }
}

/// What defeating an enemy can yield.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Loot {
    #[serde(default)]
    pub divine_favor: u32,
    /// Probability in `0.0..=1.0`.
    #[serde(default)]
    pub adamant_shard_chance: f64,
    #[serde(default)]
    pub card_reward: bool,
    /// Probability in `0.0..=1.0`.
    #[serde(default)]
    pub artifact_chance: f64,
}

impl Loot {
    #[must_use]
    pub fn favor(divine_favor: u32) -> Self {
        Self {
            divine_favor,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_shard_chance(mut self, chance: f64) -> Self {
        self.adamant_shard_chance = chance;
        self
    }

    #[must_use]
    pub fn with_card_reward(mut self) -> Self {
        self.card_reward = true;
        self
    }

    #[must_use]
    pub fn with_artifact_chance(mut self, chance: f64) -> Self {
        self.artifact_chance = chance;
        self
    }
}

/// Static enemy definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    /// Act the enemy belongs to; fighting it later scales its HP.
    pub act: u32,
    #[serde(default)]
    pub is_elite: bool,
    #[serde(default)]
    pub is_boss: bool,
    /// Replayed cyclically.
    pub pattern: Vec<IntentTemplate>,
    #[serde(default)]
    pub abilities: Vec<EnemyAbility>,
    #[serde(default)]
    pub loot: Loot,
}

impl EnemyDefinition {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_hp: u32, act: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_hp,
            act,
            is_elite: false,
            is_boss: false,
            pattern: Vec::new(),
            abilities: Vec::new(),
            loot: Loot::default(),
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl IntoIterator<Item = IntentTemplate>) -> Self {
        self.pattern.extend(pattern);
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: EnemyAbility) -> Self {
        self.abilities.push(ability);
        self
    }

    #[must_use]
    pub fn with_loot(mut self, loot: Loot) -> Self {
        self.loot = loot;
        self
    }

    #[must_use]
    pub fn elite(mut self) -> Self {
        self.is_elite = true;
        self
    }

    #[must_use]
    pub fn boss(mut self) -> Self {
        self.is_boss = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_constructors() {
        let buff = IntentTemplate::buff(StatusKind::Strength, 2);
        assert_eq!(buff.kind, IntentType::Buff);
        assert_eq!(buff.value, 0);
        assert_eq!(buff.status.unwrap().stacks, 2);
        assert_eq!(buff.total_damage(), 0);

        let heavy = IntentTemplate::heavy_attack(25);
        assert!(heavy.kind.is_attack());
        assert_eq!(heavy.total_damage(), 25);
    }

    #[test]
    fn test_total_damage_saturates() {
        let flurry = IntentTemplate::attack(u32::MAX).times(3);
        assert_eq!(flurry.total_damage(), u32::MAX);
    }

    #[test]
    fn test_for_turns_without_status_is_noop() {
        let attack = IntentTemplate::attack(5).for_turns(3);
        assert!(attack.status.is_none());
    }

    #[test]
    fn test_definition_builder() {
        let def = EnemyDefinition::new("forge-breaker", "Forge Breaker", 45, 1)
            .elite()
            .with_pattern([IntentTemplate::heavy_attack(12), IntentTemplate::attack(8)])
            .with_loot(Loot::favor(50).with_shard_chance(0.25).with_card_reward());

        assert!(def.is_elite);
        assert!(!def.is_boss);
        assert_eq!(def.pattern.len(), 2);
        assert_eq!(def.loot.divine_favor, 50);
        assert!(def.loot.card_reward);
    }

    #[test]
    fn test_summon_serialization() {
        let imp = Arc::new(
            EnemyDefinition::new("imp", "Imp", 6, 1).with_pattern([IntentTemplate::attack(2)]),
        );
        let caller = EnemyDefinition::new("caller", "Caller", 20, 1)
            .with_pattern([IntentTemplate::summon(imp), IntentTemplate::defend(5)]);

        let json = serde_json::to_string(&caller).unwrap();
        let back: EnemyDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, caller);
        assert_eq!(back.pattern[0].summon.as_ref().unwrap().name, "Imp");
    }

    #[test]
    fn test_intent_serde_defaults() {
        let json = r#"{"kind":"Defend","value":6}"#;
        let intent: IntentTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(intent, IntentTemplate::defend(6));
    }
}
