//! The player's persistent resources and passive blessings.

use serde::{Deserialize, Serialize};

use super::error::RunError;
use crate::status::StatusKind;

/// What a blessing does in combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlessingEffect {
    /// Start every combat with a permanent status.
    StartCombatBuff { kind: StatusKind, stacks: u32 },
    /// Start every combat with block.
    StartCombatBlock(u32),
    /// Extra energy on the first turn of every combat.
    StartCombatEnergy(u32),
    /// Damage a random living enemy at the start of every player turn.
    StartTurnDamage(u32),
    /// Extra cards drawn every turn.
    DrawPerTurn(u32),
    /// Added to the nominal damage of every card.
    DamageBonus(u32),
    /// Added to the nominal block of every card.
    BlockBonus(u32),
}

/// A passive granted by the meta layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blessing {
    pub id: String,
    pub name: String,
    pub effect: BlessingEffect,
}

impl Blessing {
    pub fn new(id: impl Into<String>, name: impl Into<String>, effect: BlessingEffect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            effect,
        }
    }
}

/// HP, currencies and blessings carried between combats.
///
/// ```
/// use forge_combat::run::{Blessing, BlessingEffect, PlayerResources};
///
/// let mut resources = PlayerResources::new(80)
///     .with_blessing(Blessing::new("wrath", "Leonidas' Wrath", BlessingEffect::DamageBonus(3)));
///
/// resources.gain_favor(40);
/// assert!(resources.spend_favor(50).is_err());
/// assert!(resources.spend_favor(25).is_ok());
/// assert_eq!(resources.divine_favor, 15);
/// assert_eq!(resources.damage_bonus(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResources {
    pub hp: u32,
    pub max_hp: u32,
    pub divine_favor: u32,
    pub adamant_shards: u32,
    pub blessings: Vec<Blessing>,
}

impl PlayerResources {
    /// Full HP, nothing else.
    #[must_use]
    pub fn new(max_hp: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            divine_favor: 0,
            adamant_shards: 0,
            blessings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    #[must_use]
    pub fn with_blessing(mut self, blessing: Blessing) -> Self {
        self.blessings.push(blessing);
        self
    }

    pub fn add_blessing(&mut self, blessing: Blessing) {
        tracing::info!("Blessing gained: {}", blessing.name);
        self.blessings.push(blessing);
    }

    pub fn gain_favor(&mut self, amount: u32) {
        self.divine_favor = self.divine_favor.saturating_add(amount);
    }

    pub fn spend_favor(&mut self, amount: u32) -> Result<(), RunError> {
        if amount > self.divine_favor {
            return Err(RunError::InsufficientFavor {
                required: amount,
                available: self.divine_favor,
            });
        }
        self.divine_favor -= amount;
        Ok(())
    }

    pub fn gain_shards(&mut self, amount: u32) {
        self.adamant_shards = self.adamant_shards.saturating_add(amount);
    }

    pub fn spend_shards(&mut self, amount: u32) -> Result<(), RunError> {
        if amount > self.adamant_shards {
            return Err(RunError::InsufficientShards {
                required: amount,
                available: self.adamant_shards,
            });
        }
        self.adamant_shards -= amount;
        Ok(())
    }

    /// Heal up to max HP. Returns the HP restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp - self.hp.min(self.max_hp));
        self.hp += healed;
        healed
    }

    /// Iterate over blessing effects.
    pub fn blessing_effects(&self) -> impl Iterator<Item = BlessingEffect> + '_ {
        self.blessings.iter().map(|b| b.effect)
    }

    /// Sum of every `DamageBonus`.
    #[must_use]
    pub fn damage_bonus(&self) -> u32 {
        self.blessing_effects()
            .map(|e| match e {
                BlessingEffect::DamageBonus(n) => n,
                _ => 0,
            })
            .sum()
    }

    /// Sum of every `BlockBonus`.
    #[must_use]
    pub fn block_bonus(&self) -> u32 {
        self.blessing_effects()
            .map(|e| match e {
                BlessingEffect::BlockBonus(n) => n,
                _ => 0,
            })
            .sum()
    }

    /// Sum of every `DrawPerTurn`.
    #[must_use]
    pub fn extra_draw(&self) -> u32 {
        self.blessing_effects()
            .map(|e| match e {
                BlessingEffect::DrawPerTurn(n) => n,
                _ => 0,
            })
            .sum()
    }
}
