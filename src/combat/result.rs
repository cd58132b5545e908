//! What a finished combat hands back to the run layer.

use serde::{Deserialize, Serialize};

use super::state::CombatState;
use crate::cards::CardInstance;
use crate::core::{CombatPhase, GameRng};
use crate::enemies::Loot;
use crate::run::PlayerResources;

/// How a combat ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Loot rolled when a combat is won.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRewards {
    pub divine_favor: u32,
    pub adamant_shards: u32,
    pub card_reward: bool,
    pub artifact: bool,
}

impl CombatRewards {
    /// Sum favor, roll each enemy's shard and artifact chances in order,
    /// and offer a card if any enemy does.
    pub fn roll<'a>(loots: impl Iterator<Item = &'a Loot>, rng: &mut GameRng) -> Self {
        let mut rewards = Self::default();
        for loot in loots {
            rewards.divine_favor = rewards.divine_favor.saturating_add(loot.divine_favor);
            if loot.adamant_shard_chance > 0.0 && rng.roll_chance(loot.adamant_shard_chance) {
                rewards.adamant_shards = rewards.adamant_shards.saturating_add(1);
            }
            if loot.artifact_chance > 0.0 && rng.roll_chance(loot.artifact_chance) {
                rewards.artifact = true;
            }
            rewards.card_reward |= loot.card_reward;
        }
        rewards
    }
}

/// The player as the combat left them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivingPlayerState {
    pub hp: u32,
    pub max_hp: u32,
    /// Favor and shards before rewards.
    pub divine_favor: u32,
    pub adamant_shards: u32,
    /// The permanent deck, untouched by in-combat upgrades and exhausts.
    pub deck: Vec<CardInstance>,
}

/// A completed combat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    pub outcome: Outcome,
    pub turns: u32,
    pub player: SurvivingPlayerState,
    /// `None` on Defeat.
    pub rewards: Option<CombatRewards>,
}

impl CombatResult {
    /// Encode for the persistence layer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.outcome == Outcome::Victory
    }

    /// Commit final HP and any rewards to the run's resources.
    pub fn apply_to(&self, resources: &mut PlayerResources) {
        resources.max_hp = self.player.max_hp;
        resources.hp = self.player.hp.min(self.player.max_hp);

        if let Some(rewards) = self.rewards {
            resources.gain_favor(rewards.divine_favor);
            resources.gain_shards(rewards.adamant_shards);
        }
        tracing::debug!(
            "Applied {:?} result: {}/{} HP, {} favor, {} shards",
            self.outcome,
            resources.hp,
            resources.max_hp,
            resources.divine_favor,
            resources.adamant_shards
        );
    }
}

impl CombatState {
    /// The result of a finished combat, or `None` while it is running.
    #[must_use]
    pub fn result(&self) -> Option<CombatResult> {
        let outcome = match self.phase {
            CombatPhase::Victory => Outcome::Victory,
            CombatPhase::Defeat => Outcome::Defeat,
            _ => return None,
        };

        Some(CombatResult {
            outcome,
            turns: self.turn,
            player: SurvivingPlayerState {
                hp: self.player.combatant.hp,
                max_hp: self.player.combatant.max_hp,
                divine_favor: self.resources.divine_favor,
                adamant_shards: self.resources.adamant_shards,
                deck: self.run_deck.iter().cloned().collect(),
            },
            rewards: match outcome {
                Outcome::Victory => self.rewards,
                Outcome::Defeat => None,
            },
        })
    }
}
