//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type:
//! "Spear Thrust" costs 2 and deals 10 damage no matter which copy is
//! played. Per-copy data (instance id, upgraded for this combat) lives in
//! `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::effects::EffectDescriptor;

/// Broad card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Attack,
    Defense,
    Forge,
    Hybrid,
}

/// Card rarity, ordered from most to least common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// The upgraded form of a card.
///
/// This type has no upgrade slot of its own, so an upgraded card can never
/// be upgraded again: one tier is all the data can express.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradedVersion {
    pub description: String,
    pub effects: Vec<EffectDescriptor>,
    /// Replacement cost. `None` keeps the base cost.
    #[serde(default)]
    pub energy_cost: Option<u32>,
}

impl UpgradedVersion {
    pub fn new(description: impl Into<String>, effects: impl IntoIterator<Item = EffectDescriptor>) -> Self {
        Self {
            description: description.into(),
            effects: effects.into_iter().collect(),
            energy_cost: None,
        }
    }

    /// Change the cost of the upgraded card.
    #[must_use]
    pub fn with_cost(mut self, energy_cost: u32) -> Self {
        self.energy_cost = Some(energy_cost);
        self
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use forge_combat::cards::{CardDefinition, CardKind, Rarity, UpgradedVersion};
/// use forge_combat::effects::EffectDescriptor;
///
/// let strike = CardDefinition::new("hammer-strike", "Hammer Strike", CardKind::Attack, Rarity::Common, 1)
///     .with_description("Deal 6 damage.")
///     .with_effects([EffectDescriptor::damage(6)])
///     .with_tags(["Strike", "Weapon"])
///     .with_upgrade(UpgradedVersion::new("Deal 8 damage.", [EffectDescriptor::damage(8)]));
///
/// assert!(strike.has_tag("Strike"));
/// assert!(strike.needs_single_target());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub kind: CardKind,
    pub rarity: Rarity,
    pub energy_cost: u32,
    pub description: String,

    /// Resolved in declaration order.
    pub effects: Vec<EffectDescriptor>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Played copies go to the exhaust pile instead of discard.
    #[serde(default)]
    pub exhaust: bool,

    #[serde(default)]
    pub upgraded_version: Option<UpgradedVersion>,
}

impl CardDefinition {
    /// Create a definition with no effects.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: CardKind,
        rarity: Rarity,
        energy_cost: u32,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            kind,
            rarity,
            energy_cost,
            description: String::new(),
            effects: Vec::new(),
            tags: Vec::new(),
            exhaust: false,
            upgraded_version: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append effects (builder pattern).
    #[must_use]
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = EffectDescriptor>) -> Self {
        self.effects.extend(effects);
        self
    }

    #[must_use]
    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Mark the card as exhausting when played.
    #[must_use]
    pub fn exhausts(mut self) -> Self {
        self.exhaust = true;
        self
    }

    #[must_use]
    pub fn with_upgrade(mut self, upgraded: UpgradedVersion) -> Self {
        self.upgraded_version = Some(upgraded);
        self
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Does the base version need a single-enemy target?
    #[must_use]
    pub fn needs_single_target(&self) -> bool {
        self.effects.iter().any(EffectDescriptor::needs_single_target)
    }
}
