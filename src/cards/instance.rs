//! Card instances - one physical copy of a card.
//!
//! An instance pairs a shared `CardDefinition` with a unique id and an
//! `upgraded` flag. When upgraded, every effective accessor (cost, effects,
//! description) reads from the definition's `UpgradedVersion` instead.
//!
//! Combat works on clones of the run deck's instances, so upgrading a card
//! mid-combat never touches the permanent deck.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardKind};
use crate::core::{CardId, CardInstanceId};
use crate::effects::EffectDescriptor;

/// A card instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this copy.
    pub id: CardInstanceId,

    /// Shared definition.
    pub definition: Arc<CardDefinition>,

    /// Is the upgraded version in effect?
    pub upgraded: bool,
}

impl CardInstance {
    /// Create an un-upgraded instance.
    #[must_use]
    pub fn new(id: CardInstanceId, definition: Arc<CardDefinition>) -> Self {
        Self {
            id,
            definition,
            upgraded: false,
        }
    }

    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.definition.id
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.definition.kind
    }

    /// Display name, suffixed with `+` when upgraded.
    #[must_use]
    pub fn name(&self) -> String {
        if self.upgraded {
            format!("{}+", self.definition.name)
        } else {
            self.definition.name.clone()
        }
    }

    /// Effective energy cost.
    #[must_use]
    pub fn energy_cost(&self) -> u32 {
        match self.upgraded_version() {
            Some(up) => up.energy_cost.unwrap_or(self.definition.energy_cost),
            None => self.definition.energy_cost,
        }
    }

    /// Effective effect list.
    #[must_use]
    pub fn effects(&self) -> &[EffectDescriptor] {
        match self.upgraded_version() {
            Some(up) => &up.effects,
            None => &self.definition.effects,
        }
    }

    /// Effective description.
    #[must_use]
    pub fn description(&self) -> &str {
        match self.upgraded_version() {
            Some(up) => &up.description,
            None => &self.definition.description,
        }
    }

    #[must_use]
    pub fn exhausts(&self) -> bool {
        self.definition.exhaust
    }

    /// Can this copy still be upgraded?
    #[must_use]
    pub fn can_upgrade(&self) -> bool {
        !self.upgraded && self.definition.upgraded_version.is_some()
    }

    /// Switch to the upgraded version.
    ///
    /// Returns false (and changes nothing) if already upgraded or the card
    /// has no upgrade.
    pub fn upgrade(&mut self) -> bool {
        if self.can_upgrade() {
            self.upgraded = true;
            true
        } else {
            false
        }
    }

    /// Does the effective effect list need a single-enemy target?
    #[must_use]
    pub fn needs_single_target(&self) -> bool {
        self.effects().iter().any(EffectDescriptor::needs_single_target)
    }

    fn upgraded_version(&self) -> Option<&super::definition::UpgradedVersion> {
        if self.upgraded {
            self.definition.upgraded_version.as_ref()
        } else {
            None
        }
    }
}
