//! The permanent deck.
//!
//! A combat copies this deck and never writes back to it. Changes between
//! combats (rewards, removals, forge upgrades) go through `RunDeck`.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::RunError;
use crate::cards::{CardDefinition, CardInstance};
use crate::core::CardInstanceId;

/// The player's deck across a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDeck {
    cards: Vector<CardInstance>,
    next_id: CardInstanceId,
}

impl RunDeck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck with one fresh instance per definition.
    pub fn from_definitions(definitions: impl IntoIterator<Item = Arc<CardDefinition>>) -> Self {
        let mut deck = Self::new();
        for definition in definitions {
            deck.add_card(definition);
        }
        deck
    }

    /// Add a new copy of a card. Returns its instance id.
    pub fn add_card(&mut self, definition: Arc<CardDefinition>) -> CardInstanceId {
        let id = self.next_id;
        self.next_id = id.next();
        self.cards.push_back(CardInstance::new(id, definition));
        id
    }

    /// Remove a card permanently.
    pub fn remove_card(&mut self, id: CardInstanceId) -> Result<CardInstance, RunError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(RunError::CardNotFound(id))?;
        Ok(self.cards.remove(pos))
    }

    /// Upgrade a card permanently.
    pub fn upgrade_card(&mut self, id: CardInstanceId) -> Result<(), RunError> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RunError::CardNotFound(id))?;

        if card.upgraded {
            return Err(RunError::AlreadyUpgraded(id));
        }
        if !card.upgrade() {
            return Err(RunError::NoUpgradePath(id));
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: CardInstanceId) -> Option<&CardInstance> {
        self.cards.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<CardInstance> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }
}
