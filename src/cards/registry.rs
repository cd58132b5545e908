//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition a run can see, behind
//! `Arc` so instances share one copy. It also mints `CardInstance`s.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardKind, Rarity};
use super::instance::CardInstance;
use crate::core::{CardId, CardInstanceId};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use forge_combat::cards::{CardDefinition, CardKind, CardRegistry, Rarity};
/// use forge_combat::core::{CardId, CardInstanceId};
/// use forge_combat::effects::EffectDescriptor;
///
/// let mut registry = CardRegistry::new();
/// registry.register(
///     CardDefinition::new("iron-fist", "Iron Fist", CardKind::Attack, Rarity::Common, 0)
///         .with_effects([EffectDescriptor::damage(3)]),
/// );
///
/// let found = registry.get(&CardId::new("iron-fist")).unwrap();
/// assert_eq!(found.name, "Iron Fist");
///
/// let card = registry.instantiate("iron-fist", CardInstanceId::new(1)).unwrap();
/// assert_eq!(card.energy_cost(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) -> Arc<CardDefinition> {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        let card = Arc::new(card);
        self.cards.insert(card.id.clone(), Arc::clone(&card));
        card
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(id)
    }

    /// Get a card definition by its string key.
    #[must_use]
    pub fn get_str(&self, id: &str) -> Option<&Arc<CardDefinition>> {
        self.cards.get(&CardId::new(id))
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }

    /// Find cards by rarity.
    pub fn by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values().filter(move |c| c.rarity == rarity)
    }

    /// Find cards by kind.
    pub fn by_kind(&self, kind: CardKind) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values().filter(move |c| c.kind == kind)
    }

    /// Create an un-upgraded instance of a registered card.
    #[must_use]
    pub fn instantiate(&self, id: &str, instance_id: CardInstanceId) -> Option<CardInstance> {
        self.get_str(id)
            .map(|def| CardInstance::new(instance_id, Arc::clone(def)))
    }
}
