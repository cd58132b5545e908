//! Shipped game data: the card library, Act 1 enemies, blessings and the
//! starter deck.
//!
//! Everything here is plain data built with the public constructors, so a
//! run layer can mix it with its own definitions.

mod blessings;
mod cards;
mod enemies;

pub use blessings::all_blessings;
pub use cards::{all_cards, card_registry};
pub use enemies::{
    act1_basic, act1_bosses, act1_elites, bone_warrior, corrupted_hoplite, enemy_by_id, flame_sprite,
    forge_breaker, hell_hound, imp_swarm, lost_soul, molochs_wrath, tormented_soul, weapon_eater,
};

use crate::cards::CardRegistry;
use crate::run::RunDeck;

/// (card id, copies) in the starting deck.
pub const STARTER_DECK: [(&str, usize); 3] = [("hammer-strike", 5), ("shield-brace", 4), ("temper", 1)];

/// The deck every run starts with. Ids missing from `registry` are skipped.
#[must_use]
pub fn starter_deck(registry: &CardRegistry) -> RunDeck {
    let definitions = STARTER_DECK.iter().flat_map(|&(id, copies)| {
        registry
            .get_str(id)
            .into_iter()
            .flat_map(move |definition| std::iter::repeat(definition.clone()).take(copies))
    });
    RunDeck::from_definitions(definitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_deck() {
        let deck = starter_deck(&card_registry());
        assert_eq!(deck.len(), 10);
        assert_eq!(deck.iter().filter(|c| c.card_id().as_str() == "hammer-strike").count(), 5);
        assert_eq!(deck.iter().filter(|c| c.card_id().as_str() == "shield-brace").count(), 4);
        assert_eq!(deck.iter().filter(|c| c.card_id().as_str() == "temper").count(), 1);
    }

    #[test]
    fn test_starter_deck_without_cards() {
        assert!(starter_deck(&CardRegistry::new()).is_empty());
    }
}
