//! The player's four card piles and the moves between them.
//!
//! `Piles` owns every card instance of a combat. Each instance lives in
//! exactly one of draw, hand, discard or exhaust; every operation here is a
//! move, never a copy, so the union of the piles is always the full combat
//! deck.
//!
//! Piles are `im::Vector`s: cloning a combat state for a rollout shares
//! the structure instead of copying every card.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, CardKind};
use crate::core::{CardInstanceId, GameRng};

/// Which pile a card is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Draw,
    Hand,
    Discard,
    Exhaust,
}

/// What a draw actually did.
///
/// Running out of cards is not an error: `drawn` is simply smaller than
/// `requested`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DrawOutcome {
    pub drawn: usize,
    pub requested: usize,
    /// The discard pile was shuffled into the draw pile along the way.
    pub reshuffled: bool,
}

impl DrawOutcome {
    /// Did the draw come up short?
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.drawn < self.requested
    }
}

/// Draw, hand, discard and exhaust piles.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use forge_combat::cards::{CardDefinition, CardInstance, CardKind, Rarity};
/// use forge_combat::core::{CardInstanceId, GameRng};
/// use forge_combat::zones::Piles;
///
/// let def = Arc::new(CardDefinition::new("step-back", "Step Back", CardKind::Defense, Rarity::Common, 0));
/// let deck = (0..2).map(|i| CardInstance::new(CardInstanceId::new(i), Arc::clone(&def)));
///
/// let mut rng = GameRng::new(7);
/// let mut piles = Piles::from_deck(deck, &mut rng);
///
/// // Two cards available: the draw stops short without failing.
/// let outcome = piles.draw(5, &mut rng);
/// assert_eq!(outcome.drawn, 2);
/// assert_eq!(piles.hand().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    draw: Vector<CardInstance>,
    hand: Vector<CardInstance>,
    discard: Vector<CardInstance>,
    exhaust: Vector<CardInstance>,
}

impl Piles {
    /// Empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a deck into the draw pile, shuffled.
    pub fn from_deck(deck: impl IntoIterator<Item = CardInstance>, rng: &mut GameRng) -> Self {
        let mut cards: Vec<CardInstance> = deck.into_iter().collect();
        rng.shuffle(&mut cards);
        Self {
            draw: cards.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Put a deck into the draw pile in the given order (front is drawn first).
    #[must_use]
    pub fn from_ordered(deck: impl IntoIterator<Item = CardInstance>) -> Self {
        Self {
            draw: deck.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn draw_pile(&self) -> &Vector<CardInstance> {
        &self.draw
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<CardInstance> {
        &self.hand
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<CardInstance> {
        &self.discard
    }

    #[must_use]
    pub fn exhaust_pile(&self) -> &Vector<CardInstance> {
        &self.exhaust
    }

    /// Cards across all four piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw.len() + self.hand.len() + self.discard.len() + self.exhaust.len()
    }

    /// Find the pile holding a card.
    #[must_use]
    pub fn locate(&self, id: CardInstanceId) -> Option<Pile> {
        [
            (Pile::Draw, &self.draw),
            (Pile::Hand, &self.hand),
            (Pile::Discard, &self.discard),
            (Pile::Exhaust, &self.exhaust),
        ]
        .into_iter()
        .find(|(_, pile)| pile.iter().any(|c| c.id == id))
        .map(|(which, _)| which)
    }

    /// Look up a card in hand.
    #[must_use]
    pub fn find_in_hand(&self, id: CardInstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Draw up to `count` cards from the front of the draw pile.
    ///
    /// When the draw pile runs out mid-draw, the discard pile is shuffled
    /// into it and drawing continues. When both are empty, drawing stops.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> DrawOutcome {
        let mut outcome = DrawOutcome {
            requested: count,
            ..DrawOutcome::default()
        };

        while outcome.drawn < count {
            if self.draw.is_empty() {
                if self.discard.is_empty() {
                    tracing::debug!(
                        "Draw stopped at {}/{}: draw and discard piles empty",
                        outcome.drawn,
                        count
                    );
                    break;
                }
                self.reshuffle_discard(rng);
                outcome.reshuffled = true;
            }

            let Some(card) = self.draw.pop_front() else {
                break;
            };
            tracing::trace!("Drew {} ({})", card.name(), card.id);
            self.hand.push_back(card);
            outcome.drawn += 1;
        }

        outcome
    }

    /// Shuffle the discard pile and put it under the draw pile.
    pub fn reshuffle_discard(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<CardInstance> = std::mem::take(&mut self.discard).into_iter().collect();
        rng.shuffle(&mut cards);
        tracing::debug!("Reshuffled {} discarded cards into the draw pile", cards.len());
        self.draw.extend(cards);
    }

    /// Remove a card from hand.
    pub fn take_from_hand(&mut self, id: CardInstanceId) -> Option<CardInstance> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }

    /// Put a card on top of the discard pile.
    pub fn discard(&mut self, card: CardInstance) {
        tracing::trace!("Discarded {} ({})", card.name(), card.id);
        self.discard.push_back(card);
    }

    /// Remove a card from play for the rest of the combat.
    pub fn exhaust(&mut self, card: CardInstance) {
        tracing::trace!("Exhausted {} ({})", card.name(), card.id);
        self.exhaust.push_back(card);
    }

    /// Move the whole hand to the discard pile, in hand order.
    ///
    /// Returns the number of cards discarded.
    pub fn discard_hand(&mut self) -> usize {
        let hand = std::mem::take(&mut self.hand);
        let count = hand.len();
        self.discard.extend(hand);
        count
    }

    /// Upgrade the first upgradable card in hand, skipping `exclude`.
    ///
    /// Returns the id of the upgraded card.
    pub fn upgrade_first_in_hand(&mut self, exclude: Option<CardInstanceId>) -> Option<CardInstanceId> {
        let pos = self
            .hand
            .iter()
            .position(|c| Some(c.id) != exclude && c.can_upgrade())?;
        let card = self.hand.get_mut(pos)?;
        card.upgrade();
        Some(card.id)
    }

    /// Upgrade every upgradable Attack card in hand, skipping `exclude`.
    ///
    /// Returns the number of cards upgraded.
    pub fn upgrade_attacks_in_hand(&mut self, exclude: Option<CardInstanceId>) -> usize {
        let mut upgraded = 0;
        for card in self.hand.iter_mut() {
            if Some(card.id) != exclude && card.kind() == CardKind::Attack && card.upgrade() {
                upgraded += 1;
            }
        }
        upgraded
    }

    /// Every card in the combat, pile by pile.
    pub fn iter_all(&self) -> impl Iterator<Item = &CardInstance> {
        self.draw
            .iter()
            .chain(self.hand.iter())
            .chain(self.discard.iter())
            .chain(self.exhaust.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, Rarity, UpgradedVersion};
    use crate::effects::EffectDescriptor;
    use std::sync::Arc;

    fn strike() -> Arc<CardDefinition> {
        Arc::new(
            CardDefinition::new("hammer-strike", "Hammer Strike", CardKind::Attack, Rarity::Common, 1)
                .with_effects([EffectDescriptor::damage(6)])
                .with_upgrade(UpgradedVersion::new("Deal 8 damage.", [EffectDescriptor::damage(8)])),
        )
    }

    fn brace() -> Arc<CardDefinition> {
        Arc::new(
            CardDefinition::new("shield-brace", "Shield Brace", CardKind::Defense, Rarity::Common, 1)
                .with_effects([EffectDescriptor::block(5)])
                .with_upgrade(UpgradedVersion::new("Gain 8 Block.", [EffectDescriptor::block(8)])),
        )
    }

    fn cards(def: &Arc<CardDefinition>, ids: std::ops::Range<u32>) -> Vec<CardInstance> {
        ids.map(|i| CardInstance::new(CardInstanceId::new(i), Arc::clone(def)))
            .collect()
    }

    #[test]
    fn test_draw_from_front() {
        let mut rng = GameRng::new(1);
        let mut piles = Piles::from_ordered(cards(&strike(), 0..5));

        let outcome = piles.draw(2, &mut rng);

        assert_eq!(outcome, DrawOutcome { drawn: 2, requested: 2, reshuffled: false });
        let hand: Vec<_> = piles.hand().iter().map(|c| c.id.raw()).collect();
        assert_eq!(hand, vec![0, 1]);
        assert_eq!(piles.draw_pile().len(), 3);
    }

    #[test]
    fn test_draw_reshuffles_discard() {
        let mut rng = GameRng::new(1);
        let mut piles = Piles::from_ordered(cards(&strike(), 0..2));
        for card in cards(&brace(), 10..15) {
            piles.discard(card);
        }

        let outcome = piles.draw(5, &mut rng);

        assert_eq!(outcome.drawn, 5);
        assert!(outcome.reshuffled);
        assert!(!outcome.is_short());
        assert_eq!(piles.hand().len(), 5);
        assert_eq!(piles.draw_pile().len(), 2);
        assert!(piles.discard_pile().is_empty());
        assert_eq!(piles.total_cards(), 7);
    }

    #[test]
    fn test_draw_from_empty_piles() {
        let mut rng = GameRng::new(1);
        let mut piles = Piles::from_ordered(cards(&strike(), 0..1));

        let outcome = piles.draw(3, &mut rng);
        assert_eq!(outcome.drawn, 1);
        assert!(outcome.is_short());

        let outcome = piles.draw(3, &mut rng);
        assert_eq!(outcome.drawn, 0);
        assert!(!outcome.reshuffled);
    }

    #[test]
    fn test_shuffled_deck_is_deterministic() {
        let deck = cards(&strike(), 0..10);
        let a = Piles::from_deck(deck.clone(), &mut GameRng::new(99));
        let b = Piles::from_deck(deck, &mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_moves_keep_cards_unique() {
        let mut rng = GameRng::new(3);
        let mut piles = Piles::from_ordered(cards(&strike(), 0..4));
        piles.draw(3, &mut rng);

        let played = piles.take_from_hand(CardInstanceId::new(1)).unwrap();
        piles.exhaust(played);
        assert_eq!(piles.locate(CardInstanceId::new(1)), Some(Pile::Exhaust));

        assert_eq!(piles.discard_hand(), 2);
        assert_eq!(piles.locate(CardInstanceId::new(0)), Some(Pile::Discard));
        assert_eq!(piles.locate(CardInstanceId::new(3)), Some(Pile::Draw));
        assert_eq!(piles.locate(CardInstanceId::new(42)), None);
        assert_eq!(piles.total_cards(), 4);

        let mut ids: Vec<_> = piles.iter_all().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_take_missing_card() {
        let mut piles = Piles::from_ordered(cards(&strike(), 0..2));
        assert!(piles.take_from_hand(CardInstanceId::new(0)).is_none());
    }

    #[test]
    fn test_upgrade_first_skips_excluded() {
        let mut rng = GameRng::new(3);
        let mut hand = cards(&strike(), 0..1);
        hand.extend(cards(&brace(), 1..2));
        let mut piles = Piles::from_ordered(hand);
        piles.draw(2, &mut rng);

        let upgraded = piles.upgrade_first_in_hand(Some(CardInstanceId::new(0)));
        assert_eq!(upgraded, Some(CardInstanceId::new(1)));

        // Both now ineligible: 0 excluded, 1 already upgraded
        assert_eq!(piles.upgrade_first_in_hand(Some(CardInstanceId::new(0))), None);
    }

    #[test]
    fn test_upgrade_attacks_only() {
        let mut rng = GameRng::new(3);
        let mut hand = cards(&strike(), 0..3);
        hand.extend(cards(&brace(), 3..5));
        let mut piles = Piles::from_ordered(hand);
        piles.draw(5, &mut rng);

        assert_eq!(piles.upgrade_attacks_in_hand(None), 3);
        assert!(piles.hand().iter().filter(|c| c.kind() == CardKind::Defense).all(|c| !c.upgraded));
        assert_eq!(piles.upgrade_attacks_in_hand(None), 0);
    }
}
