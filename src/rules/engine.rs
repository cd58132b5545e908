//! Driver surface for agents, search and UIs.
//!
//! A driver reads `legal_actions`, picks one and feeds it to
//! `apply_action`. Every action `legal_actions` returns is accepted by
//! `apply_action` on the same state.

use serde::{Deserialize, Serialize};

use crate::combat::{CombatState, Outcome};
use crate::core::{CardInstanceId, CombatError, CombatPhase, EnemyId};
use crate::effects::ResolveResult;

/// Something the player can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatAction {
    PlayCard {
        card: CardInstanceId,
        target: Option<EnemyId>,
    },
    EndTurn,
}

impl std::fmt::Display for CombatAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatAction::PlayCard { card, target: Some(target) } => write!(f, "play {} -> {}", card, target),
            CombatAction::PlayCard { card, target: None } => write!(f, "play {}", card),
            CombatAction::EndTurn => f.write_str("end turn"),
        }
    }
}

/// Rules queries over a combat.
///
/// ## Implementation Notes
///
/// - `legal_cards`: empty outside `PlayerActing`
/// - `legal_targets`: empty when the card needs no single target
/// - `apply_action`: deterministic given the combat's RNG state
pub trait RulesEngine {
    /// Cards in hand the player can afford right now.
    fn legal_cards(&self) -> Vec<CardInstanceId>;

    /// Enemies a card may be aimed at.
    fn legal_targets(&self, card: CardInstanceId) -> Vec<EnemyId>;

    /// Apply an action. Rejections leave the combat unchanged.
    fn apply_action(&mut self, action: &CombatAction) -> Result<Vec<ResolveResult>, CombatError>;

    /// `Some` once the combat is over.
    fn outcome(&self) -> Option<Outcome>;

    /// Every legal action: each affordable card crossed with its targets,
    /// then `EndTurn`.
    fn legal_actions(&self) -> Vec<CombatAction> {
        let mut actions = Vec::new();
        if self.outcome().is_some() {
            return actions;
        }

        for card in self.legal_cards() {
            let targets = self.legal_targets(card);
            if targets.is_empty() {
                actions.push(CombatAction::PlayCard { card, target: None });
            } else {
                actions.extend(
                    targets
                        .into_iter()
                        .map(|target| CombatAction::PlayCard { card, target: Some(target) }),
                );
            }
        }

        actions.push(CombatAction::EndTurn);
        actions
    }
}

impl RulesEngine for CombatState {
    fn legal_cards(&self) -> Vec<CardInstanceId> {
        if self.phase != CombatPhase::PlayerActing {
            return Vec::new();
        }
        self.player
            .piles
            .hand()
            .iter()
            .filter(|c| c.energy_cost() <= self.player.energy)
            .map(|c| c.id)
            .collect()
    }

    fn legal_targets(&self, card: CardInstanceId) -> Vec<EnemyId> {
        match self.player.piles.find_in_hand(card) {
            Some(card) if card.needs_single_target() => self.living_enemy_ids().into_vec(),
            _ => Vec::new(),
        }
    }

    fn apply_action(&mut self, action: &CombatAction) -> Result<Vec<ResolveResult>, CombatError> {
        match *action {
            CombatAction::PlayCard { card, target } => self.play_card(card, target),
            CombatAction::EndTurn => self.end_turn().map(|()| Vec::new()),
        }
    }

    fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            CombatPhase::Victory => Some(Outcome::Victory),
            CombatPhase::Defeat => Some(Outcome::Defeat),
            _ => None,
        }
    }
}

/// Every action the player may take now.
#[must_use]
pub fn legal_actions(state: &CombatState) -> Vec<CombatAction> {
    state.legal_actions()
}

/// Apply one action to the combat.
pub fn apply_action(state: &mut CombatState, action: &CombatAction) -> Result<Vec<ResolveResult>, CombatError> {
    tracing::trace!("Applying {}", action);
    RulesEngine::apply_action(state, action)
}
