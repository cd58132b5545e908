//! Turn scheduler: the entry points that move a combat forward.
//!
//! ```text
//! play_card*  ->  end_turn:
//!                   EndOfPlayerTurn    discard hand, decay player statuses
//!                   EnemyActing        per living enemy: block reset, DoT,
//!                                      intent, advance cursor
//!                   EndOfEnemyTurn     decay enemy statuses
//!                   StartOfPlayerTurn  block reset, DoT, energy, blessings,
//!                                      draw
//!                 -> PlayerActing
//! ```
//!
//! Every HP-affecting step is followed by a terminal check. Once Victory or
//! Defeat is reached the cycle stops where it is.

use smallvec::SmallVec;

use super::damage;
use super::state::CombatState;
use crate::core::{CardInstanceId, CombatError, CombatPhase, EnemyId};
use crate::effects::{EffectResolver, ResolutionContext, ResolveResult};
use crate::enemies::execute_intent;
use crate::run::BlessingEffect;

impl CombatState {
    /// Play a card from hand.
    ///
    /// All preconditions are checked before anything changes: a rejected
    /// play leaves the combat untouched. Cards that need a single enemy
    /// target fall back to the selected target, then to the only living
    /// enemy.
    ///
    /// The card stays in hand while its effects resolve and is discarded
    /// (or exhausted) afterwards, even if the combat ended mid-card.
    pub fn play_card(
        &mut self,
        card_id: CardInstanceId,
        target: Option<EnemyId>,
    ) -> Result<Vec<ResolveResult>, CombatError> {
        if self.phase != CombatPhase::PlayerActing {
            return Err(CombatError::IllegalPhaseAction {
                action: "play a card",
                phase: self.phase,
            });
        }

        let card = self
            .player
            .piles
            .find_in_hand(card_id)
            .ok_or(CombatError::CardNotInHand(card_id))?;

        let cost = card.energy_cost();
        if cost > self.player.energy {
            return Err(CombatError::InsufficientEnergy {
                required: cost,
                available: self.player.energy,
            });
        }

        let target = if card.needs_single_target() {
            Some(self.resolve_target(target)?)
        } else {
            self.resolve_target(target).ok()
        };

        let name = card.name();
        let effects = card.effects().to_vec();

        self.player.energy -= cost;
        tracing::debug!("Playing {} ({}) for {} energy, target {:?}", name, card_id, cost, target);

        let mut ctx = ResolutionContext::card(card_id, target);
        let results = EffectResolver::resolve_all(self, &effects, &mut ctx);

        if let Some(card) = self.player.piles.take_from_hand(card_id) {
            if card.exhausts() {
                self.player.piles.exhaust(card);
            } else {
                self.player.piles.discard(card);
            }
        }

        Ok(results)
    }

    /// End the player's turn and run the enemy turn.
    ///
    /// Returns with the combat back in `PlayerActing` for the next turn, or
    /// in `Victory`/`Defeat` if it ended along the way.
    pub fn end_turn(&mut self) -> Result<(), CombatError> {
        if self.phase != CombatPhase::PlayerActing {
            return Err(CombatError::IllegalPhaseAction {
                action: "end the turn",
                phase: self.phase,
            });
        }

        self.phase = CombatPhase::EndOfPlayerTurn;
        let discarded = self.player.piles.discard_hand();
        self.player.combatant.statuses.decay_durations();
        tracing::debug!("Turn {} ended, {} cards discarded", self.turn, discarded);

        self.run_enemy_turn();
        if self.is_over() {
            return Ok(());
        }

        self.phase = CombatPhase::EndOfEnemyTurn;
        for enemy in self.enemies.iter_mut().filter(|e| e.is_alive()) {
            enemy.combatant.statuses.decay_durations();
        }

        self.start_player_turn();
        Ok(())
    }

    /// Remember an enemy as the default target for single-target cards.
    pub fn select_target(&mut self, id: EnemyId) -> Result<(), CombatError> {
        if self.living_enemy(id).is_none() {
            return Err(CombatError::InvalidTarget(Some(id)));
        }
        self.selected_target = Some(id);
        Ok(())
    }

    /// Each enemy alive at the start of the pass acts once, in order.
    /// Enemies summoned during the pass wait for the next one.
    fn run_enemy_turn(&mut self) {
        self.phase = CombatPhase::EnemyActing;

        let acting: SmallVec<[EnemyId; 4]> = self.living_enemy_ids();
        for id in acting {
            let Some(enemy) = self.enemy_mut(id).filter(|e| e.is_alive()) else {
                continue;
            };

            damage::reset_block(&mut enemy.combatant);
            let tick = damage::tick_start_of_turn(&mut enemy.combatant);
            if tick.hp_lost() > 0 {
                tracing::debug!(
                    "{} ({}) takes {} poison and {} burn",
                    enemy.name(),
                    id,
                    tick.poison_damage,
                    tick.burn_damage
                );
                enemy.check_thresholds();
                if self.check_terminal() {
                    return;
                }
            }

            execute_intent(self, id);
            if self.check_terminal() {
                return;
            }
        }
    }

    /// Begin the next player turn.
    ///
    /// Runs once from the combat builder for turn 1 and afterwards at the
    /// end of every enemy turn.
    pub(crate) fn start_player_turn(&mut self) {
        self.phase = CombatPhase::StartOfPlayerTurn;
        self.turn += 1;
        tracing::info!("Turn {} begins", self.turn);

        let player = &mut self.player.combatant;
        damage::reset_block(player);
        let tick = damage::tick_start_of_turn(player);
        if tick.hp_lost() > 0 && self.check_terminal() {
            return;
        }

        self.player.energy = self.config.max_energy;

        let blessings: SmallVec<[BlessingEffect; 4]> = self.resources.blessing_effects().collect();
        if self.turn == 1 {
            for effect in &blessings {
                self.apply_start_of_combat_blessing(*effect);
            }
        }

        for effect in &blessings {
            if let BlessingEffect::StartTurnDamage(amount) = *effect {
                self.blessing_strike(amount);
                if self.is_over() {
                    return;
                }
            }
        }

        let count = self.config.hand_size + self.resources.extra_draw() as usize;
        let outcome = self.player.piles.draw(count, &mut self.rng);
        if outcome.is_short() {
            tracing::debug!("Drew {} of {} cards", outcome.drawn, outcome.requested);
        }

        self.phase = CombatPhase::PlayerActing;
    }

    fn apply_start_of_combat_blessing(&mut self, effect: BlessingEffect) {
        let player = &mut self.player;
        match effect {
            BlessingEffect::StartCombatBuff { kind, stacks } => {
                player.combatant.statuses.add(kind, stacks, None);
            }
            BlessingEffect::StartCombatBlock(amount) => player.combatant.gain_block(amount),
            BlessingEffect::StartCombatEnergy(amount) => {
                player.energy = player.energy.saturating_add(amount);
            }
            BlessingEffect::StartTurnDamage(_)
            | BlessingEffect::DrawPerTurn(_)
            | BlessingEffect::DamageBonus(_)
            | BlessingEffect::BlockBonus(_) => {}
        }
    }

    /// Hit a random living enemy. The player's statuses do not modify it.
    fn blessing_strike(&mut self, amount: u32) {
        let living = self.living_enemy_ids();
        let Some(index) = self.rng.choose_index(living.len()) else {
            return;
        };
        let id = living[index];
        let Some(enemy) = self.enemy_mut(id) else {
            return;
        };

        let incoming = damage::incoming_damage(amount, &enemy.combatant.statuses);
        let hit = damage::absorb(incoming, &enemy.combatant);
        hit.apply(&mut enemy.combatant);
        tracing::debug!("Blessing strikes {} ({}) for {}", enemy.name(), id, hit.hp_lost());

        if hit.hp_lost() > 0 {
            enemy.check_thresholds();
            self.check_terminal();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::cards::{CardDefinition, CardKind, Rarity};
    use crate::combat::CombatBuilder;
    use crate::core::{CombatConfig, CombatPhase, CombatError, EnemyId};
    use crate::effects::EffectDescriptor;
    use crate::enemies::{EnemyDefinition, IntentTemplate};
    use crate::run::{Blessing, BlessingEffect, PlayerResources, RunDeck};
    use crate::status::StatusKind;

    fn strike() -> Arc<CardDefinition> {
        Arc::new(
            CardDefinition::new("strike", "Strike", CardKind::Attack, Rarity::Common, 1)
                .with_effects([EffectDescriptor::damage(6)]),
        )
    }

    fn dummy(hp: u32, attack: u32) -> Arc<EnemyDefinition> {
        Arc::new(EnemyDefinition::new("dummy", "Dummy", hp, 1).with_pattern([IntentTemplate::attack(attack)]))
    }

    fn deck_of(card: Arc<CardDefinition>, n: usize) -> RunDeck {
        RunDeck::from_definitions(std::iter::repeat(card).take(n))
    }

    fn first_in_hand(state: &crate::combat::CombatState) -> crate::core::CardInstanceId {
        state.player.piles.hand()[0].id
    }

    #[test]
    fn test_first_turn_started() {
        let state = CombatBuilder::new()
            .enemy(dummy(20, 5))
            .run_deck(&deck_of(strike(), 10))
            .seed(1)
            .build();

        assert_eq!(state.phase, CombatPhase::PlayerActing);
        assert_eq!(state.turn, 1);
        assert_eq!(state.player.energy, 3);
        assert_eq!(state.player.piles.hand().len(), 5);
        assert_eq!(state.player.piles.draw_pile().len(), 5);
    }

    #[test]
    fn test_play_card_spends_energy_and_discards() {
        let mut state = CombatBuilder::new()
            .enemy(dummy(20, 5))
            .run_deck(&deck_of(strike(), 10))
            .seed(1)
            .build();

        let card = first_in_hand(&state);
        let results = state.play_card(card, None).unwrap();

        assert_eq!(results.len(), 1);
        assert!(results[0].is_applied());
        assert_eq!(state.player.energy, 2);
        assert_eq!(state.enemies[0].combatant.hp, 14);
        assert_eq!(state.player.piles.hand().len(), 4);
        assert_eq!(state.player.piles.discard_pile().len(), 1);
    }

    #[test]
    fn test_rejected_play_changes_nothing() {
        let mut state = CombatBuilder::new()
            .enemy(dummy(20, 5))
            .run_deck(&deck_of(strike(), 10))
            .config(CombatConfig::default().with_max_energy(0))
            .seed(1)
            .build();

        let before = state.clone();
        let card = first_in_hand(&state);

        assert_eq!(
            state.play_card(card, None),
            Err(CombatError::InsufficientEnergy { required: 1, available: 0 })
        );
        assert_eq!(state.player, before.player);
        assert_eq!(state.enemies, before.enemies);
    }

    #[test]
    fn test_ambiguous_target_rejected() {
        let mut state = CombatBuilder::new()
            .enemies([dummy(20, 5), dummy(20, 5)])
            .run_deck(&deck_of(strike(), 10))
            .seed(1)
            .build();

        let card = first_in_hand(&state);
        assert_eq!(state.play_card(card, None), Err(CombatError::InvalidTarget(None)));

        state.select_target(EnemyId::new(1)).unwrap();
        state.play_card(card, None).unwrap();
        assert_eq!(state.enemies[0].combatant.hp, 20);
        assert_eq!(state.enemies[1].combatant.hp, 14);
    }

    #[test]
    fn test_end_turn_cycle() {
        let mut state = CombatBuilder::new()
            .enemy(dummy(20, 5))
            .run_deck(&deck_of(strike(), 10))
            .seed(1)
            .build();

        state.end_turn().unwrap();

        assert_eq!(state.phase, CombatPhase::PlayerActing);
        assert_eq!(state.turn, 2);
        assert_eq!(state.player.combatant.hp, 75);
        assert_eq!(state.player.energy, 3);
        assert_eq!(state.player.piles.hand().len(), 5);
        assert_eq!(state.player.piles.discard_pile().len(), 5);
    }

    #[test]
    fn test_end_turn_outside_player_phase() {
        let mut state = CombatBuilder::new()
            .enemy(dummy(1, 5))
            .run_deck(&deck_of(strike(), 10))
            .seed(1)
            .build();

        let card = first_in_hand(&state);
        state.play_card(card, None).unwrap();
        assert_eq!(state.phase, CombatPhase::Victory);

        assert!(matches!(
            state.end_turn(),
            Err(CombatError::IllegalPhaseAction { phase: CombatPhase::Victory, .. })
        ));
    }

    #[test]
    fn test_start_of_combat_blessings_fire_once() {
        let resources = PlayerResources::new(80)
            .with_blessing(Blessing::new(
                "strength",
                "Leonidas' Strength",
                BlessingEffect::StartCombatBuff { kind: StatusKind::Strength, stacks: 1 },
            ))
            .with_blessing(Blessing::new("energy", "Efficiency", BlessingEffect::StartCombatEnergy(1)))
            .with_blessing(Blessing::new("draw", "Forge Mastery", BlessingEffect::DrawPerTurn(1)));

        let mut state = CombatBuilder::new()
            .enemy(dummy(40, 0))
            .run_deck(&deck_of(strike(), 20))
            .resources(resources)
            .seed(3)
            .build();

        assert_eq!(state.player.energy, 4);
        assert_eq!(state.player.piles.hand().len(), 6);
        assert_eq!(state.player.combatant.statuses.stacks(StatusKind::Strength), 1);

        state.end_turn().unwrap();
        assert_eq!(state.player.energy, 3);
        assert_eq!(state.player.combatant.statuses.stacks(StatusKind::Strength), 1);
    }

    #[test]
    fn test_start_turn_damage_can_win() {
        let resources = PlayerResources::new(80).with_blessing(Blessing::new(
            "fury",
            "Achilles' Fury",
            BlessingEffect::StartTurnDamage(3),
        ));

        let state = CombatBuilder::new()
            .enemy(dummy(3, 5))
            .run_deck(&deck_of(strike(), 10))
            .resources(resources)
            .seed(5)
            .build();

        assert_eq!(state.phase, CombatPhase::Victory);
        assert!(state.player.piles.hand().is_empty());
    }
}
