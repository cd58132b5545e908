//! Card resolution tests.
//!
//! Each test builds a combat with a known hand and plays shipped cards
//! against passive enemies:
//! - Damage pipeline (Strength, Vigor, Weak, Vulnerable, block)
//! - Conditional effects (kills, enemy below)
//! - Multi-target and status-applying cards
//! - In-combat upgrades, exhaust and blessings

use std::sync::Arc;

use forge_combat::cards::CardInstance;
use forge_combat::combat::{CombatBuilder, CombatState};
use forge_combat::content;
use forge_combat::core::{CardInstanceId, CombatError, CombatPhase, EnemyId};
use forge_combat::effects::{ResolveResult, SkipReason};
use forge_combat::enemies::{EnemyDefinition, IntentTemplate};
use forge_combat::run::{Blessing, BlessingEffect, PlayerResources};
use forge_combat::status::StatusKind;
use forge_combat::zones::Piles;

const E0: EnemyId = EnemyId::new(0);
const E1: EnemyId = EnemyId::new(1);
const E2: EnemyId = EnemyId::new(2);

fn dummy(hp: u32) -> Arc<EnemyDefinition> {
    Arc::new(EnemyDefinition::new("dummy", "Training Dummy", hp, 1).with_pattern([IntentTemplate::unknown()]))
}

fn card(index: u32) -> CardInstanceId {
    CardInstanceId::new(index)
}

/// A combat whose opening hand is exactly `hand`, in order. Card `i` has
/// instance id `i`.
fn setup_with(resources: PlayerResources, enemies: Vec<Arc<EnemyDefinition>>, hand: &[&str]) -> CombatState {
    let registry = content::card_registry();
    let cards: Vec<CardInstance> = hand
        .iter()
        .enumerate()
        .map(|(i, id)| registry.instantiate(id, card(i as u32)).unwrap())
        .collect();

    let mut state = CombatBuilder::new()
        .enemies(enemies)
        .deck(cards.clone())
        .resources(resources)
        .seed(1)
        .build();

    state.player.piles = Piles::from_ordered(cards);
    state.player.piles.draw(hand.len(), &mut state.rng);
    state
}

fn setup(enemies: Vec<Arc<EnemyDefinition>>, hand: &[&str]) -> CombatState {
    setup_with(PlayerResources::new(80), enemies, hand)
}

fn enemy_hp(state: &CombatState, id: EnemyId) -> u32 {
    state.enemy(id).unwrap().combatant.hp
}

// =============================================================================
// Damage pipeline
// =============================================================================

#[test]
fn test_hammer_strike() {
    let mut state = setup(vec![dummy(40)], &["hammer-strike"]);
    let results = state.play_card(card(0), Some(E0)).unwrap();

    assert_eq!(results, vec![ResolveResult::Applied]);
    assert_eq!(enemy_hp(&state, E0), 34);
    assert_eq!(state.player.energy, 2);
    assert!(state.player.piles.hand().is_empty());
    assert_eq!(state.player.piles.discard_pile().len(), 1);
}

#[test]
fn test_strength_applies_to_every_hit() {
    let mut state = setup(vec![dummy(30)], &["twin-strike"]);
    state.player.combatant.statuses.add(StatusKind::Strength, 2, None);

    let results = state.play_card(card(0), Some(E0)).unwrap();

    assert_eq!(results, vec![ResolveResult::Applied, ResolveResult::Applied]);
    assert_eq!(enemy_hp(&state, E0), 20);
}

#[test]
fn test_vigor_is_consumed_by_next_attack() {
    let mut state = setup(vec![dummy(40)], &["sharpen", "hammer-strike", "hammer-strike"]);

    state.play_card(card(0), None).unwrap();
    assert_eq!(state.player.combatant.statuses.stacks(StatusKind::Vigor), 4);

    state.play_card(card(1), Some(E0)).unwrap();
    assert_eq!(enemy_hp(&state, E0), 30);
    assert!(!state.player.combatant.statuses.has(StatusKind::Vigor));

    state.play_card(card(2), Some(E0)).unwrap();
    assert_eq!(enemy_hp(&state, E0), 24);
}

#[test]
fn test_weak_then_vulnerable() {
    let mut state = setup(vec![dummy(40)], &["forge-smash"]);
    state.player.combatant.statuses.add(StatusKind::Weak, 1, Some(1));
    state
        .enemy_mut(E0)
        .unwrap()
        .combatant
        .statuses
        .add(StatusKind::Vulnerable, 1, Some(2));

    state.play_card(card(0), Some(E0)).unwrap();

    // 12 * 3/4 = 9, then 9 * 3/2 = 13
    assert_eq!(enemy_hp(&state, E0), 27);
}

#[test]
fn test_block_absorbs_first() {
    let mut state = setup(vec![dummy(40)], &["hammer-strike"]);
    state.enemy_mut(E0).unwrap().combatant.block = 5;

    state.play_card(card(0), Some(E0)).unwrap();

    let enemy = state.enemy(E0).unwrap();
    assert_eq!(enemy.combatant.block, 0);
    assert_eq!(enemy.combatant.hp, 39);
}

#[test]
fn test_damage_bonus_blessing() {
    let resources =
        PlayerResources::new(80).with_blessing(Blessing::new("wrath", "Leonidas' Wrath", BlessingEffect::DamageBonus(3)));
    let mut state = setup_with(resources, vec![dummy(40)], &["hammer-strike"]);

    state.play_card(card(0), Some(E0)).unwrap();
    assert_eq!(enemy_hp(&state, E0), 31);
}

// =============================================================================
// Block
// =============================================================================

#[test]
fn test_block_bonus_dexterity_and_frail() {
    let resources =
        PlayerResources::new(80).with_blessing(Blessing::new("fort", "Fortification", BlessingEffect::BlockBonus(2)));
    let mut state = setup_with(resources, vec![dummy(40)], &["shield-brace"]);
    state.player.combatant.statuses.add(StatusKind::Dexterity, 2, None);
    state.player.combatant.statuses.add(StatusKind::Frail, 1, Some(1));

    state.play_card(card(0), None).unwrap();

    // (5 + 2 + 2) * 3/4
    assert_eq!(state.player.combatant.block, 6);
}

#[test]
fn test_broken_armor_weakens_enemy_block() {
    let hoplite = Arc::new(EnemyDefinition::new("shield", "Shieldbearer", 40, 1).with_pattern([IntentTemplate::defend(10)]));
    let mut state = setup(vec![hoplite], &["crushing-blow"]);

    state.play_card(card(0), Some(E0)).unwrap();
    assert_eq!(enemy_hp(&state, E0), 25);
    assert_eq!(state.enemy(E0).unwrap().combatant.statuses.stacks(StatusKind::BrokenArmor), 2);

    state.end_turn().unwrap();
    assert_eq!(state.enemy(E0).unwrap().combatant.block, 8);
}

// =============================================================================
// Conditions
// =============================================================================

#[test]
fn test_kill_grants_energy() {
    let mut state = setup(vec![dummy(10), dummy(30)], &["spear-thrust"]);

    let results = state.play_card(card(0), Some(E0)).unwrap();

    assert_eq!(results, vec![ResolveResult::Applied, ResolveResult::Applied]);
    assert_eq!(enemy_hp(&state, E0), 0);
    assert_eq!(state.player.energy, 3);
    assert_eq!(state.phase, CombatPhase::PlayerActing);
}

#[test]
fn test_no_kill_no_energy() {
    let mut state = setup(vec![dummy(30)], &["spear-thrust"]);

    let results = state.play_card(card(0), Some(E0)).unwrap();

    assert_eq!(
        results,
        vec![ResolveResult::Applied, ResolveResult::Skipped(SkipReason::ConditionNotMet)]
    );
    assert_eq!(state.player.energy, 1);
}

#[test]
fn test_victory_halts_remaining_effects() {
    let mut state = setup(vec![dummy(10)], &["blessed-blade"]);

    let results = state.play_card(card(0), Some(E0)).unwrap();

    assert_eq!(state.phase, CombatPhase::Victory);
    assert_eq!(
        results,
        vec![ResolveResult::Applied, ResolveResult::Skipped(SkipReason::CombatOver)]
    );
    assert_eq!(state.player.energy, 1);
    assert_eq!(state.player.piles.discard_pile().len(), 1);
}

#[test]
fn test_execute_threshold() {
    let mut state = setup(vec![dummy(40)], &["execute", "execute"]);

    let results = state.play_card(card(0), Some(E0)).unwrap();
    assert_eq!(results, vec![ResolveResult::Skipped(SkipReason::ConditionNotMet)]);
    assert_eq!(enemy_hp(&state, E0), 40);
    assert_eq!(state.player.energy, 1);
    assert_eq!(state.player.piles.discard_pile().len(), 1);

    state.enemy_mut(E0).unwrap().combatant.hp = 20;
    state.player.energy = 3;
    state.play_card(card(1), Some(E0)).unwrap();
    assert_eq!(enemy_hp(&state, E0), 2);
}

// =============================================================================
// Multi-target and statuses
// =============================================================================

#[test]
fn test_whirlwind_skips_the_dead() {
    let mut state = setup(vec![dummy(10), dummy(20), dummy(30)], &["whirlwind"]);
    state.enemy_mut(E1).unwrap().combatant.hp = 0;

    state.play_card(card(0), None).unwrap();

    assert_eq!(enemy_hp(&state, E0), 2);
    assert_eq!(enemy_hp(&state, E1), 0);
    assert_eq!(enemy_hp(&state, E2), 22);
}

#[test]
fn test_molten_strike_burns_target() {
    let mut state = setup(vec![dummy(40)], &["molten-strike"]);

    state.play_card(card(0), Some(E0)).unwrap();

    let enemy = state.enemy(E0).unwrap();
    assert_eq!(enemy.combatant.hp, 27);
    assert_eq!(enemy.combatant.statuses.stacks(StatusKind::Burn), 2);
}

#[test]
fn test_volcanic_eruption_burns_all() {
    let mut state = setup(vec![dummy(40), dummy(40)], &["volcanic-eruption"]);

    state.play_card(card(0), None).unwrap();

    for id in [E0, E1] {
        let enemy = state.enemy(id).unwrap();
        assert_eq!(enemy.combatant.hp, 15);
        assert_eq!(enemy.combatant.statuses.stacks(StatusKind::Burn), 3);
    }
}

#[test]
fn test_dead_target_rejected() {
    let mut state = setup(vec![dummy(10), dummy(20)], &["hammer-strike"]);
    state.enemy_mut(E0).unwrap().combatant.hp = 0;

    assert_eq!(
        state.play_card(card(0), Some(E0)),
        Err(CombatError::InvalidTarget(Some(E0)))
    );
    assert_eq!(state.player.energy, 3);
    assert_eq!(state.player.piles.hand().len(), 1);

    // Only one enemy left alive, so no explicit target is needed
    state.play_card(card(0), None).unwrap();
    assert_eq!(enemy_hp(&state, E1), 14);
}

// =============================================================================
// Card manipulation
// =============================================================================

#[test]
fn test_temper_upgrades_another_card() {
    let mut state = setup(vec![dummy(40)], &["temper", "hammer-strike", "shield-brace"]);

    let results = state.play_card(card(0), None).unwrap();
    assert_eq!(results, vec![ResolveResult::Applied]);

    let hand = state.player.piles.hand();
    assert!(hand[0].upgraded);
    assert_eq!(hand[0].name(), "Hammer Strike+");
    assert!(!hand[1].upgraded);
    assert!(!state.player.piles.discard_pile()[0].upgraded);

    state.play_card(card(1), Some(E0)).unwrap();
    assert_eq!(enemy_hp(&state, E0), 32);
}

#[test]
fn test_temper_with_nothing_to_upgrade() {
    let mut state = setup(vec![dummy(40)], &["temper"]);

    let results = state.play_card(card(0), None).unwrap();

    assert_eq!(results, vec![ResolveResult::Skipped(SkipReason::NotApplicable)]);
    assert_eq!(state.player.energy, 2);
    assert_eq!(state.player.piles.discard_pile().len(), 1);
}

#[test]
fn test_master_craft_upgrades_attacks_only() {
    let mut state = setup(
        vec![dummy(40)],
        &["master-craft", "hammer-strike", "twin-strike", "shield-brace"],
    );

    state.play_card(card(0), None).unwrap();

    let upgraded: Vec<bool> = state.player.piles.hand().iter().map(|c| c.upgraded).collect();
    assert_eq!(upgraded, vec![true, true, false]);
}

#[test]
fn test_inferno_ignores_block() {
    let mut state = setup(vec![dummy(40)], &["inferno"]);
    state.player.combatant.block = 10;

    state.play_card(card(0), None).unwrap();

    assert_eq!(state.player.energy, 4);
    assert_eq!(state.player.combatant.hp, 75);
    assert_eq!(state.player.combatant.block, 10);
}

#[test]
fn test_divine_smite_heals_its_full_value() {
    let mut state = setup_with(PlayerResources::new(80).with_hp(40), vec![dummy(50)], &["divine-smite"]);

    state.play_card(card(0), None).unwrap();

    assert_eq!(enemy_hp(&state, E0), 20);
    assert_eq!(state.player.combatant.hp, 70);
    assert_eq!(state.player.energy, 0);
}

#[test]
fn test_bronze_guard() {
    let mut state = setup(vec![dummy(40)], &["bronze-guard"]);
    state.play_card(card(0), None).unwrap();
    assert_eq!(state.player.combatant.block, 9);
}

#[test]
fn test_metal_scraps_exhausts() {
    let mut state = setup(vec![dummy(40)], &["metal-scraps"]);

    state.play_card(card(0), None).unwrap();

    assert_eq!(state.player.combatant.block, 3);
    assert_eq!(state.player.energy, 3);
    assert_eq!(state.player.piles.exhaust_pile().len(), 1);
    assert!(state.player.piles.discard_pile().is_empty());
}

#[test]
fn test_stoke_flames_draws() {
    let mut state = setup(vec![dummy(40)], &["stoke-flames", "hammer-strike", "hammer-strike"]);

    // Put the two strikes back on the draw pile
    let registry = content::card_registry();
    let strikes: Vec<CardInstance> = (1..=2)
        .map(|i| registry.instantiate("hammer-strike", card(i)).unwrap())
        .collect();
    let stoke = registry.instantiate("stoke-flames", card(0)).unwrap();
    state.player.piles = Piles::from_ordered(std::iter::once(stoke).chain(strikes));
    state.player.piles.draw(1, &mut state.rng);

    state.play_card(card(0), None).unwrap();

    assert_eq!(state.player.piles.hand().len(), 2);
    assert!(state.player.piles.draw_pile().is_empty());
}
