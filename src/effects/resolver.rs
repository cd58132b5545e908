//! Effect resolution - executing descriptors on combat state.
//!
//! `EffectResolver` is the one path by which anything changes HP, block,
//! statuses, energy or cards in hand. Played cards and enemy intents are
//! both lists of `EffectDescriptor`s resolved here; they differ only in
//! the `actor` of the `ResolutionContext`.
//!
//! ## Ordering
//!
//! - Descriptors resolve in declaration order.
//! - Each descriptor repeats `times` times; its condition is checked before
//!   every repeat.
//! - After every HP change the combat checks for Victory/Defeat. Once it is
//!   over, nothing further resolves; effects already applied stay applied.
//!
//! Problems during resolution are not errors. A repeat that cannot do
//! anything reports `ResolveResult::Skipped` and the next one still runs.

use smallvec::SmallVec;

use super::effect::{Condition, EffectDescriptor, EffectKind, TargetSelector, UpgradeScope};
use crate::combat::{damage, CombatState};
use crate::core::{CardInstanceId, CombatantId, EnemyId};
use crate::status::StatusKind;

/// Why a repeat did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The descriptor's condition was false.
    ConditionNotMet,
    /// Every target it could aim at is dead.
    NoLivingTarget,
    /// Victory or Defeat was reached earlier in the pass.
    CombatOver,
    /// The effect means nothing for this actor (an enemy drawing cards) or
    /// had nothing to act on (no upgradable card in hand).
    NotApplicable,
}

/// Result of resolving one repeat of a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    Applied,
    Skipped(SkipReason),
}

impl ResolveResult {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, ResolveResult::Applied)
    }
}

/// Per-pass state threaded through a resolution.
#[derive(Clone, Debug)]
pub struct ResolutionContext {
    /// Who is acting.
    pub actor: CombatantId,

    /// The enemy a player's `Enemy` selector hits. Unused for enemy actors,
    /// whose only opponent is the player.
    pub target: Option<EnemyId>,

    /// The card being played, if any. It is never its own upgrade target.
    pub source_card: Option<CardInstanceId>,

    /// Did the most recent damage application in this pass kill?
    pub last_damage_killed: bool,
}

impl ResolutionContext {
    /// Context for a card played by the player.
    #[must_use]
    pub fn card(card: CardInstanceId, target: Option<EnemyId>) -> Self {
        Self {
            actor: CombatantId::Player,
            target,
            source_card: Some(card),
            last_damage_killed: false,
        }
    }

    /// Context for an enemy's intent.
    #[must_use]
    pub fn enemy(id: EnemyId) -> Self {
        Self {
            actor: CombatantId::Enemy(id),
            target: None,
            source_card: None,
            last_damage_killed: false,
        }
    }
}

/// Resolves effect descriptors on combat state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve an ordered effect list.
    ///
    /// Stops at the first descriptor reached after the combat has ended.
    /// If the list contains an attack, the actor's Vigor is consumed once
    /// the whole list is done.
    pub fn resolve_all(
        state: &mut CombatState,
        effects: &[EffectDescriptor],
        ctx: &mut ResolutionContext,
    ) -> Vec<ResolveResult> {
        let mut results = Vec::with_capacity(effects.len());

        for effect in effects {
            if state.is_over() {
                results.push(ResolveResult::Skipped(SkipReason::CombatOver));
                break;
            }
            results.extend(Self::resolve(state, effect, ctx));
        }

        if effects.iter().any(EffectDescriptor::is_attack) {
            if let Some(actor) = state.combatant_mut(ctx.actor) {
                actor.statuses.remove(StatusKind::Vigor);
            }
        }

        results
    }

    /// Resolve one descriptor, all of its repeats.
    pub fn resolve(
        state: &mut CombatState,
        effect: &EffectDescriptor,
        ctx: &mut ResolutionContext,
    ) -> SmallVec<[ResolveResult; 2]> {
        let mut results = SmallVec::new();

        for _ in 0..effect.times.max(1) {
            if state.is_over() {
                results.push(ResolveResult::Skipped(SkipReason::CombatOver));
                break;
            }

            if let Some(condition) = effect.condition {
                if !Self::condition_holds(state, condition, ctx) {
                    tracing::debug!("{} skips {:?}: {:?} not met", ctx.actor, effect.kind, condition);
                    results.push(ResolveResult::Skipped(SkipReason::ConditionNotMet));
                    continue;
                }
            }

            let result = Self::resolve_once(state, effect, ctx);
            tracing::debug!("{} resolves {:?}: {:?}", ctx.actor, effect.kind, result);
            results.push(result);
        }

        results
    }

    /// Evaluate a condition right now.
    #[must_use]
    pub fn condition_holds(state: &CombatState, condition: Condition, ctx: &ResolutionContext) -> bool {
        match condition {
            Condition::Kills => ctx.last_damage_killed,
            Condition::EnemyBelow(percent) => {
                let opponent = match ctx.actor {
                    CombatantId::Player => ctx.target.map(CombatantId::Enemy),
                    CombatantId::Enemy(_) => Some(CombatantId::Player),
                };
                opponent
                    .and_then(|id| state.combatant(id))
                    .is_some_and(|c| c.is_alive() && c.hp_at_or_below(percent))
            }
        }
    }

    /// Living combatants a selector points at, from the actor's side.
    #[must_use]
    pub fn targets(
        state: &CombatState,
        selector: TargetSelector,
        ctx: &ResolutionContext,
    ) -> SmallVec<[CombatantId; 4]> {
        let candidates: SmallVec<[CombatantId; 4]> = match (ctx.actor, selector) {
            (actor, TargetSelector::Actor) => smallvec::smallvec![actor],
            (CombatantId::Player, TargetSelector::Enemy) => {
                ctx.target.map(CombatantId::Enemy).into_iter().collect()
            }
            (CombatantId::Player, TargetSelector::AllEnemies) => state
                .living_enemies()
                .map(|e| CombatantId::Enemy(e.id))
                .collect(),
            (CombatantId::Enemy(_), _) => smallvec::smallvec![CombatantId::Player],
        };

        candidates
            .into_iter()
            .filter(|&id| state.combatant(id).is_some_and(|c| c.is_alive()))
            .collect()
    }

    fn resolve_once(
        state: &mut CombatState,
        effect: &EffectDescriptor,
        ctx: &mut ResolutionContext,
    ) -> ResolveResult {
        let targets = Self::targets(state, effect.resolved_target(), ctx);

        match effect.kind {
            EffectKind::Damage { amount } | EffectKind::DamageAll { amount } => {
                if targets.is_empty() {
                    return ResolveResult::Skipped(SkipReason::NoLivingTarget);
                }
                let Some(source) = state.combatant(ctx.actor).map(|c| c.statuses.clone()) else {
                    return ResolveResult::Skipped(SkipReason::NotApplicable);
                };
                let nominal = if ctx.actor.is_player() {
                    amount + state.resources.damage_bonus()
                } else {
                    amount
                };

                let mut killed_any = false;
                for target in targets {
                    // Earlier targets of a DamageAll can end the combat
                    if state.is_over() {
                        break;
                    }
                    killed_any |= Self::hit(state, target, |body| {
                        damage::resolve_damage_to_target(nominal, &source, body)
                    });
                }
                ctx.last_damage_killed = killed_any;
                ResolveResult::Applied
            }

            EffectKind::Block { amount } => {
                if targets.is_empty() {
                    return ResolveResult::Skipped(SkipReason::NoLivingTarget);
                }
                let bonus = if ctx.actor.is_player() {
                    state.resources.block_bonus()
                } else {
                    0
                };
                for target in targets {
                    if let Some(body) = state.combatant_mut(target) {
                        let gained = damage::compute_block(amount + bonus, &body.statuses);
                        body.gain_block(gained);
                    }
                }
                ResolveResult::Applied
            }

            EffectKind::Heal { amount } => {
                if targets.is_empty() {
                    return ResolveResult::Skipped(SkipReason::NoLivingTarget);
                }
                for target in targets {
                    if let Some(body) = state.combatant_mut(target) {
                        body.heal(amount);
                    }
                }
                ResolveResult::Applied
            }

            EffectKind::LoseHp { amount } => {
                if targets.is_empty() {
                    return ResolveResult::Skipped(SkipReason::NoLivingTarget);
                }
                for target in targets {
                    if state.is_over() {
                        break;
                    }
                    Self::hit(state, target, |body| damage::AppliedDamage {
                        actual_damage: amount,
                        hp_delta: -(amount.min(body.hp) as i32),
                        block_delta: 0,
                    });
                }
                ResolveResult::Applied
            }

            EffectKind::ApplyStatus { kind, stacks, duration } => {
                if targets.is_empty() {
                    return ResolveResult::Skipped(SkipReason::NoLivingTarget);
                }
                for target in targets {
                    if let Some(body) = state.combatant_mut(target) {
                        body.statuses.add(kind, stacks, duration);
                    }
                }
                ResolveResult::Applied
            }

            EffectKind::Draw { count } => {
                if !ctx.actor.is_player() {
                    return ResolveResult::Skipped(SkipReason::NotApplicable);
                }
                state.player.piles.draw(count as usize, &mut state.rng);
                ResolveResult::Applied
            }

            EffectKind::GainEnergy { amount } => {
                if !ctx.actor.is_player() {
                    return ResolveResult::Skipped(SkipReason::NotApplicable);
                }
                state.player.energy = state.player.energy.saturating_add(amount);
                ResolveResult::Applied
            }

            EffectKind::UpgradeCard { scope } => {
                if !ctx.actor.is_player() {
                    return ResolveResult::Skipped(SkipReason::NotApplicable);
                }
                let piles = &mut state.player.piles;
                let upgraded = match scope {
                    UpgradeScope::One => usize::from(piles.upgrade_first_in_hand(ctx.source_card).is_some()),
                    UpgradeScope::AllAttacks => piles.upgrade_attacks_in_hand(ctx.source_card),
                };
                if upgraded == 0 {
                    ResolveResult::Skipped(SkipReason::NotApplicable)
                } else {
                    ResolveResult::Applied
                }
            }
        }
    }

    /// Apply one HP-affecting hit to a combatant, then run the checks that
    /// follow every HP change: enemy thresholds and combat end.
    ///
    /// Returns true if the hit killed its target.
    fn hit(
        state: &mut CombatState,
        target: CombatantId,
        compute: impl FnOnce(&crate::combat::Combatant) -> damage::AppliedDamage,
    ) -> bool {
        let Some(body) = state.combatant_mut(target) else {
            return false;
        };
        let applied = compute(&*body);
        let killed = applied.apply(body);

        tracing::debug!(
            "{} takes {} ({} blocked){}",
            target,
            applied.hp_lost(),
            applied.block_delta.unsigned_abs(),
            if killed { ", killed" } else { "" }
        );

        if applied.hp_lost() > 0 {
            if let CombatantId::Enemy(id) = target {
                if let Some(enemy) = state.enemy_mut(id) {
                    enemy.check_thresholds();
                }
            }
            state.check_terminal();
        }
        killed
    }
}
