//! Damage and block pipeline.
//!
//! Pure functions turning a nominal number into what actually happens to a
//! combatant, given the statuses in play. Cards and enemy intents both end
//! up here.
//!
//! ## Damage
//!
//! ```text
//! nominal
//!   + Strength + Vigor          (source, additive)
//!   * 3/4 if source is Weak     (truncated)
//!   * 3/2 if target Vulnerable  (truncated, separate step)
//!   -> actual damage
//!   -> block absorbs first, the rest comes off HP (floored at 0)
//! ```
//!
//! ## Block
//!
//! ```text
//! nominal + Dexterity - BrokenArmor, then * 3/4 if Frail, floored at 0
//! ```
//!
//! ## Start of turn
//!
//! Poison and Burn cost HP directly (block does not help). Poison then
//! loses a stack; Burn does not. Regeneration heals, then loses a stack.
//! Block is cleared unless the combatant is Fortified.

use serde::{Deserialize, Serialize};

use super::combatant::Combatant;
use crate::status::{StatusEffects, StatusKind};

/// Result of one hit, not yet committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedDamage {
    /// Damage after every modifier, before block.
    pub actual_damage: u32,
    /// Change in target HP (zero or negative).
    pub hp_delta: i32,
    /// Change in target block (zero or negative).
    pub block_delta: i32,
}

impl AppliedDamage {
    /// Commit to the target. Returns true if this hit killed it.
    pub fn apply(&self, target: &mut Combatant) -> bool {
        let was_alive = target.is_alive();
        target.block = target.block.saturating_sub(self.block_delta.unsigned_abs());
        target.lose_hp(self.hp_delta.unsigned_abs());
        was_alive && !target.is_alive()
    }

    /// HP the target lost.
    #[must_use]
    pub fn hp_lost(&self) -> u32 {
        self.hp_delta.unsigned_abs()
    }
}

/// Damage leaving the source, before the target's modifiers.
#[must_use]
pub fn outgoing_damage(nominal: u32, source: &StatusEffects) -> u32 {
    let mut damage = nominal
        .saturating_add(source.stacks(StatusKind::Strength))
        .saturating_add(source.stacks(StatusKind::Vigor));

    if source.has(StatusKind::Weak) {
        damage = damage.saturating_mul(3) / 4;
    }
    damage
}

/// Damage after the target's Vulnerable.
#[must_use]
pub fn incoming_damage(damage: u32, target: &StatusEffects) -> u32 {
    if target.has(StatusKind::Vulnerable) {
        damage.saturating_mul(3) / 2
    } else {
        damage
    }
}

/// Split `actual_damage` between the target's block and HP.
#[must_use]
pub fn absorb(actual_damage: u32, target: &Combatant) -> AppliedDamage {
    let blocked = target.block.min(actual_damage);
    let through = actual_damage - blocked;
    let hp_lost = through.min(target.hp);

    AppliedDamage {
        actual_damage,
        hp_delta: -i32::try_from(hp_lost).unwrap_or(i32::MAX),
        block_delta: -i32::try_from(blocked).unwrap_or(i32::MAX),
    }
}

/// Full pipeline from a nominal amount to a hit on `target`.
///
/// ```
/// use forge_combat::combat::{damage, Combatant};
/// use forge_combat::status::{StatusEffects, StatusKind};
///
/// let source = StatusEffects::new()
///     .with(StatusKind::Strength, 2, None)
///     .with(StatusKind::Weak, 1, Some(1));
/// let target = Combatant::new(40).with_status(StatusKind::Vulnerable, 1, Some(2));
///
/// // ((10 + 2) * 3/4) * 3/2 = 13
/// let hit = damage::resolve_damage_to_target(10, &source, &target);
/// assert_eq!(hit.actual_damage, 13);
/// assert_eq!(hit.hp_delta, -13);
/// ```
#[must_use]
pub fn resolve_damage_to_target(nominal: u32, source: &StatusEffects, target: &Combatant) -> AppliedDamage {
    let damage = outgoing_damage(nominal, source);
    let damage = incoming_damage(damage, &target.statuses);
    absorb(damage, target)
}

/// Block gained from a nominal amount.
#[must_use]
pub fn compute_block(nominal: u32, statuses: &StatusEffects) -> u32 {
    let mut block = nominal
        .saturating_add(statuses.stacks(StatusKind::Dexterity))
        .saturating_sub(statuses.stacks(StatusKind::BrokenArmor));

    if statuses.has(StatusKind::Frail) {
        block = block.saturating_mul(3) / 4;
    }
    block
}

/// Clear block at the start of the owner's turn, unless Fortified.
///
/// Returns the block that was removed.
pub fn reset_block(combatant: &mut Combatant) -> u32 {
    if combatant.statuses.has(StatusKind::Fortified) {
        return 0;
    }
    std::mem::take(&mut combatant.block)
}

/// What the start-of-turn tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnStartTick {
    pub poison_damage: u32,
    pub burn_damage: u32,
    pub healed: u32,
}

impl TurnStartTick {
    #[must_use]
    pub fn hp_lost(&self) -> u32 {
        self.poison_damage + self.burn_damage
    }
}

/// Resolve damage-over-time and regeneration for the combatant whose turn
/// is starting.
pub fn tick_start_of_turn(combatant: &mut Combatant) -> TurnStartTick {
    let mut tick = TurnStartTick::default();

    let poison = combatant.statuses.stacks(StatusKind::Poison);
    if poison > 0 {
        tick.poison_damage = combatant.lose_hp(poison);
        combatant.statuses.reduce_stacks(StatusKind::Poison, 1);
    }

    let burn = combatant.statuses.stacks(StatusKind::Burn);
    if burn > 0 {
        tick.burn_damage = combatant.lose_hp(burn);
    }

    let regeneration = combatant.statuses.stacks(StatusKind::Regeneration);
    if regeneration > 0 && combatant.is_alive() {
        tick.healed = combatant.heal(regeneration);
        combatant.statuses.reduce_stacks(StatusKind::Regeneration, 1);
    }

    tick
}
