//! Stacked, duration-bearing modifiers on a combatant.
//!
//! A combatant holds at most one `StatusEffect` per `StatusKind`. Applying a
//! kind that is already present merges into the existing entry:
//!
//! - `stacks` are summed
//! - `duration` becomes the larger of the two (a refresh, never a sum)
//!
//! Entries with a duration count down once per end of their owner's turn
//! and disappear when they reach zero. Entries without a duration are
//! permanent for the combat and only go away through their own mechanics
//! (Poison losing stacks, Vigor being consumed).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Kind of status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// +stacks to outgoing damage.
    Strength,
    /// +stacks to block gained.
    Dexterity,
    /// Outgoing damage x0.75.
    Weak,
    /// Block gained x0.75.
    Frail,
    /// Incoming damage x1.5.
    Vulnerable,
    /// Loses stacks HP at start of turn, then one stack.
    Poison,
    /// Loses stacks HP at start of turn.
    Burn,
    /// Heals stacks HP at start of turn, then one stack.
    Regeneration,
    /// +stacks to the damage of the next attack card, then removed.
    Vigor,
    /// Block is not cleared at turn start.
    Fortified,
    /// -stacks to block gained.
    BrokenArmor,
}

impl StatusKind {
    /// Every kind, in declaration order.
    pub const ALL: [StatusKind; 11] = [
        StatusKind::Strength,
        StatusKind::Dexterity,
        StatusKind::Weak,
        StatusKind::Frail,
        StatusKind::Vulnerable,
        StatusKind::Poison,
        StatusKind::Burn,
        StatusKind::Regeneration,
        StatusKind::Vigor,
        StatusKind::Fortified,
        StatusKind::BrokenArmor,
    ];

    /// Is this kind harmful to its holder?
    #[must_use]
    pub const fn is_debuff(self) -> bool {
        matches!(
            self,
            StatusKind::Weak
                | StatusKind::Frail
                | StatusKind::Vulnerable
                | StatusKind::Poison
                | StatusKind::Burn
                | StatusKind::BrokenArmor
        )
    }
}

/// One status entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub stacks: u32,
    /// Turns remaining. `None` = permanent for the combat.
    pub duration: Option<i32>,
}

/// The status set of one combatant, unique by kind.
///
/// ```
/// use forge_combat::status::{StatusEffects, StatusKind};
///
/// let mut effects = StatusEffects::new();
/// effects.add(StatusKind::Weak, 1, Some(2));
/// effects.add(StatusKind::Weak, 1, Some(1));
///
/// let weak = effects.get(StatusKind::Weak).unwrap();
/// assert_eq!(weak.stacks, 2);
/// assert_eq!(weak.duration, Some(2)); // refreshed, not summed
///
/// effects.decay_durations();
/// effects.decay_durations();
/// assert!(!effects.has(StatusKind::Weak));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffects(SmallVec<[StatusEffect; 4]>);

impl StatusEffects {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a status (builder form, for authored data and tests).
    #[must_use]
    pub fn with(mut self, kind: StatusKind, stacks: u32, duration: Option<i32>) -> Self {
        self.add(kind, stacks, duration);
        self
    }

    /// Apply `stacks` of `kind`, merging with an existing entry.
    ///
    /// Zero stacks, or an already-expired duration, is a no-op.
    /// Returns true if the set changed.
    pub fn add(&mut self, kind: StatusKind, stacks: u32, duration: Option<i32>) -> bool {
        if stacks == 0 || duration.is_some_and(|d| d <= 0) {
            return false;
        }

        if let Some(existing) = self.0.iter_mut().find(|e| e.kind == kind) {
            existing.stacks = existing.stacks.saturating_add(stacks);
            existing.duration = match (existing.duration, duration) {
                (current, None) => current,
                // A permanent entry counts as zero turns in the max
                (None, Some(incoming)) => Some(incoming),
                (Some(current), Some(incoming)) => Some(current.max(incoming)),
            };
        } else {
            self.0.push(StatusEffect { kind, stacks, duration });
        }
        true
    }

    /// Count every duration down by one and drop the expired entries.
    pub fn decay_durations(&mut self) {
        for effect in self.0.iter_mut() {
            if let Some(duration) = effect.duration.as_mut() {
                *duration -= 1;
            }
        }
        self.0.retain(|e| e.duration.map_or(true, |d| d > 0));
    }

    /// Look up the entry for a kind.
    #[must_use]
    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.0.iter().find(|e| e.kind == kind)
    }

    /// Stacks of a kind, 0 if absent.
    #[must_use]
    pub fn stacks(&self, kind: StatusKind) -> u32 {
        self.get(kind).map_or(0, |e| e.stacks)
    }

    #[must_use]
    pub fn has(&self, kind: StatusKind) -> bool {
        self.get(kind).is_some()
    }

    /// Remove a kind entirely.
    pub fn remove(&mut self, kind: StatusKind) -> Option<StatusEffect> {
        let pos = self.0.iter().position(|e| e.kind == kind)?;
        Some(self.0.remove(pos))
    }

    /// Take `amount` stacks off a kind, removing it at zero.
    ///
    /// Returns the stacks left.
    pub fn reduce_stacks(&mut self, kind: StatusKind, amount: u32) -> u32 {
        let Some(pos) = self.0.iter().position(|e| e.kind == kind) else {
            return 0;
        };
        let remaining = self.0[pos].stacks.saturating_sub(amount);
        if remaining == 0 {
            self.0.remove(pos);
        } else {
            self.0[pos].stacks = remaining;
        }
        remaining
    }

    /// Iterate over entries in application order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_new_entry() {
        let mut effects = StatusEffects::new();
        assert!(effects.add(StatusKind::Strength, 2, None));

        assert_eq!(effects.len(), 1);
        assert_eq!(effects.stacks(StatusKind::Strength), 2);
        assert_eq!(effects.get(StatusKind::Strength).unwrap().duration, None);
    }

    #[test]
    fn test_add_merges_stacks() {
        let mut effects = StatusEffects::new();
        effects.add(StatusKind::Burn, 2, None);
        effects.add(StatusKind::Burn, 3, None);

        assert_eq!(effects.len(), 1);
        assert_eq!(effects.stacks(StatusKind::Burn), 5);
    }

    #[test]
    fn test_duration_takes_maximum() {
        let mut effects = StatusEffects::new();
        effects.add(StatusKind::Vulnerable, 1, Some(3));
        effects.add(StatusKind::Vulnerable, 1, Some(2));
        assert_eq!(effects.get(StatusKind::Vulnerable).unwrap().duration, Some(3));

        effects.add(StatusKind::Vulnerable, 1, Some(5));
        assert_eq!(effects.get(StatusKind::Vulnerable).unwrap().duration, Some(5));
        assert_eq!(effects.stacks(StatusKind::Vulnerable), 3);
    }

    #[test]
    fn test_duration_merge_with_permanent() {
        // Incoming without duration keeps the existing one
        let mut effects = StatusEffects::new().with(StatusKind::Weak, 1, Some(2));
        effects.add(StatusKind::Weak, 1, None);
        assert_eq!(effects.get(StatusKind::Weak).unwrap().duration, Some(2));

        // Permanent entry adopts an incoming duration
        let mut effects = StatusEffects::new().with(StatusKind::Burn, 1, None);
        effects.add(StatusKind::Burn, 1, Some(2));
        assert_eq!(effects.get(StatusKind::Burn).unwrap().duration, Some(2));
    }

    #[test]
    fn test_add_zero_stacks_is_noop() {
        let mut effects = StatusEffects::new();
        assert!(!effects.add(StatusKind::Strength, 0, None));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_add_expired_duration_is_noop() {
        let mut effects = StatusEffects::new();
        assert!(!effects.add(StatusKind::Weak, 1, Some(0)));
        assert!(!effects.add(StatusKind::Weak, 1, Some(-1)));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_decay_removes_expired() {
        let mut effects = StatusEffects::new()
            .with(StatusKind::Weak, 1, Some(1))
            .with(StatusKind::Frail, 1, Some(2))
            .with(StatusKind::Strength, 3, None);

        effects.decay_durations();

        assert!(!effects.has(StatusKind::Weak));
        assert_eq!(effects.get(StatusKind::Frail).unwrap().duration, Some(1));
        assert_eq!(effects.stacks(StatusKind::Strength), 3);

        effects.decay_durations();
        assert!(!effects.has(StatusKind::Frail));
        assert!(effects.has(StatusKind::Strength));
    }

    #[test]
    fn test_reduce_stacks() {
        let mut effects = StatusEffects::new().with(StatusKind::Poison, 3, None);

        assert_eq!(effects.reduce_stacks(StatusKind::Poison, 1), 2);
        assert_eq!(effects.reduce_stacks(StatusKind::Poison, 5), 0);
        assert!(!effects.has(StatusKind::Poison));

        // Absent kind
        assert_eq!(effects.reduce_stacks(StatusKind::Vigor, 1), 0);
    }

    #[test]
    fn test_remove() {
        let mut effects = StatusEffects::new().with(StatusKind::Vigor, 4, None);
        let removed = effects.remove(StatusKind::Vigor).unwrap();
        assert_eq!(removed.stacks, 4);
        assert!(effects.remove(StatusKind::Vigor).is_none());
    }

    #[test]
    fn test_debuff_classification() {
        assert!(StatusKind::Weak.is_debuff());
        assert!(StatusKind::Poison.is_debuff());
        assert!(!StatusKind::Strength.is_debuff());
        assert!(!StatusKind::Fortified.is_debuff());
        assert_eq!(StatusKind::ALL.iter().filter(|k| k.is_debuff()).count(), 6);
    }

    #[test]
    fn test_serialization() {
        let effects = StatusEffects::new()
            .with(StatusKind::Strength, 2, None)
            .with(StatusKind::Weak, 1, Some(2));

        let json = serde_json::to_string(&effects).unwrap();
        let deserialized: StatusEffects = serde_json::from_str(&json).unwrap();
        assert_eq!(effects, deserialized);
    }
}
