//! HP, block and statuses: the part of the player and of every enemy that
//! the damage pipeline reads and writes.

use serde::{Deserialize, Serialize};

use crate::status::{StatusEffects, StatusKind};

/// A body in combat.
///
/// `hp` stays within `0..=max_hp`. A combatant at 0 HP is dead and is
/// never revived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub hp: u32,
    pub max_hp: u32,
    pub block: u32,
    pub statuses: StatusEffects,
}

impl Combatant {
    /// A combatant at full health.
    #[must_use]
    pub fn new(max_hp: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            block: 0,
            statuses: StatusEffects::new(),
        }
    }

    /// Start below full health (clamped to `max_hp`).
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: u32) -> Self {
        self.block = block;
        self
    }

    #[must_use]
    pub fn with_status(mut self, kind: StatusKind, stacks: u32, duration: Option<i32>) -> Self {
        self.statuses.add(kind, stacks, duration);
        self
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Lose HP directly, ignoring block. Returns the HP actually lost.
    pub fn lose_hp(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Heal up to `max_hp`. Returns the HP actually restored.
    ///
    /// The dead stay dead.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    pub fn gain_block(&mut self, amount: u32) {
        self.block = self.block.saturating_add(amount);
    }

    /// Is HP at or below `percent` of max HP?
    #[must_use]
    pub fn hp_at_or_below(&self, percent: u32) -> bool {
        u64::from(self.hp) * 100 <= u64::from(percent) * u64::from(self.max_hp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lose_hp_floors_at_zero() {
        let mut c = Combatant::new(10).with_block(5);
        assert_eq!(c.lose_hp(4), 4);
        assert_eq!(c.hp, 6);
        assert_eq!(c.block, 5); // Block untouched

        assert_eq!(c.lose_hp(100), 6);
        assert_eq!(c.hp, 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_heal_clamped() {
        let mut c = Combatant::new(20).with_hp(15);
        assert_eq!(c.heal(10), 5);
        assert_eq!(c.hp, 20);

        let mut dead = Combatant::new(20).with_hp(0);
        assert_eq!(dead.heal(10), 0);
        assert_eq!(dead.hp, 0);
    }

    #[test]
    fn test_with_hp_clamped() {
        assert_eq!(Combatant::new(10).with_hp(50).hp, 10);
    }

    #[test]
    fn test_hp_threshold() {
        let c = Combatant::new(150).with_hp(75);
        assert!(c.hp_at_or_below(50));
        assert!(!c.hp_at_or_below(49));

        let c = Combatant::new(45).with_hp(23);
        assert!(!c.hp_at_or_below(50)); // 23/45 = 51%
    }
}
