//! Blessings granted by the meta layer.

use crate::run::{Blessing, BlessingEffect};
use crate::status::StatusKind;

/// Every blessing a run can earn.
#[must_use]
pub fn all_blessings() -> Vec<Blessing> {
    vec![
        Blessing::new(
            "leonidas-strength-1",
            "Leonidas' Strength",
            BlessingEffect::StartCombatBuff {
                kind: StatusKind::Strength,
                stacks: 1,
            },
        ),
        Blessing::new("leonidas-wrath", "Leonidas' Wrath", BlessingEffect::DamageBonus(3)),
        Blessing::new("achilles-fury-1", "Achilles' Fury", BlessingEffect::StartTurnDamage(3)),
        Blessing::new("achilles-invulnerability", "Invulnerability", BlessingEffect::StartCombatBlock(15)),
        Blessing::new(
            "artemisia-defense-1",
            "Artemisia's Defense",
            BlessingEffect::StartCombatBuff {
                kind: StatusKind::Dexterity,
                stacks: 2,
            },
        ),
        Blessing::new("artemisia-fortification", "Fortification", BlessingEffect::BlockBonus(2)),
        Blessing::new("brasidas-efficiency-1", "Brasidas' Efficiency", BlessingEffect::StartCombatEnergy(1)),
        Blessing::new("brasidas-mastery", "Forge Mastery", BlessingEffect::DrawPerTurn(1)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique() {
        let blessings = all_blessings();
        let mut ids: Vec<_> = blessings.iter().map(|b| b.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), blessings.len());
    }
}
