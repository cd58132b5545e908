//! Act 1 enemies.

use crate::enemies::{
    AbilityAction, AbilityTrigger, EnemyAbility, EnemyDefinition, IntentTemplate as Intent, Loot,
};
use crate::status::StatusKind;

pub fn imp_swarm() -> EnemyDefinition {
    EnemyDefinition::new("imp-swarm", "Imp Swarm", 12, 1)
        .with_pattern([Intent::attack(4).times(2), Intent::attack(4).times(2), Intent::defend(6)])
        .with_loot(Loot::favor(10))
}

pub fn lost_soul() -> EnemyDefinition {
    EnemyDefinition::new("lost-soul", "Lost Soul", 18, 1)
        .with_pattern([
            Intent::attack(6),
            Intent::debuff(StatusKind::Weak, 1).for_turns(2),
            Intent::attack(8),
        ])
        .with_loot(Loot::favor(12))
}

pub fn hell_hound() -> EnemyDefinition {
    EnemyDefinition::new("hell-hound", "Hell Hound", 18, 1)
        .with_pattern([Intent::attack(7), Intent::attack(7), Intent::buff(StatusKind::Strength, 2)])
        .with_loot(Loot::favor(15))
}

pub fn tormented_soul() -> EnemyDefinition {
    EnemyDefinition::new("tormented-soul", "Tormented Soul", 15, 1)
        .with_pattern([
            Intent::attack_debuff(5, StatusKind::Weak, 1).for_turns(2),
            Intent::attack(6),
            Intent::defend(8),
        ])
        .with_loot(Loot::favor(12))
}

pub fn flame_sprite() -> EnemyDefinition {
    let scorch = Intent::attack_debuff(6, StatusKind::Burn, 1).for_turns(2);
    EnemyDefinition::new("flame-sprite", "Flame Sprite", 10, 1)
        .with_pattern([scorch.clone(), scorch.clone(), scorch])
        .with_loot(Loot::favor(10))
}

pub fn bone_warrior() -> EnemyDefinition {
    EnemyDefinition::new("bone-warrior", "Bone Warrior", 22, 1)
        .with_pattern([Intent::defend(10), Intent::attack(9), Intent::attack(9)])
        .with_loot(Loot::favor(18))
}

pub fn forge_breaker() -> EnemyDefinition {
    EnemyDefinition::new("forge-breaker", "Forge Breaker", 45, 1)
        .elite()
        .with_pattern([
            Intent::heavy_attack(12),
            Intent::attack(8),
            Intent::buff(StatusKind::Strength, 3),
        ])
        .with_loot(elite_loot(50))
}

pub fn weapon_eater() -> EnemyDefinition {
    EnemyDefinition::new("weapon-eater", "Weapon Eater", 40, 1)
        .elite()
        .with_pattern([
            Intent::debuff(StatusKind::Weak, 1).for_turns(3),
            Intent::attack(10),
            Intent::defend(15),
        ])
        .with_loot(elite_loot(60))
}

pub fn corrupted_hoplite() -> EnemyDefinition {
    EnemyDefinition::new("corrupted-hoplite", "Corrupted Hoplite", 50, 1)
        .elite()
        .with_pattern([Intent::defend(20), Intent::attack(15), Intent::heavy_attack(25)])
        .with_loot(elite_loot(70))
}

/// Act 1 boss. At half HP it gains Strength and switches to a harder
/// pattern.
pub fn molochs_wrath() -> EnemyDefinition {
    let demon_general = EnemyAbility::new("demon-general", "Demon General", AbilityTrigger::HpAtOrBelow(50))
        .with_action(AbilityAction::GainStatus {
            kind: StatusKind::Strength,
            stacks: 3,
        })
        .with_action(AbilityAction::ReplacePattern(vec![
            Intent::heavy_attack(25),
            Intent::attack_debuff(12, StatusKind::Vulnerable, 1).for_turns(2),
            Intent::attack(10).times(2),
            Intent::defend(20),
        ]));

    EnemyDefinition::new("molochs-wrath", "Moloch's Wrath", 150, 1)
        .boss()
        .with_pattern([
            Intent::buff(StatusKind::Strength, 5),
            Intent::heavy_attack(20),
            Intent::attack_debuff(15, StatusKind::Vulnerable, 1).for_turns(2),
            Intent::defend(25),
        ])
        .with_ability(demon_general)
        .with_loot(
            Loot::favor(150)
                .with_shard_chance(1.0)
                .with_card_reward()
                .with_artifact_chance(1.0),
        )
}

fn elite_loot(favor: u32) -> Loot {
    Loot::favor(favor).with_shard_chance(0.25).with_card_reward()
}

pub fn act1_basic() -> Vec<EnemyDefinition> {
    vec![imp_swarm(), lost_soul(), hell_hound(), tormented_soul(), flame_sprite(), bone_warrior()]
}

pub fn act1_elites() -> Vec<EnemyDefinition> {
    vec![forge_breaker(), weapon_eater(), corrupted_hoplite()]
}

pub fn act1_bosses() -> Vec<EnemyDefinition> {
    vec![molochs_wrath()]
}

/// Look up any Act 1 enemy by id.
#[must_use]
pub fn enemy_by_id(id: &str) -> Option<EnemyDefinition> {
    act1_basic()
        .into_iter()
        .chain(act1_elites())
        .chain(act1_bosses())
        .find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster() {
        assert_eq!(act1_basic().len(), 6);
        assert!(act1_elites().iter().all(|e| e.is_elite && e.loot.card_reward));
        assert!(act1_bosses().iter().all(|e| e.is_boss));
    }

    #[test]
    fn test_every_enemy_has_a_pattern() {
        for enemy in act1_basic().into_iter().chain(act1_elites()).chain(act1_bosses()) {
            assert!(!enemy.pattern.is_empty(), "{} has no pattern", enemy.id);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(enemy_by_id("hell-hound").map(|e| e.max_hp), Some(18));
        assert!(enemy_by_id("minotaur").is_none());
    }
}
