//! Card library.
//!
//! Cards whose original text needs a mechanic the engine does not model
//! (retaliation, unblockable damage, per-turn attack counters, discards)
//! keep only their base effects, and their text here says just that.
//! Wild Swing's random damage is fixed at the midpoint of its range.

use crate::cards::{CardDefinition, CardKind, CardRegistry, Rarity, UpgradedVersion};
use crate::effects::{Condition, EffectDescriptor as Fx, TargetSelector};
use crate::status::StatusKind;

fn card(id: &str, name: &str, kind: CardKind, rarity: Rarity, cost: u32) -> CardDefinition {
    CardDefinition::new(id, name, kind, rarity, cost)
}

/// A registry holding every card below.
#[must_use]
pub fn card_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for definition in all_cards() {
        registry.register(definition);
    }
    registry
}

/// Every card, common attacks first.
#[must_use]
pub fn all_cards() -> Vec<CardDefinition> {
    let mut cards = common_attacks();
    cards.extend(common_defenses());
    cards.extend(common_forge());
    cards.extend(uncommon_attacks());
    cards.extend(uncommon_defenses());
    cards.extend(uncommon_forge());
    cards.extend(rare_attacks());
    cards.extend(hybrids());
    cards
}

fn common_attacks() -> Vec<CardDefinition> {
    use crate::cards::CardKind::Attack;
    use crate::cards::Rarity::Common;

    vec![
        card("hammer-strike", "Hammer Strike", Attack, Common, 1)
            .with_description("Deal 6 damage.")
            .with_effects([Fx::damage(6)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Deal 8 damage.", [Fx::damage(8)])),
        card("forge-smash", "Forge Smash", Attack, Common, 2)
            .with_description("Deal 12 damage.")
            .with_effects([Fx::damage(12)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Deal 16 damage.", [Fx::damage(16)])),
        card("spartan-strike", "Spartan Strike", Attack, Common, 1)
            .with_description("Deal 7 damage.")
            .with_effects([Fx::damage(7)])
            .with_tags(["Strike", "Spartan"])
            .with_upgrade(UpgradedVersion::new("Deal 10 damage.", [Fx::damage(10)])),
        card("sword-slash", "Sword Slash", Attack, Common, 1)
            .with_description("Deal 5 damage. Draw 1 card.")
            .with_effects([Fx::damage(5), Fx::draw(1)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Deal 7 damage. Draw 1 card.", [Fx::damage(7), Fx::draw(1)])),
        card("spear-thrust", "Spear Thrust", Attack, Common, 2)
            .with_description("Deal 10 damage. If this kills an enemy, gain 2 Energy.")
            .with_effects([Fx::damage(10), Fx::gain_energy(2).when(Condition::Kills)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new(
                "Deal 14 damage. If this kills an enemy, gain 2 Energy.",
                [Fx::damage(14), Fx::gain_energy(2).when(Condition::Kills)],
            )),
        card("iron-fist", "Iron Fist", Attack, Common, 0)
            .with_description("Deal 3 damage.")
            .with_effects([Fx::damage(3)])
            .with_tags(["Strike"])
            .with_upgrade(UpgradedVersion::new("Deal 5 damage.", [Fx::damage(5)])),
        card("quench-strike", "Quench Strike", Attack, Common, 2)
            .with_description("Deal 9 damage. Gain 4 Block.")
            .with_effects([Fx::damage(9), Fx::block(4)])
            .with_tags(["Strike", "Forge"])
            .with_upgrade(UpgradedVersion::new("Deal 12 damage. Gain 6 Block.", [Fx::damage(12), Fx::block(6)])),
        card("wild-swing", "Wild Swing", Attack, Common, 1)
            .with_description("Deal 7 damage.")
            .with_effects([Fx::damage(7)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Deal 10 damage.", [Fx::damage(10)])),
        card("twin-strike", "Twin Strike", Attack, Common, 1)
            .with_description("Deal 3 damage twice.")
            .with_effects([Fx::damage(3).times(2)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Deal 5 damage twice.", [Fx::damage(5).times(2)])),
    ]
}

fn common_defenses() -> Vec<CardDefinition> {
    use crate::cards::CardKind::Defense;
    use crate::cards::Rarity::Common;

    vec![
        card("shield-brace", "Shield Brace", Defense, Common, 1)
            .with_description("Gain 5 Block.")
            .with_effects([Fx::block(5)])
            .with_tags(["Block"])
            .with_upgrade(UpgradedVersion::new("Gain 8 Block.", [Fx::block(8)])),
        card("aspis-guard", "Aspis Guard", Defense, Common, 1)
            .with_description("Gain 6 Block.")
            .with_effects([Fx::block(6)])
            .with_tags(["Block", "Spartan"])
            .with_upgrade(UpgradedVersion::new("Gain 9 Block.", [Fx::block(9)])),
        card("defensive-stance", "Defensive Stance", Defense, Common, 2)
            .with_description("Gain 11 Block.")
            .with_effects([Fx::block(11)])
            .with_tags(["Block"])
            .with_upgrade(UpgradedVersion::new("Gain 15 Block.", [Fx::block(15)])),
        card("step-back", "Step Back", Defense, Common, 0)
            .with_description("Gain 3 Block.")
            .with_effects([Fx::block(3)])
            .with_tags(["Block"])
            .with_upgrade(UpgradedVersion::new("Gain 5 Block.", [Fx::block(5)])),
        card("reactive-armor", "Reactive Armor", Defense, Common, 1)
            .with_description("Gain 5 Block. Your next attack deals +2 damage.")
            .with_effects([Fx::block(5), Fx::apply_status(StatusKind::Vigor, 2)])
            .with_tags(["Block"])
            .with_upgrade(UpgradedVersion::new(
                "Gain 7 Block. Your next attack deals +3 damage.",
                [Fx::block(7), Fx::apply_status(StatusKind::Vigor, 3)],
            )),
        card("phalanx-form", "Phalanx Form", Defense, Common, 3)
            .with_description("Gain 20 Block.")
            .with_effects([Fx::block(20)])
            .with_tags(["Block", "Spartan"])
            .with_upgrade(UpgradedVersion::new("Gain 28 Block.", [Fx::block(28)])),
        card("bronze-guard", "Bronze Guard", Defense, Common, 2)
            .with_description("Gain 9 Block.")
            .with_effects([Fx::block(9)])
            .with_tags(["Block"])
            .with_upgrade(UpgradedVersion::new("Gain 12 Block.", [Fx::block(12)])),
    ]
}

fn common_forge() -> Vec<CardDefinition> {
    use crate::cards::CardKind::Forge;
    use crate::cards::Rarity::Common;

    vec![
        card("temper", "Temper", Forge, Common, 1)
            .with_description("Upgrade a card in hand for this combat.")
            .with_effects([Fx::upgrade_card()])
            .with_tags(["Forge"])
            .with_upgrade(
                UpgradedVersion::new("Upgrade a card in hand for this combat.", [Fx::upgrade_card()]).with_cost(0),
            ),
        card("bellows-blast", "Bellows Blast", Forge, Common, 0)
            .with_description("Gain 1 Energy.")
            .with_effects([Fx::gain_energy(1)])
            .with_tags(["Forge", "Fire"])
            .with_upgrade(UpgradedVersion::new("Gain 2 Energy.", [Fx::gain_energy(2)])),
        card("stoke-flames", "Stoke Flames", Forge, Common, 1)
            .with_description("Draw 2 cards.")
            .with_effects([Fx::draw(2)])
            .with_tags(["Forge", "Fire"])
            .with_upgrade(UpgradedVersion::new("Draw 3 cards.", [Fx::draw(3)])),
        card("sharpen", "Sharpen", Forge, Common, 1)
            .with_description("Your next attack deals +4 damage.")
            .with_effects([Fx::apply_status(StatusKind::Vigor, 4)])
            .with_tags(["Forge", "Weapon"])
            .with_upgrade(UpgradedVersion::new(
                "Your next attack deals +6 damage.",
                [Fx::apply_status(StatusKind::Vigor, 6)],
            )),
        card("metal-scraps", "Metal Scraps", Forge, Common, 0)
            .with_description("Gain 3 Block. Exhaust.")
            .with_effects([Fx::block(3)])
            .with_tags(["Forge"])
            .exhausts()
            .with_upgrade(UpgradedVersion::new("Gain 5 Block. Exhaust.", [Fx::block(5)])),
        card("oil-the-blade", "Oil the Blade", Forge, Common, 0)
            .with_description("Draw 1 card.")
            .with_effects([Fx::draw(1)])
            .with_tags(["Forge", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Draw 2 cards.", [Fx::draw(2)])),
    ]
}

fn uncommon_attacks() -> Vec<CardDefinition> {
    use crate::cards::CardKind::Attack;
    use crate::cards::Rarity::Uncommon;

    vec![
        card("molten-strike", "Molten Strike", Attack, Uncommon, 2)
            .with_description("Deal 13 damage. Apply 2 Burn.")
            .with_effects([
                Fx::damage(13),
                Fx::apply_status(StatusKind::Burn, 2).on(TargetSelector::Enemy),
            ])
            .with_tags(["Strike", "Fire"])
            .with_upgrade(UpgradedVersion::new(
                "Deal 17 damage. Apply 3 Burn.",
                [
                    Fx::damage(17),
                    Fx::apply_status(StatusKind::Burn, 3).on(TargetSelector::Enemy),
                ],
            )),
        card("execute", "Execute", Attack, Uncommon, 2)
            .with_description("Deal 18 damage only to enemies below 50% HP.")
            .with_effects([Fx::damage(18).when(Condition::EnemyBelow(50))])
            .with_tags(["Strike"])
            .with_upgrade(UpgradedVersion::new(
                "Deal 25 damage only to enemies below 50% HP.",
                [Fx::damage(25).when(Condition::EnemyBelow(50))],
            )),
        card("whirlwind", "Whirlwind", Attack, Uncommon, 1)
            .with_description("Deal 8 damage to ALL enemies.")
            .with_effects([Fx::damage_all(8)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Deal 10 damage to ALL enemies.", [Fx::damage_all(10)])),
        card("blessed-blade", "Blessed Blade", Attack, Uncommon, 2)
            .with_description("Deal 10 damage. If this kills an enemy, draw 2 cards and gain 1 Energy.")
            .with_effects([
                Fx::damage(10),
                Fx::draw(2).when(Condition::Kills),
                Fx::gain_energy(1).when(Condition::Kills),
            ])
            .with_tags(["Strike", "Divine", "Weapon"])
            .with_upgrade(UpgradedVersion::new(
                "Deal 14 damage. If this kills an enemy, draw 2 cards and gain 1 Energy.",
                [
                    Fx::damage(14),
                    Fx::draw(2).when(Condition::Kills),
                    Fx::gain_energy(1).when(Condition::Kills),
                ],
            )),
        card("crushing-blow", "Crushing Blow", Attack, Uncommon, 2)
            .with_description("Deal 15 damage. Apply 2 Broken Armor.")
            .with_effects([
                Fx::damage(15),
                Fx::apply_status(StatusKind::BrokenArmor, 2).on(TargetSelector::Enemy),
            ])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new(
                "Deal 20 damage. Apply 3 Broken Armor.",
                [
                    Fx::damage(20),
                    Fx::apply_status(StatusKind::BrokenArmor, 3).on(TargetSelector::Enemy),
                ],
            )),
        card("dual-wield", "Dual Wield", Attack, Uncommon, 2)
            .with_description("Deal 8 damage twice.")
            .with_effects([Fx::damage(8).times(2)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Deal 11 damage twice.", [Fx::damage(11).times(2)])),
        card("adamant-strike", "Adamant Strike", Attack, Uncommon, 3)
            .with_description("Deal 25 damage.")
            .with_effects([Fx::damage(25)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Deal 35 damage.", [Fx::damage(35)])),
        card("precision-strike", "Precision Strike", Attack, Uncommon, 2)
            .with_description("Deal 16 damage.")
            .with_effects([Fx::damage(16)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Deal 22 damage.", [Fx::damage(22)])),
        card("spartan-fury", "Spartan Fury", Attack, Uncommon, 1)
            .with_description("Deal 5 damage.")
            .with_effects([Fx::damage(5)])
            .with_tags(["Strike", "Spartan"])
            .with_upgrade(UpgradedVersion::new("Deal 7 damage.", [Fx::damage(7)])),
    ]
}

fn uncommon_defenses() -> Vec<CardDefinition> {
    use crate::cards::CardKind::Defense;
    use crate::cards::Rarity::Uncommon;

    vec![
        card("fortress", "Fortress", Defense, Uncommon, 2)
            .with_description("Gain 12 Block. Block no longer clears at the start of your turn.")
            .with_effects([Fx::block(12), Fx::apply_status(StatusKind::Fortified, 1)])
            .with_tags(["Block"])
            .with_upgrade(UpgradedVersion::new(
                "Gain 16 Block. Block no longer clears at the start of your turn.",
                [Fx::block(16), Fx::apply_status(StatusKind::Fortified, 1)],
            )),
        card("divine-shield", "Divine Shield", Defense, Uncommon, 3)
            .with_description("Gain 18 Block. Heal 5 HP.")
            .with_effects([Fx::block(18), Fx::heal(5)])
            .with_tags(["Block", "Divine"])
            .with_upgrade(UpgradedVersion::new("Gain 24 Block. Heal 8 HP.", [Fx::block(24), Fx::heal(8)])),
        card("second-wind", "Second Wind", Defense, Uncommon, 1)
            .with_description("Gain 6 Block. Draw 1 card.")
            .with_effects([Fx::block(6), Fx::draw(1)])
            .with_tags(["Block"])
            .with_upgrade(UpgradedVersion::new("Gain 9 Block. Draw 2 cards.", [Fx::block(9), Fx::draw(2)])),
        card("counter", "Counter", Defense, Uncommon, 1)
            .with_description("Gain 7 Block.")
            .with_effects([Fx::block(7)])
            .with_tags(["Block"])
            .with_upgrade(UpgradedVersion::new("Gain 10 Block.", [Fx::block(10)])),
    ]
}

fn uncommon_forge() -> Vec<CardDefinition> {
    use crate::cards::CardKind::Forge;
    use crate::cards::Rarity::Uncommon;

    vec![
        card("master-craft", "Master Craft", Forge, Uncommon, 2)
            .with_description("Upgrade all attacks in hand for this combat.")
            .with_effects([Fx::upgrade_all_attacks()])
            .with_tags(["Forge"])
            .with_upgrade(
                UpgradedVersion::new("Upgrade all attacks in hand for this combat.", [Fx::upgrade_all_attacks()])
                    .with_cost(1),
            ),
        card("inferno", "Inferno", Forge, Uncommon, 2)
            .with_description("Gain 3 Energy. Lose 5 HP.")
            .with_effects([Fx::gain_energy(3), Fx::lose_hp(5)])
            .with_tags(["Forge", "Fire"])
            .with_upgrade(UpgradedVersion::new("Gain 4 Energy. Lose 3 HP.", [Fx::gain_energy(4), Fx::lose_hp(3)])),
        card("heat-wave", "Heat Wave", Forge, Uncommon, 2)
            .with_description("Deal 8 damage to ALL enemies.")
            .with_effects([Fx::damage_all(8)])
            .with_tags(["Forge", "Fire", "Strike"])
            .with_upgrade(UpgradedVersion::new("Deal 12 damage to ALL enemies.", [Fx::damage_all(12)])),
        card("battle-trance", "Battle Trance", Forge, Uncommon, 0)
            .with_description("Draw 3 cards.")
            .with_effects([Fx::draw(3)])
            .with_tags(["Forge"])
            .with_upgrade(UpgradedVersion::new("Draw 4 cards.", [Fx::draw(4)])),
    ]
}

fn rare_attacks() -> Vec<CardDefinition> {
    use crate::cards::CardKind::Attack;
    use crate::cards::Rarity::Rare;

    vec![
        card("olympian-wrath", "Olympian Wrath", Attack, Rare, 3)
            .with_description("Deal 18 damage. If lethal, draw 3 cards and gain 2 Energy.")
            .with_effects([
                Fx::damage(18),
                Fx::draw(3).when(Condition::Kills),
                Fx::gain_energy(2).when(Condition::Kills),
            ])
            .with_tags(["Strike", "Divine"])
            .with_upgrade(UpgradedVersion::new(
                "Deal 25 damage. If lethal, draw 3 cards and gain 2 Energy.",
                [
                    Fx::damage(25),
                    Fx::draw(3).when(Condition::Kills),
                    Fx::gain_energy(2).when(Condition::Kills),
                ],
            )),
        card("blade-dance", "Blade Dance", Attack, Rare, 2)
            .with_description("Deal 7 damage 3 times. Draw 1 card.")
            .with_effects([Fx::damage(7).times(3), Fx::draw(1)])
            .with_tags(["Strike", "Weapon"])
            .with_upgrade(UpgradedVersion::new(
                "Deal 10 damage 3 times. Draw 1 card.",
                [Fx::damage(10).times(3), Fx::draw(1)],
            )),
        card("volcanic-eruption", "Volcanic Eruption", Attack, Rare, 3)
            .with_description("Deal 25 damage to ALL enemies. Apply 3 Burn to all.")
            .with_effects([
                Fx::damage_all(25),
                Fx::apply_status(StatusKind::Burn, 3).on(TargetSelector::AllEnemies),
            ])
            .with_tags(["Strike", "Fire"])
            .with_upgrade(UpgradedVersion::new(
                "Deal 35 damage to ALL enemies. Apply 5 Burn to all.",
                [
                    Fx::damage_all(35),
                    Fx::apply_status(StatusKind::Burn, 5).on(TargetSelector::AllEnemies),
                ],
            )),
        card("phalanx-breaker", "Phalanx Breaker", Attack, Rare, 3)
            .with_description("Deal 22 damage.")
            .with_effects([Fx::damage(22)])
            .with_tags(["Strike", "Spartan", "Weapon"])
            .with_upgrade(UpgradedVersion::new("Deal 30 damage.", [Fx::damage(30)])),
        card("divine-smite", "Divine Smite", Attack, Rare, 3)
            .with_description("Deal 30 damage. Heal 30 HP.")
            .with_effects([Fx::damage(30), Fx::heal(30)])
            .with_tags(["Strike", "Divine"])
            .with_upgrade(UpgradedVersion::new(
                "Deal 40 damage. Heal 40 HP.",
                [Fx::damage(40), Fx::heal(40)],
            )),
    ]
}

fn hybrids() -> Vec<CardDefinition> {
    vec![card("combat-forge", "Combat Forge", CardKind::Hybrid, Rarity::Common, 2)
        .with_description("Deal 8 damage. Draw 1 card.")
        .with_effects([Fx::damage(8), Fx::draw(1)])
        .with_tags(["Strike", "Forge"])
        .with_upgrade(UpgradedVersion::new("Deal 11 damage. Draw 1 card.", [Fx::damage(11), Fx::draw(1)]))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_every_card() {
        let registry = card_registry();
        assert_eq!(registry.len(), all_cards().len());
        assert!(registry.get_str("hammer-strike").is_some());
        assert!(registry.get_str("volcanic-eruption").is_some());
        for id in ["bronze-guard", "precision-strike", "spartan-fury", "counter", "battle-trance", "phalanx-breaker", "divine-smite"] {
            assert!(registry.get_str(id).is_some(), "{id} is missing");
        }
    }

    #[test]
    fn test_every_card_has_one_upgrade() {
        for card in all_cards() {
            assert!(card.upgraded_version.is_some(), "{} has no upgrade", card.id);
            assert!(!card.effects.is_empty(), "{} does nothing", card.id);
        }
    }

    #[test]
    fn test_targeting_needs() {
        let registry = card_registry();
        let needs = |id: &str| registry.get_str(id).unwrap().needs_single_target();

        assert!(needs("hammer-strike"));
        assert!(needs("molten-strike"));
        assert!(!needs("whirlwind"));
        assert!(!needs("volcanic-eruption"));
        assert!(!needs("shield-brace"));
    }

    #[test]
    fn test_upgrade_costs() {
        let registry = card_registry();
        let temper = registry.get_str("temper").unwrap();
        assert_eq!(temper.upgraded_version.as_ref().unwrap().energy_cost, Some(0));
        assert!(registry.get_str("metal-scraps").unwrap().exhaust);
    }
}
