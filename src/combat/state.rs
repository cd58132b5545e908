//! Combat state: everything one fight owns.
//!
//! A `CombatState` is a single explicit value. Entry points mutate it in
//! place; drivers that want a reducer style (search, undo) clone first,
//! which is cheap because piles, enemies and the deck snapshot are
//! persistent vectors.

use std::sync::Arc;

use im::Vector;
use smallvec::SmallVec;

use super::combatant::Combatant;
use super::result::CombatRewards;
use crate::cards::CardInstance;
use crate::core::{CombatConfig, CombatError, CombatPhase, CombatantId, EnemyId, GameRng};
use crate::enemies::{Enemy, EnemyDefinition};
use crate::run::PlayerResources;
use crate::zones::Piles;

/// The player side of a combat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub combatant: Combatant,
    pub energy: u32,
    pub piles: Piles,
}

/// One combat.
#[derive(Clone, Debug)]
pub struct CombatState {
    pub phase: CombatPhase,

    /// Player turns started so far (the first turn is 1).
    pub turn: u32,

    pub player: Player,

    /// In acting order. Dead enemies stay in place so ids remain valid.
    pub enemies: Vector<Enemy>,

    /// The enemy cards aim at when no explicit target is given.
    pub selected_target: Option<EnemyId>,

    pub config: CombatConfig,

    /// Resources and blessings as they were when the combat started.
    pub resources: PlayerResources,

    /// The permanent deck as it was when the combat started. Upgrades made
    /// during the combat apply to the piles, never to this copy.
    pub run_deck: Vector<CardInstance>,

    /// The single source of randomness for this combat.
    pub rng: GameRng,

    /// Rolled once, when the combat is won.
    pub rewards: Option<CombatRewards>,
}

impl CombatState {
    #[must_use]
    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id.index())
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.get_mut(id.index())
    }

    /// A living enemy, or `None` if it is dead or never existed.
    #[must_use]
    pub fn living_enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemy(id).filter(|e| e.is_alive())
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    #[must_use]
    pub fn living_enemy_ids(&self) -> SmallVec<[EnemyId; 4]> {
        self.living_enemies().map(|e| e.id).collect()
    }

    #[must_use]
    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        match id {
            CombatantId::Player => Some(&self.player.combatant),
            CombatantId::Enemy(enemy) => self.enemy(enemy).map(|e| &e.combatant),
        }
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        match id {
            CombatantId::Player => Some(&mut self.player.combatant),
            CombatantId::Enemy(enemy) => self.enemy_mut(enemy).map(|e| &mut e.combatant),
        }
    }

    /// Pick the enemy a single-target card will hit.
    ///
    /// An explicit target must be alive. Without one, the selected target is
    /// used if alive, then the only living enemy if there is exactly one.
    pub fn resolve_target(&self, explicit: Option<EnemyId>) -> Result<EnemyId, CombatError> {
        if let Some(id) = explicit {
            return self
                .living_enemy(id)
                .map(|e| e.id)
                .ok_or(CombatError::InvalidTarget(Some(id)));
        }

        if let Some(selected) = self.selected_target.and_then(|id| self.living_enemy(id)) {
            return Ok(selected.id);
        }

        let mut living = self.living_enemies();
        match (living.next(), living.next()) {
            (Some(only), None) => Ok(only.id),
            _ => Err(CombatError::InvalidTarget(None)),
        }
    }

    /// Add an enemy mid-combat. It acts from the next enemy turn on.
    ///
    /// Returns `None`, spawning nothing, once no slot id is left.
    pub fn spawn_enemy(&mut self, definition: Arc<EnemyDefinition>) -> Option<EnemyId> {
        let Some(id) = EnemyId::from_index(self.enemies.len()) else {
            tracing::warn!("no enemy slot left for {}", definition.name);
            return None;
        };
        let enemy = Enemy::new(id, definition, &self.config);
        tracing::debug!("{} joins the combat as {}", enemy.name(), id);
        self.enemies.push_back(enemy);
        Some(id)
    }

    /// Enter Victory or Defeat if the fight is decided.
    ///
    /// Runs after every HP-affecting step. Returns true if the combat is
    /// over (whether it just ended or already had).
    pub fn check_terminal(&mut self) -> bool {
        if self.phase.is_terminal() {
            return true;
        }

        if !self.player.combatant.is_alive() {
            self.phase = CombatPhase::Defeat;
            tracing::info!("Combat lost on turn {}", self.turn);
            return true;
        }

        if self.living_enemies().next().is_none() {
            self.phase = CombatPhase::Victory;
            let rewards = CombatRewards::roll(self.enemies.iter().map(|e| &e.definition.loot), &mut self.rng);
            tracing::info!(
                "Combat won on turn {}: {} favor, {} shards",
                self.turn,
                rewards.divine_favor,
                rewards.adamant_shards
            );
            self.rewards = Some(rewards);
            return true;
        }

        false
    }
}
