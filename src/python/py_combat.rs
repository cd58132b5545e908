//! Combat bindings for Python.

use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::combat::{CombatBuilder, CombatState, Outcome};
use crate::content;
use crate::core::{CardInstanceId, EnemyId};
use crate::rules::{apply_action, legal_actions, CombatAction};

/// Python wrapper for CombatAction.
#[pyclass(name = "CombatAction")]
#[derive(Clone, Debug)]
pub struct PyCombatAction(pub CombatAction);

#[pymethods]
impl PyCombatAction {
    /// Play a card, optionally at an enemy index.
    #[staticmethod]
    #[pyo3(signature = (card, target = None))]
    fn play(card: u32, target: Option<u32>) -> Self {
        Self(CombatAction::PlayCard {
            card: CardInstanceId::new(card),
            target: target.map(EnemyId::new),
        })
    }

    #[staticmethod]
    fn end_turn() -> Self {
        Self(CombatAction::EndTurn)
    }

    /// Card instance id, or None for EndTurn.
    #[getter]
    fn card(&self) -> Option<u32> {
        match self.0 {
            CombatAction::PlayCard { card, .. } => Some(card.0),
            CombatAction::EndTurn => None,
        }
    }

    #[getter]
    fn target(&self) -> Option<u32> {
        match self.0 {
            CombatAction::PlayCard { target, .. } => target.map(|t| t.0),
            CombatAction::EndTurn => None,
        }
    }

    fn __repr__(&self) -> String {
        format!("CombatAction({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Python wrapper for a combat against shipped enemies with the starter deck.
#[pyclass(name = "Combat")]
pub struct PyCombat {
    state: CombatState,
}

#[pymethods]
impl PyCombat {
    /// Create a combat.
    ///
    /// # Arguments
    /// - enemies: Enemy ids, e.g. ["imp-swarm", "lost-soul"]
    /// - seed: RNG seed for deterministic combats
    /// - hp: Starting player HP
    #[new]
    #[pyo3(signature = (enemies, seed = 42, hp = 80))]
    fn new(enemies: Vec<String>, seed: u64, hp: u32) -> PyResult<Self> {
        let definitions = enemies
            .iter()
            .map(|id| {
                content::enemy_by_id(id)
                    .map(Arc::new)
                    .ok_or_else(|| PyValueError::new_err(format!("unknown enemy: {}", id)))
            })
            .collect::<PyResult<Vec<_>>>()?;

        let cards = content::card_registry();
        let state = CombatBuilder::new()
            .enemies(definitions)
            .run_deck(&content::starter_deck(&cards))
            .resources(crate::run::PlayerResources::new(hp))
            .seed(seed)
            .build();
        Ok(Self { state })
    }

    fn legal_actions(&self) -> Vec<PyCombatAction> {
        legal_actions(&self.state).into_iter().map(PyCombatAction).collect()
    }

    /// Apply an action. Raises ValueError if it is rejected.
    fn apply_action(&mut self, action: &PyCombatAction) -> PyResult<()> {
        apply_action(&mut self.state, &action.0)
            .map(|_| ())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// "victory", "defeat", or None while the combat runs.
    fn outcome(&self) -> Option<&'static str> {
        self.state.result().map(|r| match r.outcome {
            Outcome::Victory => "victory",
            Outcome::Defeat => "defeat",
        })
    }

    #[getter]
    fn phase(&self) -> &'static str {
        self.state.phase.as_str()
    }

    #[getter]
    fn turn(&self) -> u32 {
        self.state.turn
    }

    #[getter]
    fn player_hp(&self) -> u32 {
        self.state.player.combatant.hp
    }

    #[getter]
    fn player_block(&self) -> u32 {
        self.state.player.combatant.block
    }

    #[getter]
    fn energy(&self) -> u32 {
        self.state.player.energy
    }

    /// HP of each enemy, dead ones included.
    fn enemy_hp(&self) -> Vec<u32> {
        self.state.enemies.iter().map(|e| e.combatant.hp).collect()
    }

    /// (instance id, card name, cost) for each card in hand.
    fn hand(&self) -> Vec<(u32, String, u32)> {
        self.state
            .player
            .piles
            .hand()
            .iter()
            .map(|c| (c.id.0, c.name(), c.energy_cost()))
            .collect()
    }

    /// Copy the combat for simulation.
    fn copy(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
