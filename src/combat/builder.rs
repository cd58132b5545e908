//! Combat construction.

use std::sync::Arc;

use im::Vector;

use super::combatant::Combatant;
use super::state::{CombatState, Player};
use crate::cards::CardInstance;
use crate::core::{CombatConfig, CombatPhase, EnemyId, GameRng};
use crate::enemies::{Enemy, EnemyDefinition};
use crate::run::{PlayerResources, RunDeck};
use crate::zones::Piles;

/// Starting HP when no resources are given.
const DEFAULT_PLAYER_HP: u32 = 80;

/// Builder for a `CombatState`.
///
/// ```
/// use std::sync::Arc;
/// use forge_combat::combat::CombatBuilder;
/// use forge_combat::content;
/// use forge_combat::core::CombatPhase;
///
/// let cards = content::card_registry();
/// let state = CombatBuilder::new()
///     .enemy(Arc::new(content::hell_hound()))
///     .run_deck(&content::starter_deck(&cards))
///     .seed(42)
///     .build();
///
/// assert_eq!(state.phase, CombatPhase::PlayerActing);
/// assert_eq!(state.player.piles.hand().len(), 5);
/// ```
pub struct CombatBuilder {
    enemies: Vec<Arc<EnemyDefinition>>,
    deck: Vec<CardInstance>,
    resources: PlayerResources,
    config: CombatConfig,
    rng: Option<GameRng>,
}

impl Default for CombatBuilder {
    fn default() -> Self {
        Self {
            enemies: Vec::new(),
            deck: Vec::new(),
            resources: PlayerResources::new(DEFAULT_PLAYER_HP),
            config: CombatConfig::default(),
            rng: None,
        }
    }
}

impl CombatBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enemy(mut self, definition: Arc<EnemyDefinition>) -> Self {
        self.enemies.push(definition);
        self
    }

    pub fn enemies(mut self, definitions: impl IntoIterator<Item = Arc<EnemyDefinition>>) -> Self {
        self.enemies.extend(definitions);
        self
    }

    /// Use a copy of the run's deck.
    pub fn run_deck(mut self, deck: &RunDeck) -> Self {
        self.deck = deck.iter().cloned().collect();
        self
    }

    pub fn deck(mut self, cards: impl IntoIterator<Item = CardInstance>) -> Self {
        self.deck = cards.into_iter().collect();
        self
    }

    pub fn resources(mut self, resources: PlayerResources) -> Self {
        self.resources = resources;
        self
    }

    pub fn config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(GameRng::new(seed));
        self
    }

    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Create the combat and start its first player turn.
    ///
    /// Without a seed or generator the combat is seeded from the OS.
    pub fn build(self) -> CombatState {
        let mut rng = self.rng.unwrap_or_else(GameRng::from_entropy);

        let enemies: Vector<Enemy> = self
            .enemies
            .into_iter()
            .zip(0..)
            .map(|(definition, index)| Enemy::new(EnemyId::new(index), definition, &self.config))
            .collect();

        let run_deck: Vector<CardInstance> = self.deck.iter().cloned().collect();
        let piles = Piles::from_deck(self.deck, &mut rng);

        let player = Player {
            combatant: Combatant::new(self.resources.max_hp).with_hp(self.resources.hp),
            energy: 0,
            piles,
        };

        tracing::info!(
            "Combat starts: player at {} HP vs {}, seed {}",
            player.combatant.hp,
            enemies.iter().map(|e| e.name()).collect::<Vec<_>>().join(", "),
            rng.seed()
        );

        let mut state = CombatState {
            phase: CombatPhase::StartOfPlayerTurn,
            turn: 0,
            player,
            enemies,
            selected_target: None,
            config: self.config,
            resources: self.resources,
            run_deck,
            rng,
            rewards: None,
        };

        if !state.check_terminal() {
            state.start_player_turn();
        }
        state
    }
}

/// Start a combat against `enemies` with a copy of the run's deck.
pub fn start_combat(
    enemies: impl IntoIterator<Item = Arc<EnemyDefinition>>,
    deck: &RunDeck,
    resources: &PlayerResources,
    config: CombatConfig,
    rng: GameRng,
) -> CombatState {
    CombatBuilder::new()
        .enemies(enemies)
        .run_deck(deck)
        .resources(resources.clone())
        .config(config)
        .rng(rng)
        .build()
}
