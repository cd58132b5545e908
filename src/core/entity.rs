//! Identifiers for the things a combat tracks.
//!
//! ## ID Kinds
//!
//! - `CardId`: a card *definition* ("hammer-strike"). Many instances share one.
//! - `CardInstanceId`: one physical card in the run deck. Unique for the run,
//!   so the same id follows the card from the run deck into combat piles.
//! - `EnemyId`: an enemy's slot in the combat, in acting order.
//!
//! ```
//! use forge_combat::core::{CardId, CardInstanceId, EnemyId};
//!
//! let strike = CardId::new("hammer-strike");
//! assert_eq!(strike.as_str(), "hammer-strike");
//!
//! let first = CardInstanceId::new(1);
//! assert_eq!(first.next(), CardInstanceId::new(2));
//!
//! assert_eq!(EnemyId::new(0).index(), 0);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a card definition.
///
/// Definitions are authored data, so ids are the stable string keys used
/// by the card library (e.g. `"spear-thrust"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identifier of one card instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardInstanceId(pub u32);

impl CardInstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for CardInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Enemy slot within a combat.
///
/// Slots are assigned in spawn order and never reused, so an id stays
/// valid (pointing at a dead enemy) after that enemy dies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl EnemyId {
    /// Create a new enemy ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Id for the enemy stored at `index`, if the slot is addressable.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Index into the combat's enemy list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Enemy {}", self.0)
    }
}

/// Either side of a combat: the player or one enemy.
///
/// Effects are resolved *by* a combatant and *against* combatants; this
/// names both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatantId {
    Player,
    Enemy(EnemyId),
}

impl CombatantId {
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, CombatantId::Player)
    }

    #[must_use]
    pub const fn enemy(self) -> Option<EnemyId> {
        match self {
            CombatantId::Enemy(id) => Some(id),
            CombatantId::Player => None,
        }
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatantId::Player => f.write_str("Player"),
            CombatantId::Enemy(id) => write!(f, "{}", id),
        }
    }
}
