//! Turn phases of a combat.

use serde::{Deserialize, Serialize};

/// Where a combat is in its turn cycle.
///
/// ```text
/// StartOfPlayerTurn -> PlayerActing -> EndOfPlayerTurn
///        ^                                  |
///        |                                  v
/// EndOfEnemyTurn  <------------------  EnemyActing
/// ```
///
/// `Victory` and `Defeat` are terminal and may be entered from any
/// HP-affecting step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatPhase {
    StartOfPlayerTurn,
    PlayerActing,
    EndOfPlayerTurn,
    EnemyActing,
    EndOfEnemyTurn,
    Victory,
    Defeat,
}

impl CombatPhase {
    /// Is the combat over?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, CombatPhase::Victory | CombatPhase::Defeat)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CombatPhase::StartOfPlayerTurn => "start_of_player_turn",
            CombatPhase::PlayerActing => "player_acting",
            CombatPhase::EndOfPlayerTurn => "end_of_player_turn",
            CombatPhase::EnemyActing => "enemy_acting",
            CombatPhase::EndOfEnemyTurn => "end_of_enemy_turn",
            CombatPhase::Victory => "victory",
            CombatPhase::Defeat => "defeat",
        }
    }
}

impl std::fmt::Display for CombatPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(CombatPhase::Victory.is_terminal());
        assert!(CombatPhase::Defeat.is_terminal());
        assert!(!CombatPhase::PlayerActing.is_terminal());
        assert!(!CombatPhase::EnemyActing.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(CombatPhase::PlayerActing.to_string(), "player_acting");
    }
}
