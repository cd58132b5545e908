//! Errors returned by combat entry points.
//!
//! Every variant is produced while checking preconditions, before any state
//! is touched: a rejected call leaves the combat exactly as it was. Problems
//! that arise *during* resolution (a target died mid-card, the draw pile ran
//! dry) are not errors; see `ResolveResult` and `DrawOutcome`.

use super::entity::{CardInstanceId, EnemyId};
use super::phase::CombatPhase;

/// Rejection of a player action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// Card costs more energy than the player has.
    #[error("insufficient energy: card costs {required}, player has {available}")]
    InsufficientEnergy { required: u32, available: u32 },

    /// Required single-enemy target is missing or already dead.
    #[error("invalid target: {0:?}")]
    InvalidTarget(Option<EnemyId>),

    /// Action is not allowed in the current phase.
    #[error("cannot {action} during {phase}")]
    IllegalPhaseAction {
        action: &'static str,
        phase: CombatPhase,
    },

    /// Card is not in the player's hand.
    #[error("card {0} is not in hand")]
    CardNotInHand(CardInstanceId),
}
