//! Errors from run-layer hand-off calls.

use crate::core::CardInstanceId;

/// Rejection of a permanent deck or resource change.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error("card {0} is not in the deck")]
    CardNotFound(CardInstanceId),

    #[error("card {0} is already upgraded")]
    AlreadyUpgraded(CardInstanceId),

    #[error("card {0} has no upgrade")]
    NoUpgradePath(CardInstanceId),

    #[error("not enough divine favor: need {required}, have {available}")]
    InsufficientFavor { required: u32, available: u32 },

    #[error("not enough adamant shards: need {required}, have {available}")]
    InsufficientShards { required: u32, available: u32 },
}
