use thiserror::Error;

use crate::OwnerId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("Invalid rank {0}: expected 1 to 13")]
    InvalidRank(u8),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid wager {bet}: must be between 1 and {max_bet}")]
    InvalidWager { bet: u64, max_bet: u64 },
    #[error("Session for {owner} is already finished")]
    SessionFinished { owner: OwnerId },
    #[error("Invalid rules: {0}")]
    InvalidRules(&'static str),
}

/// Failures decoding a persisted session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Session for {0} has a zero bet")]
    ZeroBet(OwnerId),
    #[error("Stale {party} total: stored {stored}, hand sums to {actual}")]
    StaleTotal {
        party: &'static str,
        stored: u32,
        actual: u32,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Player {0} already has a game in progress")]
    AlreadyPlaying(OwnerId),
}
