use blackjack::{GameError, OwnerId, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Invalid wager '{0}'")]
    InvalidWager(String),

    #[error("Wager must be greater than 0")]
    NonPositiveWager,

    #[error("No game in progress for {0}")]
    NoActiveGame(OwnerId),

    #[error("Game belongs to {owner}, not {sender}")]
    NotYourGame { owner: OwnerId, sender: OwnerId },

    #[error("Invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("{0}")]
    Game(#[from] GameError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
