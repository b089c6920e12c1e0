mod card;
mod deck;
mod engine;
mod error;
mod hand;
mod outcome;
mod rules;
mod session;
pub mod store;

/// Opaque identity of the player owning a session.
pub type OwnerId = u64;

pub use card::{Card, Suit, ACE, KING};
pub use deck::{build_deck, Deck, DECK_SIZE};
pub use engine::Engine;
pub use error::{CardError, GameError, SessionError, StoreError};
pub use hand::{calculate_hand_value, is_busted, Hand};
pub use outcome::{evaluate, Outcome, Settlement};
pub use rules::{TableRules, BLACKJACK, DEALER_STANDS_ON};
pub use session::Session;
pub use store::{JsonStore, MemoryStore, SessionStore};
