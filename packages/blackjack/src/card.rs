use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CardError;

/// The four suits, in deck-building order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "♠")]
    Spades,
    #[serde(rename = "♥")]
    Hearts,
    #[serde(rename = "♦")]
    Diamonds,
    #[serde(rename = "♣")]
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

pub const ACE: u8 = 1;
pub const KING: u8 = 13;

/// A playing card. Its scoring value is its rank: ace counts 1, jack 11,
/// queen 12 and king 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    rank: u8,
    suit: Suit,
}

#[derive(Deserialize)]
struct RawCard {
    rank: u8,
    suit: Suit,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.rank, raw.suit)
    }
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if !(ACE..=KING).contains(&rank) {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { rank, suit })
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn value(&self) -> u32 {
        self.rank as u32
    }

    /// Every rank of every suit, unshuffled: spades ace..king first, clubs last.
    pub fn full_set() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| (ACE..=KING).map(move |rank| Card { rank, suit }))
            .collect()
    }

    fn rank_label(&self) -> String {
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }

    /// Short face plus scoring value, e.g. `Q♥ (12)`.
    pub fn label(&self) -> String {
        format!("{self} ({})", self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}
