use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Card;

pub const DECK_SIZE: usize = 52;

/// Builds all 52 cards and shuffles them uniformly.
pub fn build_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = Card::full_set();
    cards.shuffle(rng);
    cards
}

/// Remaining cards of a session. Acts as a stack: draws come off the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            cards: build_deck(rng),
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws the last card, first swapping in a fresh shuffled deck if this one
    /// is exhausted. The replacement is independent of the cards already dealt.
    pub fn draw_or_replenish<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            log::debug!("Deck exhausted, replenishing with a fresh shuffle");
            self.cards = build_deck(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
    use std::collections::HashSet;

    #[test]
    fn test_build_deck_composition() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let deck = build_deck(&mut rng);
            assert_eq!(deck.len(), DECK_SIZE);

            let unique: HashSet<Card> = deck.iter().copied().collect();
            assert_eq!(unique.len(), DECK_SIZE);

            for rank in 1..=13u8 {
                assert_eq!(deck.iter().filter(|c| c.rank() == rank).count(), 4);
            }
            for suit in Suit::ALL {
                assert_eq!(deck.iter().filter(|c| c.suit() == suit).count(), 13);
            }
        }
    }

    #[test]
    fn test_build_deck_is_shuffled() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let first = build_deck(&mut rng);
        let second = build_deck(&mut rng);
        assert_ne!(first, Card::full_set());
        assert_ne!(first, second);
    }

    #[test]
    fn test_draw_takes_from_end() {
        let a = Card::new(1, Suit::Spades).unwrap();
        let b = Card::new(2, Suit::Hearts).unwrap();
        let mut deck = Deck::from_cards(vec![a, b]);
        assert_eq!(deck.draw(), Some(b));
        assert_eq!(deck.draw(), Some(a));
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn test_draw_or_replenish_on_empty_deck() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut deck = Deck::default();
        let card = deck.draw_or_replenish(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE - 1);
        assert!(!deck.cards().contains(&card));
    }

    #[test]
    fn test_draw_or_replenish_uses_remaining_cards_first() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let only = Card::new(9, Suit::Clubs).unwrap();
        let mut deck = Deck::from_cards(vec![only]);
        assert_eq!(deck.draw_or_replenish(&mut rng), only);
        assert!(deck.is_empty());
    }
}
