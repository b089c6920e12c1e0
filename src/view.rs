//! Human-facing rendering of a session.
//!
//! Until the dealer reveals, only the dealer's first card is shown; the hole
//! card and anything drawn after it are masked and the dealer total is hidden.

use std::fmt;

use blackjack::{Outcome, OwnerId, Session, Settlement};
use serde::{Deserialize, Serialize};

const HIDDEN_CARD: &str = "??";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub owner: OwnerId,
    pub bet: u64,
    pub player_cards: Vec<String>,
    pub player_total: u32,
    pub dealer_cards: Vec<String>,
    /// `None` while the dealer's hand is concealed
    pub dealer_total: Option<u32>,
    pub finished: bool,
}

pub fn render(session: &Session, reveal_dealer: bool) -> TableView {
    let player_cards = session.player().cards().iter().map(|c| c.label()).collect();

    let dealer = session.dealer().cards();
    let (dealer_cards, dealer_total) = if reveal_dealer {
        (
            dealer.iter().map(|c| c.label()).collect(),
            Some(session.dealer_value()),
        )
    } else {
        let shown = dealer
            .iter()
            .enumerate()
            .map(|(i, c)| if i == 0 { c.label() } else { HIDDEN_CARD.to_string() })
            .collect();
        (shown, None)
    };

    TableView {
        owner: session.owner_id(),
        bet: session.bet(),
        player_cards,
        player_total: session.player_value(),
        dealer_cards,
        dealer_total,
        finished: session.is_finished(),
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Blackjack")?;
        writeln!(f, "You:    {}", self.player_cards.join(", "))?;
        writeln!(f, "        Total: {}", self.player_total)?;
        writeln!(f, "Dealer: {}", self.dealer_cards.join(", "))?;
        match self.dealer_total {
            Some(total) => writeln!(f, "        Total: {total}")?,
            None => writeln!(f, "        Total: ?")?,
        }
        write!(f, "Bet: {}", self.bet)
    }
}

/// One line describing the outcome, then the signed amount (`+100`, `-100`, `+0`).
pub fn describe(settlement: &Settlement) -> String {
    let pv = settlement.player_value;
    let dv = settlement.dealer_value;
    let text = match settlement.outcome {
        Outcome::PlayerBust => format!("You went over 21 ({pv}). You lose."),
        Outcome::DealerBust => format!("Dealer went over 21 ({dv}). You win!"),
        Outcome::PlayerWin => format!("You win! ({pv} vs {dv})"),
        Outcome::PlayerLoss => format!("You lose. ({pv} vs {dv})"),
        Outcome::Push => format!("Push. ({pv} vs {dv})"),
    };
    format!("{text}\n{:+}", settlement.delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack::{evaluate, Card, Deck, Hand, Suit};

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(rank, suit).unwrap()
    }

    fn session() -> Session {
        Session::from_parts(
            8,
            100,
            Deck::from_cards(vec![card(2, Suit::Clubs)]),
            Hand::from_cards(vec![card(12, Suit::Hearts), card(8, Suit::Diamonds)]),
            Hand::from_cards(vec![
                card(9, Suit::Spades),
                card(5, Suit::Clubs),
                card(4, Suit::Hearts),
            ]),
            0,
        )
    }

    #[test]
    fn test_render_concealed() {
        let view = render(&session(), false);
        assert_eq!(view.player_cards, vec!["Q♥ (12)", "8♦ (8)"]);
        assert_eq!(view.player_total, 20);
        assert_eq!(view.dealer_cards, vec!["9♠ (9)", "??", "??"]);
        assert_eq!(view.dealer_total, None);
        assert!(!view.finished);
    }

    #[test]
    fn test_render_revealed() {
        let view = render(&session(), true);
        assert_eq!(view.dealer_cards, vec!["9♠ (9)", "5♣ (5)", "4♥ (4)"]);
        assert_eq!(view.dealer_total, Some(18));
    }

    #[test]
    fn test_display() {
        let text = render(&session(), false).to_string();
        assert_eq!(
            text,
            "Blackjack\nYou:    Q♥ (12), 8♦ (8)\n        Total: 20\nDealer: 9♠ (9), ??, ??\n        Total: ?\nBet: 100"
        );
        let text = render(&session(), true).to_string();
        assert!(text.contains("Total: 18"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(&evaluate(23, 18, 100)),
            "You went over 21 (23). You lose.\n-100"
        );
        assert_eq!(
            describe(&evaluate(15, 25, 100)),
            "Dealer went over 21 (25). You win!\n+100"
        );
        assert_eq!(describe(&evaluate(20, 18, 100)), "You win! (20 vs 18)\n+100");
        assert_eq!(describe(&evaluate(16, 18, 100)), "You lose. (16 vs 18)\n-100");
        assert_eq!(describe(&evaluate(17, 17, 100)), "Push. (17 vs 17)\n+0");
    }
}
