use serde::{Deserialize, Serialize};

use crate::BLACKJACK;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWin,
    PlayerLoss,
    Push,
}

/// Result of a finished round: what happened and the signed wager change.
/// The engine never moves funds; the host applies `delta` if it wants to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub outcome: Outcome,
    pub delta: i128,
    pub player_value: u32,
    pub dealer_value: u32,
}

/// Score a round from the two totals and the bet. The player's bust is
/// checked before the dealer's, so a busted player loses even if the dealer
/// busted too.
pub fn evaluate(player_value: u32, dealer_value: u32, bet: u64) -> Settlement {
    let bet = bet as i128;
    let (outcome, delta) = if player_value > BLACKJACK {
        (Outcome::PlayerBust, -bet)
    } else if dealer_value > BLACKJACK {
        (Outcome::DealerBust, bet)
    } else if player_value > dealer_value {
        (Outcome::PlayerWin, bet)
    } else if player_value < dealer_value {
        (Outcome::PlayerLoss, -bet)
    } else {
        (Outcome::Push, 0)
    };

    Settlement {
        outcome,
        delta,
        player_value,
        dealer_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_win() {
        let s = evaluate(20, 18, 100);
        assert_eq!(s.outcome, Outcome::PlayerWin);
        assert_eq!(s.delta, 100);
    }

    #[test]
    fn test_player_bust_ignores_dealer() {
        for dealer in [0, 17, 21, 22, 30] {
            let s = evaluate(23, dealer, 100);
            assert_eq!(s.outcome, Outcome::PlayerBust);
            assert_eq!(s.delta, -100);
        }
    }

    #[test]
    fn test_dealer_bust() {
        let s = evaluate(12, 24, 50);
        assert_eq!(s.outcome, Outcome::DealerBust);
        assert_eq!(s.delta, 50);
    }

    #[test]
    fn test_player_loss() {
        let s = evaluate(16, 19, 75);
        assert_eq!(s.outcome, Outcome::PlayerLoss);
        assert_eq!(s.delta, -75);
    }

    #[test]
    fn test_push() {
        let s = evaluate(17, 17, 100);
        assert_eq!(s.outcome, Outcome::Push);
        assert_eq!(s.delta, 0);
    }

    #[test]
    fn test_twenty_one_is_not_a_bust() {
        assert_eq!(evaluate(21, 20, 10).outcome, Outcome::PlayerWin);
        assert_eq!(evaluate(20, 21, 10).outcome, Outcome::PlayerLoss);
    }

    #[test]
    fn test_priority_order_over_range() {
        for player in 0..=40u32 {
            for dealer in 0..=40u32 {
                let s = evaluate(player, dealer, 10);
                let expected = if player > 21 {
                    Outcome::PlayerBust
                } else if dealer > 21 {
                    Outcome::DealerBust
                } else if player > dealer {
                    Outcome::PlayerWin
                } else if player < dealer {
                    Outcome::PlayerLoss
                } else {
                    Outcome::Push
                };
                assert_eq!(s.outcome, expected, "player {player} dealer {dealer}");
                let sign = match expected {
                    Outcome::PlayerBust | Outcome::PlayerLoss => -1,
                    Outcome::DealerBust | Outcome::PlayerWin => 1,
                    Outcome::Push => 0,
                };
                assert_eq!(s.delta, sign * 10);
            }
        }
    }

    #[test]
    fn test_total_over_extreme_bets() {
        let s = evaluate(u32::MAX, 0, u64::MAX);
        assert_eq!(s.delta, -(u64::MAX as i128));
        let s = evaluate(5, u32::MAX, u64::MAX);
        assert_eq!(s.delta, u64::MAX as i128);
    }
}
