use serde::{Deserialize, Serialize};

use crate::GameError;

/// Totals above this bust.
pub const BLACKJACK: u32 = 21;

/// The dealer keeps drawing while below this total.
pub const DEALER_STANDS_ON: u32 = 17;

/// Configurable table limits. Card values and the dealer policy are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Largest accepted wager; callers clamp larger bets to this
    pub max_bet: u64,

    /// How many full deals to try for an opening hand of 21 or less
    pub max_deal_attempts: u32,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            max_bet: 100_000,
            max_deal_attempts: 20,
        }
    }
}

impl TableRules {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_bet == 0 {
            return Err(GameError::InvalidRules("max_bet must be positive"));
        }
        if self.max_deal_attempts == 0 {
            return Err(GameError::InvalidRules("max_deal_attempts must be positive"));
        }
        Ok(())
    }

    /// Clamp a positive bet down to the table maximum.
    pub fn clamp_bet(&self, bet: u64) -> u64 {
        bet.min(self.max_bet)
    }
}
