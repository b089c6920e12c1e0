use blackjack::TableRules;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::TableError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Config {
    pub max_bet: u64,
    pub max_deal_attempts: u32,
    /// Sessions older than this, counted from the start, are settled and
    /// evicted by a sweep
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        let rules = TableRules::default();
        Self {
            max_bet: rules.max_bet,
            max_deal_attempts: rules.max_deal_attempts,
            timeout_seconds: 300,
        }
    }
}

impl Config {
    pub fn rules(&self) -> TableRules {
        TableRules {
            max_bet: self.max_bet,
            max_deal_attempts: self.max_deal_attempts,
        }
    }

    pub fn validate(&self) -> Result<(), TableError> {
        self.rules().validate()?;
        if self.timeout_seconds == 0 {
            return Err(TableError::InvalidConfig("timeout_seconds must be positive"));
        }
        Ok(())
    }
}
