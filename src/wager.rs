use crate::TableError;

/// Turn a bet token typed by a player into a wager.
///
/// `all` bets the table maximum. Anything else is read as a decimal number
/// and truncated toward zero; amounts above `max_bet` are clamped.
pub fn parse_wager(token: &str, max_bet: u64) -> Result<u64, TableError> {
    let token = token.trim().to_lowercase();
    if token == "all" {
        return Ok(max_bet);
    }

    let amount: f64 = token
        .parse()
        .map_err(|_| TableError::InvalidWager(token.clone()))?;
    if !amount.is_finite() {
        return Err(TableError::InvalidWager(token));
    }

    let amount = amount.trunc();
    if amount <= 0.0 {
        return Err(TableError::NonPositiveWager);
    }
    if amount >= max_bet as f64 {
        return Ok(max_bet);
    }
    Ok(amount as u64)
}
