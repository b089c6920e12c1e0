use rand::Rng;

use crate::{
    Card, Deck, GameError, Hand, OwnerId, Session, TableRules, BLACKJACK, DEALER_STANDS_ON,
};

/// Rules engine for the fixed-ace variant. Holds only the table rules; all
/// game state lives in the [`Session`] passed to each operation, and the
/// random source is supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    rules: TableRules,
}

impl Engine {
    pub fn new(rules: TableRules) -> Result<Self, GameError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// Deal a new game stamped with the current wall-clock time.
    pub fn create_session<R: Rng + ?Sized>(
        &self,
        owner: OwnerId,
        bet: u64,
        rng: &mut R,
    ) -> Result<Session, GameError> {
        let now = time::OffsetDateTime::now_utc().unix_timestamp();
        self.create_session_at(owner, bet, now, rng)
    }

    /// Deal a new game. `bet` must already be clamped to the table maximum.
    ///
    /// Cards come off the end of a fresh deck in the order player, player,
    /// dealer, dealer. An opening player total over 21 triggers a complete
    /// re-deal, up to `max_deal_attempts` deals; the last deal is kept even if
    /// it is still over 21.
    pub fn create_session_at<R: Rng + ?Sized>(
        &self,
        owner: OwnerId,
        bet: u64,
        started_at: i64,
        rng: &mut R,
    ) -> Result<Session, GameError> {
        if bet == 0 || bet > self.rules.max_bet {
            return Err(GameError::InvalidWager {
                bet,
                max_bet: self.rules.max_bet,
            });
        }

        let mut attempts = 0;
        let (deck, player, dealer) = loop {
            attempts += 1;
            let (deck, player, dealer) = deal_opening(rng);
            if player.value() <= BLACKJACK || attempts >= self.rules.max_deal_attempts {
                break (deck, player, dealer);
            }
            log::debug!(
                "Opening hand for {owner} totals {}, re-dealing (attempt {attempts})",
                player.value()
            );
        };

        let session = Session::from_parts(owner, bet, deck, player, dealer, started_at);
        log::debug!(
            "Dealt session for {owner}: bet {bet}, player {}, dealer {}",
            session.player_value(),
            session.dealer_value()
        );
        Ok(session)
    }

    /// Draw one card for the player and return it for rendering. Busting is
    /// left to the caller, who finalizes when `player_value() > 21`.
    pub fn player_hit<R: Rng + ?Sized>(
        &self,
        session: &mut Session,
        rng: &mut R,
    ) -> Result<Card, GameError> {
        ensure_active(session)?;
        let card = session.deck_mut().draw_or_replenish(rng);
        session.add_player_card(card);
        Ok(card)
    }

    /// Dealer draws while below 17 and stands on the first total of 17 or
    /// more, bust included.
    pub fn dealer_play<R: Rng + ?Sized>(
        &self,
        session: &mut Session,
        rng: &mut R,
    ) -> Result<(), GameError> {
        ensure_active(session)?;
        {
            let (deck, dealer) = session.deck_and_dealer_mut();
            while dealer.value() < DEALER_STANDS_ON {
                dealer.add_card(deck.draw_or_replenish(rng));
            }
        }
        session.refresh_totals();
        Ok(())
    }

    /// Recompute both totals and close the session. A session can only be
    /// finalized once.
    pub fn finalize_session(&self, session: &mut Session) -> Result<(), GameError> {
        ensure_active(session)?;
        session.refresh_totals();
        session.mark_finished();
        Ok(())
    }
}

fn ensure_active(session: &Session) -> Result<(), GameError> {
    if session.is_finished() {
        return Err(GameError::SessionFinished {
            owner: session.owner_id(),
        });
    }
    Ok(())
}

fn deal_opening<R: Rng + ?Sized>(rng: &mut R) -> (Deck, Hand, Hand) {
    let mut deck = Deck::shuffled(rng);
    let mut player = Hand::new();
    let mut dealer = Hand::new();
    player.add_card(deck.draw_or_replenish(rng));
    player.add_card(deck.draw_or_replenish(rng));
    dealer.add_card(deck.draw_or_replenish(rng));
    dealer.add_card(deck.draw_or_replenish(rng));
    (deck, player, dealer)
}
