use serde::{Deserialize, Serialize};

use crate::{evaluate, Card, Deck, Hand, OwnerId, SessionError, Settlement};

/// One game in progress: the remaining deck, both hands and their cached totals.
///
/// Totals are recomputed by every mutating operation, so they always match
/// the hands. Only the engine mutates cards; the presentation layer may set
/// `message_id`. Every decode path goes through the same checks as
/// [`Session::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct Session {
    owner_id: OwnerId,
    bet: u64,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    player_value: u32,
    dealer_value: u32,
    started_at: i64,
    message_id: Option<u64>,
    finished: bool,
}

#[derive(Deserialize)]
struct RawSession {
    owner_id: OwnerId,
    bet: u64,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    player_value: u32,
    dealer_value: u32,
    started_at: i64,
    message_id: Option<u64>,
    finished: bool,
}

impl TryFrom<RawSession> for Session {
    type Error = SessionError;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        let session = Session {
            owner_id: raw.owner_id,
            bet: raw.bet,
            deck: raw.deck,
            player: raw.player,
            dealer: raw.dealer,
            player_value: raw.player_value,
            dealer_value: raw.dealer_value,
            started_at: raw.started_at,
            message_id: raw.message_id,
            finished: raw.finished,
        };
        session.validate()?;
        Ok(session)
    }
}

impl Session {
    /// Assemble an unfinished session from explicit cards. Totals are derived
    /// from the hands.
    pub fn from_parts(
        owner_id: OwnerId,
        bet: u64,
        deck: Deck,
        player: Hand,
        dealer: Hand,
        started_at: i64,
    ) -> Self {
        let player_value = player.value();
        let dealer_value = dealer.value();
        Self {
            owner_id,
            bet,
            deck,
            player,
            dealer,
            player_value,
            dealer_value,
            started_at,
            message_id: None,
            finished: false,
        }
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn player_value(&self) -> u32 {
        self.player_value
    }

    pub fn dealer_value(&self) -> u32 {
        self.dealer_value
    }

    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    pub fn message_id(&self) -> Option<u64> {
        self.message_id
    }

    /// Attach the presentation handle. Finished sessions are left untouched.
    pub fn set_message_id(&mut self, message_id: Option<u64>) {
        if !self.finished {
            self.message_id = message_id;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Check if the session is older than `timeout_seconds`, measured from
    /// `started_at`. Timeouts beyond `i64::MAX` never expire.
    pub fn is_timed_out(&self, now: i64, timeout_seconds: u64) -> bool {
        let timeout = i64::try_from(timeout_seconds).unwrap_or(i64::MAX);
        now.saturating_sub(self.started_at) > timeout
    }

    /// Score the round from the current totals. Does not mutate.
    pub fn evaluate(&self) -> Settlement {
        evaluate(self.player_value, self.dealer_value, self.bet)
    }

    pub(crate) fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub(crate) fn add_player_card(&mut self, card: Card) {
        self.player.add_card(card);
        self.player_value = self.player.value();
    }

    /// Split borrow used by the dealer loop: the deck and the dealer's hand.
    pub(crate) fn deck_and_dealer_mut(&mut self) -> (&mut Deck, &mut Hand) {
        (&mut self.deck, &mut self.dealer)
    }

    pub(crate) fn refresh_totals(&mut self) {
        self.player_value = self.player.value();
        self.dealer_value = self.dealer.value();
    }

    pub(crate) fn mark_finished(&mut self) {
        self.finished = true;
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a persisted session. Card ranks and suits are validated by the
    /// card decoder; the bet must be positive and the totals must match the hands.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        let raw: RawSession = serde_json::from_str(raw)?;
        Session::try_from(raw)
    }

    fn validate(&self) -> Result<(), SessionError> {
        if self.bet == 0 {
            return Err(SessionError::ZeroBet(self.owner_id));
        }
        for (party, stored, hand) in [
            ("player", self.player_value, &self.player),
            ("dealer", self.dealer_value, &self.dealer),
        ] {
            let actual = hand.value();
            if stored != actual {
                return Err(SessionError::StaleTotal {
                    party,
                    stored,
                    actual,
                });
            }
        }
        Ok(())
    }
}
