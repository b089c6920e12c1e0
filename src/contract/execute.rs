use blackjack::{Card, OwnerId, Session, SessionStore, StoreError, BLACKJACK};

use super::{authorize, Table};
use crate::msg::{Action, ActionResponse, ExecuteMsg};
use crate::view::render;
use crate::wager::parse_wager;
use crate::TableError;

impl<S: SessionStore> Table<S> {
    /// Dispatch a player action. `sender` is the player who issued it.
    pub fn execute(
        &mut self,
        sender: OwnerId,
        msg: ExecuteMsg,
    ) -> Result<ActionResponse, TableError> {
        match msg {
            ExecuteMsg::Start { bet } => self.execute_start(sender, &bet),
            ExecuteMsg::Hit { owner } => self.execute_hit(sender, owner),
            ExecuteMsg::Stand { owner } => self.execute_stand(sender, owner),
            ExecuteMsg::Stop {} => self.execute_stop(sender),
            ExecuteMsg::AttachMessage { message_id } => {
                self.execute_attach_message(sender, message_id)
            }
        }
    }

    pub fn execute_start(
        &mut self,
        sender: OwnerId,
        bet: &str,
    ) -> Result<ActionResponse, TableError> {
        let bet = parse_wager(bet, self.config.max_bet)?;
        if self.store.contains(sender) {
            return Err(StoreError::AlreadyPlaying(sender).into());
        }

        let session = self.engine.create_session(sender, bet, &mut self.rng)?;
        let view = render(&session, false);
        self.store.insert_new(session)?;
        log::info!("Game started for {sender} with bet {bet}");

        Ok(ActionResponse {
            action: Action::Start,
            owner: sender,
            drawn: None,
            view,
            settlement: None,
        })
    }

    pub fn execute_hit(
        &mut self,
        sender: OwnerId,
        owner: OwnerId,
    ) -> Result<ActionResponse, TableError> {
        authorize(sender, owner)?;
        let mut session = self.load(owner)?;
        let card = self.engine.player_hit(&mut session, &mut self.rng)?;

        if session.player_value() > BLACKJACK {
            log::info!("Player {owner} busted with {}", session.player_value());
            return self.settle(session, Action::Hit, Some(card));
        }

        let view = render(&session, false);
        self.store.set(owner, session);
        Ok(ActionResponse {
            action: Action::Hit,
            owner,
            drawn: Some(card),
            view,
            settlement: None,
        })
    }

    pub fn execute_stand(
        &mut self,
        sender: OwnerId,
        owner: OwnerId,
    ) -> Result<ActionResponse, TableError> {
        authorize(sender, owner)?;
        let mut session = self.load(owner)?;
        self.engine.dealer_play(&mut session, &mut self.rng)?;
        self.settle(session, Action::Stand, None)
    }

    /// Settle the sender's game as it stands, without dealer play.
    pub fn execute_stop(&mut self, sender: OwnerId) -> Result<ActionResponse, TableError> {
        let session = self.load(sender)?;
        self.settle(session, Action::Stop, None)
    }

    pub fn execute_attach_message(
        &mut self,
        sender: OwnerId,
        message_id: u64,
    ) -> Result<ActionResponse, TableError> {
        let mut session = self.load(sender)?;
        session.set_message_id(Some(message_id));
        let view = render(&session, false);
        self.store.set(sender, session);

        Ok(ActionResponse {
            action: Action::AttachMessage,
            owner: sender,
            drawn: None,
            view,
            settlement: None,
        })
    }

    /// Settle and evict every session whose age since the game started
    /// exceeds the configured timeout at `now` (unix seconds).
    pub fn sweep_expired(&mut self, now: i64) -> Vec<ActionResponse> {
        let timeout = self.config.timeout_seconds;
        let expired: Vec<Session> = self
            .store
            .list_all()
            .into_values()
            .filter(|s| s.is_timed_out(now, timeout))
            .collect();

        let mut settled = Vec::with_capacity(expired.len());
        for session in expired {
            let owner = session.owner_id();
            match self.settle(session, Action::Timeout, None) {
                Ok(response) => settled.push(response),
                Err(e) => {
                    log::warn!("Evicting unsettleable session for {owner}: {e}");
                    self.store.remove(owner);
                }
            }
        }
        if !settled.is_empty() {
            log::info!("Swept {} expired sessions", settled.len());
        }
        settled
    }

    pub fn sweep_expired_now(&mut self) -> Vec<ActionResponse> {
        self.sweep_expired(time::OffsetDateTime::now_utc().unix_timestamp())
    }

    /// Finalize, score, evict and render the revealed table.
    fn settle(
        &mut self,
        mut session: Session,
        action: Action,
        drawn: Option<Card>,
    ) -> Result<ActionResponse, TableError> {
        let owner = session.owner_id();
        self.engine.finalize_session(&mut session)?;
        let settlement = session.evaluate();
        self.store.remove(owner);
        log::info!(
            "Game for {owner} settled: {:?} ({:+})",
            settlement.outcome,
            settlement.delta
        );

        Ok(ActionResponse {
            action,
            owner,
            drawn,
            view: render(&session, true),
            settlement: Some(settlement),
        })
    }
}
