use blackjack::{OwnerId, SessionStore};

use super::Table;
use crate::msg::{QueryMsg, SessionListItem};
use crate::state::Config;
use crate::view::{render, TableView};
use crate::TableError;

impl<S: SessionStore> Table<S> {
    /// Answer a query as JSON.
    pub fn query(&self, msg: QueryMsg) -> Result<String, TableError> {
        match msg {
            QueryMsg::GetConfig {} => Ok(serde_json::to_string(&self.query_config())?),
            QueryMsg::GetSession { owner } => {
                Ok(serde_json::to_string(&self.query_session(owner))?)
            }
            QueryMsg::ListSessions {} => Ok(serde_json::to_string(&self.query_list_sessions())?),
        }
    }

    fn query_config(&self) -> Config {
        self.config
    }

    /// The player's view of an active game, dealer concealed.
    fn query_session(&self, owner: OwnerId) -> Option<TableView> {
        self.store.get(owner).map(|s| render(&s, false))
    }

    fn query_list_sessions(&self) -> Vec<SessionListItem> {
        self.store
            .list_all()
            .into_values()
            .map(|s| SessionListItem {
                owner: s.owner_id(),
                bet: s.bet(),
                started_at: s.started_at(),
                player_value: s.player_value(),
                message_id: s.message_id(),
            })
            .collect()
    }
}
