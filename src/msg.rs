use blackjack::{Card, OwnerId, Settlement};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::view::TableView;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Open a game for the sender. `bet` is the raw token typed by the player:
    /// a number or `all`.
    Start { bet: String },
    // Button actions carry the owner of the game the button belongs to
    Hit { owner: OwnerId },
    Stand { owner: OwnerId },
    /// Abandon the sender's game, settling it as it stands
    Stop {},
    AttachMessage { message_id: u64 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    GetConfig {},
    GetSession { owner: OwnerId },
    ListSessions {},
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Start,
    Hit,
    Stand,
    Stop,
    AttachMessage,
    Timeout,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ActionResponse {
    pub action: Action,
    pub owner: OwnerId,
    pub drawn: Option<Card>,
    pub view: TableView,
    /// Present once the round is over and the session has been evicted
    pub settlement: Option<Settlement>,
}

impl ActionResponse {
    pub fn is_final(&self) -> bool {
        self.settlement.is_some()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionListItem {
    pub owner: OwnerId,
    pub bet: u64,
    pub started_at: i64,
    pub player_value: u32,
    pub message_id: Option<u64>,
}
