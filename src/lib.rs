pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
pub mod view;
pub mod wager;

pub use crate::contract::Table;
pub use crate::error::TableError;
