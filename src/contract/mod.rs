pub mod execute;
pub mod query;

use blackjack::{Engine, MemoryStore, OwnerId, Session, SessionStore};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

use crate::state::Config;
use crate::TableError;

/// A blackjack table: the rules engine plus the registry of active sessions.
///
/// Every action takes `&mut self`, so actions on one table are serialized.
/// Hosts that dispatch from several tasks share the table behind a mutex.
pub struct Table<S: SessionStore = MemoryStore> {
    config: Config,
    engine: Engine,
    store: S,
    rng: ChaCha8Rng,
}

impl Table<MemoryStore> {
    pub fn in_memory(config: Config) -> Result<Self, TableError> {
        Self::new(config, MemoryStore::new())
    }
}

impl<S: SessionStore> Table<S> {
    /// Table seeded from OS entropy.
    pub fn new(config: Config, store: S) -> Result<Self, TableError> {
        Self::with_rng(config, store, ChaCha8Rng::from_entropy())
    }

    /// Table with a reproducible shuffle sequence.
    pub fn with_seed(config: Config, store: S, seed: u64) -> Result<Self, TableError> {
        Self::with_rng(config, store, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, store: S, rng: ChaCha8Rng) -> Result<Self, TableError> {
        config.validate()?;
        let engine = Engine::new(config.rules())?;
        Ok(Self {
            config,
            engine,
            store,
            rng,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn load(&self, owner: OwnerId) -> Result<Session, TableError> {
        self.store
            .get(owner)
            .ok_or(TableError::NoActiveGame(owner))
    }
}

/// Only the owner of a game may press its buttons.
fn authorize(sender: OwnerId, owner: OwnerId) -> Result<(), TableError> {
    if sender != owner {
        return Err(TableError::NotYourGame { owner, sender });
    }
    Ok(())
}
