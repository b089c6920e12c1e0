//! Registry of active sessions keyed by owner.
//!
//! A store holds at most one session per owner. Reads hand out owned copies;
//! callers load, mutate through the engine, then `set` the session back.

use std::collections::{BTreeMap, HashMap};

use crate::{OwnerId, Session, StoreError};

pub trait SessionStore {
    fn get(&self, owner: OwnerId) -> Option<Session>;

    fn set(&mut self, owner: OwnerId, session: Session);

    fn remove(&mut self, owner: OwnerId) -> Option<Session>;

    fn list_all(&self) -> BTreeMap<OwnerId, Session>;

    fn contains(&self, owner: OwnerId) -> bool {
        self.get(owner).is_some()
    }

    /// Store a new session unless its owner already has one.
    fn insert_new(&mut self, session: Session) -> Result<(), StoreError> {
        let owner = session.owner_id();
        if self.contains(owner) {
            return Err(StoreError::AlreadyPlaying(owner));
        }
        self.set(owner, session);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sessions: HashMap<OwnerId, Session>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, owner: OwnerId) -> Option<Session> {
        self.sessions.get(&owner).cloned()
    }

    fn set(&mut self, owner: OwnerId, session: Session) {
        self.sessions.insert(owner, session);
    }

    fn remove(&mut self, owner: OwnerId) -> Option<Session> {
        self.sessions.remove(&owner)
    }

    fn list_all(&self) -> BTreeMap<OwnerId, Session> {
        self.sessions
            .iter()
            .map(|(owner, session)| (*owner, session.clone()))
            .collect()
    }

    fn contains(&self, owner: OwnerId) -> bool {
        self.sessions.contains_key(&owner)
    }
}

/// Keeps each session in its serialized text form, the way an external
/// key-value backend would. Entries that fail to decode are logged and
/// treated as absent.
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    entries: BTreeMap<OwnerId, String>,
}

impl JsonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text stored for an owner.
    pub fn raw(&self, owner: OwnerId) -> Option<&str> {
        self.entries.get(&owner).map(String::as_str)
    }

    pub fn insert_raw(&mut self, owner: OwnerId, raw: String) {
        self.entries.insert(owner, raw);
    }

    fn decode(owner: OwnerId, raw: &str) -> Option<Session> {
        match Session::from_json(raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("Dropping unreadable session for {owner}: {e}");
                None
            }
        }
    }
}

impl SessionStore for JsonStore {
    fn get(&self, owner: OwnerId) -> Option<Session> {
        self.entries
            .get(&owner)
            .and_then(|raw| Self::decode(owner, raw))
    }

    fn set(&mut self, owner: OwnerId, session: Session) {
        match session.to_json() {
            Ok(raw) => {
                self.entries.insert(owner, raw);
            }
            Err(e) => log::error!("Failed to encode session for {owner}: {e}"),
        }
    }

    fn remove(&mut self, owner: OwnerId) -> Option<Session> {
        self.entries
            .remove(&owner)
            .and_then(|raw| Self::decode(owner, &raw))
    }

    fn list_all(&self) -> BTreeMap<OwnerId, Session> {
        self.entries
            .iter()
            .filter_map(|(owner, raw)| Self::decode(*owner, raw).map(|s| (*owner, s)))
            .collect()
    }

    fn contains(&self, owner: OwnerId) -> bool {
        self.entries.contains_key(&owner)
    }
}
