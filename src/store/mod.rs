//! Session persistence
//!
//! The aggregators only ever see a `&[Session]`; where the sessions live is
//! decided here. Each backend implements `SessionStore`, and
//! `SessionRepository` keeps the loaded list in memory and writes the whole
//! list back after every mutation.

mod json;
mod sqlite;
mod transfer;

use std::path::Path;

use crate::cli::Backend;
use crate::core::Session;
use crate::error::StoreError;

pub(crate) use json::JsonFileStore;
pub(crate) use sqlite::SqliteStore;
pub(crate) use transfer::{export_file_name, export_json, parse_import};

/// Storage backend trait - implemented by each persistence format
pub(crate) trait SessionStore {
    /// Human-readable location for diagnostics
    fn describe(&self) -> String;

    /// All stored sessions; an empty list when nothing has been saved yet
    fn load(&self) -> Result<Vec<Session>, StoreError>;

    /// Replace everything stored with `sessions`
    fn save_all(&self, sessions: &[Session]) -> Result<(), StoreError>;
}

/// Box type for dynamic dispatch
pub(crate) type BoxedStore = Box<dyn SessionStore>;

pub(crate) fn open_store(backend: Backend, path: &Path) -> Result<BoxedStore, StoreError> {
    let store: BoxedStore = match backend {
        Backend::Json => Box::new(JsonFileStore::new(path.to_path_buf())),
        Backend::Sqlite => Box::new(SqliteStore::open(path)?),
    };
    log::debug!("using {}", store.describe());
    Ok(store)
}

/// In-memory session list backed by a store
pub(crate) struct SessionRepository {
    store: BoxedStore,
    sessions: Vec<Session>,
}

impl SessionRepository {
    pub(crate) fn open(store: BoxedStore) -> Result<Self, StoreError> {
        let sessions = store.load()?;
        log::debug!("loaded {} sessions from {}", sessions.len(), store.describe());
        Ok(Self { store, sessions })
    }

    pub(crate) fn list(&self) -> &[Session] {
        &self.sessions
    }

    /// Append one session and persist the list
    pub(crate) fn add(&mut self, session: Session) -> Result<(), StoreError> {
        self.sessions.push(session);
        if let Err(e) = self.store.save_all(&self.sessions) {
            self.sessions.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Replace the whole list (import). Nothing changes if saving fails.
    pub(crate) fn replace_all(&mut self, sessions: Vec<Session>) -> Result<(), StoreError> {
        self.store.save_all(&sessions)?;
        log::debug!(
            "replaced {} sessions with {}",
            self.sessions.len(),
            sessions.len()
        );
        self.sessions = sessions;
        Ok(())
    }

    /// Id for a new session: the creation timestamp, bumped past any existing id
    pub(crate) fn next_id(&self, now_ms: i64) -> Result<i64, StoreError> {
        match self.sessions.iter().map(|s| s.id).max() {
            Some(max) if max >= now_ms => max
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted { max }),
            _ => Ok(now_ms),
        }
    }
}
