//! Session store - owns the persisted session token entry.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Credential, SessionToken};
use crate::ports::{KeyValueStore, RepositoryError};

/// Storage key of the session token.
pub const SESSION_KEY: &str = "@auth:phone";

/// What was found in storage at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredSession {
    /// Nothing persisted.
    Absent,
    /// A well-formed token.
    Valid(SessionToken),
    /// Something is stored but it is not a token.
    Malformed,
}

/// Persists the session token.
///
/// Writes are serialized through an async lock so that a write never races
/// the previous one on the same key.
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Read and classify the stored session entry.
    pub async fn load(&self) -> Result<StoredSession, RepositoryError> {
        let stored = match self.store.get(SESSION_KEY).await? {
            None => StoredSession::Absent,
            Some(raw) => SessionToken::parse(&raw).map_or(StoredSession::Malformed, StoredSession::Valid),
        };
        Ok(stored)
    }

    /// Persist the token derived from a verified credential.
    pub async fn persist(&self, credential: &Credential) -> Result<(), RepositoryError> {
        let token = credential.token();
        let _guard = self.write_lock.lock().await;
        self.store.set(SESSION_KEY, token.as_str()).await
    }

    /// Remove the stored session entry.
    pub async fn clear(&self) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(SESSION_KEY).await
    }
}
