//! Session - Explicit signed-in state, persisted through a key/value store

use super::{AuthGateway, KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};

/// Key holding the serialized session
pub const SESSION_KEY: &str = "session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A signed-in user and the backend's opaque token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub token: String,
}

/// Session accessor handed to whatever needs to know who is signed in
pub struct SessionStore<K: KeyValueStore> {
    storage: K,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(storage: K) -> Self {
        SessionStore { storage }
    }

    /// The stored session. A corrupt entry is treated as signed out.
    pub fn current(&self) -> Option<Session> {
        let raw = self.storage.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable stored session");
                None
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.current().is_some()
    }

    /// Log in through the gateway and remember the session
    pub fn sign_in<G: AuthGateway>(
        &mut self,
        gateway: &G,
        credentials: &Credentials,
    ) -> Result<Session, StoreError> {
        let session = gateway.login(credentials)?;
        let raw = serde_json::to_string(&session).map_err(|e| StoreError::Backend(e.to_string()))?;
        self.storage.set(SESSION_KEY, raw);
        tracing::info!(username = %session.username, "signed in");
        Ok(session)
    }

    pub fn sign_out(&mut self) -> Option<Session> {
        let previous = self.current();
        self.storage.remove(SESSION_KEY);
        previous
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut K {
        &mut self.storage
    }
}
