//! Credential store: the two persisted halves of a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity record and the session marker live under two fixed keys.
//! This is the only place that knows their encoding; everything above it
//! deals in `Identity`, `SessionMarker`, and `SessionState`.
//!
//! ERROR HANDLING
//! ==============
//! Reads are fail-soft: unreadable or corrupt entries come back as absent.
//! Writes report errors, but a half-written session always reads back as
//! not authenticated.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use serde::Deserialize;

use super::store::{KeyValueStore, StorageError};
use super::types::{Identity, SessionMarker, SessionState};

/// Storage keys for the identity record and the session marker.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub user: String,
    pub token: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            user: "pw_user".to_owned(),
            token: "pw_token".to_owned(),
        }
    }
}

/// Typed access to the persisted session over any `KeyValueStore`.
#[derive(Clone, Debug)]
pub struct CredentialStore<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("credential read failed: {e}");
                None
            }
        }
    }

    /// Stored identity, or `None` when missing or unparsable.
    pub fn get_identity(&self) -> Option<Identity> {
        let raw = self.read_raw(&self.keys.user)?;
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                log::debug!("ignoring corrupt {} record: {e}", self.keys.user);
                None
            }
        }
    }

    /// Stored marker, or `None` when missing or empty.
    pub fn get_marker(&self) -> Option<SessionMarker> {
        self.read_raw(&self.keys.token)
            .filter(|raw| !raw.is_empty())
            .map(SessionMarker::from)
    }

    /// One fresh read of both halves.
    pub fn read_state(&self) -> SessionState {
        SessionState {
            identity: self.get_identity(),
            marker: self.get_marker(),
        }
    }

    /// Persist both halves of a session.
    ///
    /// The marker is written first. If the identity write then fails, the
    /// marker is removed again so the store never holds a lone marker.
    ///
    /// # Errors
    ///
    /// Returns the serialization or storage error that stopped the write.
    pub fn set_session(&self, identity: &Identity, marker: &SessionMarker) -> Result<(), StorageError> {
        let record = serde_json::to_string(identity)?;
        self.store.set_item(&self.keys.token, marker.as_str())?;
        if let Err(e) = self.store.set_item(&self.keys.user, &record) {
            if let Err(rollback) = self.store.remove_item(&self.keys.token) {
                log::warn!("marker rollback failed: {rollback}");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove both halves. Both removals are attempted even if one fails.
    ///
    /// # Errors
    ///
    /// Returns the first removal error.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        let user = self.store.remove_item(&self.keys.user);
        let token = self.store.remove_item(&self.keys.token);
        user.and(token)
    }
}
