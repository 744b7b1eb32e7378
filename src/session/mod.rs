//! Session state accessor shared by every page.
//!
//! DESIGN
//! ======
//! `Session` holds no session data of its own. Each query is a fresh read of
//! the credential store, so independently loaded pages (and tabs) agree on
//! whatever was written last without any shared process memory.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod credentials;
pub mod store;
pub mod types;

pub use credentials::{CredentialStore, StorageKeys};
pub use store::{KeyValueStore, MemoryStore, StorageError};
pub use types::{Identity, SessionMarker, SessionState};

#[cfg(feature = "hydrate")]
pub use store::BrowserStore;

/// Stateless accessor over the persisted session.
#[derive(Clone, Debug)]
pub struct Session<S> {
    credentials: CredentialStore<S>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self {
            credentials: CredentialStore::new(store, keys),
        }
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.credentials.get_identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// Snapshot of the session as currently persisted.
    pub fn state(&self) -> SessionState {
        self.credentials.read_state()
    }

    /// Record a completed login for `identity`, stamped with the wall clock.
    ///
    /// This trusts the caller; nothing here verifies credentials.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the session could not be persisted.
    pub fn login(&self, identity: Identity) -> Result<SessionMarker, StorageError> {
        self.login_at(identity, now_millis())
    }

    /// [`Self::login`] with an explicit issue time in epoch millis.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the session could not be persisted.
    pub fn login_at(&self, identity: Identity, issued_at_ms: u64) -> Result<SessionMarker, StorageError> {
        let marker = SessionMarker::issue(identity.email.as_deref().unwrap_or_default(), issued_at_ms);
        self.credentials.set_session(&identity, &marker)?;
        log::info!("session opened for {}", identity.display_email().unwrap_or("<no email>"));
        Ok(marker)
    }

    /// Drop the persisted session. Local only; nothing is sent anywhere.
    pub fn logout(&self) {
        match self.credentials.clear_session() {
            Ok(()) => log::info!("session cleared"),
            Err(e) => log::warn!("session clear incomplete: {e}"),
        }
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(feature = "hydrate"))]
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}
