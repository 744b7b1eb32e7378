//! Session data model: identity record, session marker, derived state.
//!
//! DESIGN
//! ======
//! `SessionState` is a snapshot read back from storage. It is never cached by
//! the accessor, so a held snapshot can go stale while the store moves on.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The logged-in principal as cached in the browser.
///
/// Only `email` is interpreted. Every other profile field is carried through
/// storage untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Login email, shown as the account label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Opaque extra profile fields (name, role, patient id, ...).
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Identity {
    /// Identity with an email and no extra profile fields.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            profile: Map::new(),
        }
    }

    /// Attach an opaque profile field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }

    /// Trimmed email, if one is present and non-blank.
    pub fn display_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

/// Opaque client-side marker recording that a login flow completed.
///
/// The encoding is reversible and unsigned; holding a marker proves nothing
/// to a server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionMarker(String);

impl SessionMarker {
    /// Build a marker from an email and the issue time in epoch millis.
    pub fn issue(email: &str, issued_at_ms: u64) -> Self {
        Self(STANDARD.encode(format!("{email}:{issued_at_ms}")))
    }

    /// Recover `(email, issued_at_ms)` from a marker produced by [`Self::issue`].
    ///
    /// Returns `None` for markers written by anything else.
    pub fn decode(&self) -> Option<(String, u64)> {
        let bytes = STANDARD.decode(&self.0).ok()?;
        let raw = String::from_utf8(bytes).ok()?;
        let (email, issued_at) = raw.rsplit_once(':')?;
        Some((email.to_owned(), issued_at.parse().ok()?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionMarker {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Session state derived from one read of the credential store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub marker: Option<SessionMarker>,
}

impl SessionState {
    /// Logged-out state.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Authenticated state for `identity` holding `marker`.
    pub fn authenticated(identity: Identity, marker: SessionMarker) -> Self {
        Self {
            identity: Some(identity),
            marker: Some(marker),
        }
    }

    /// True only when both halves of the session are present.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some() && self.marker.is_some()
    }

    /// Label for the account slot: the email, or `fallback` when absent.
    pub fn account_label<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.identity
            .as_ref()
            .and_then(Identity::display_email)
            .unwrap_or(fallback)
    }
}
