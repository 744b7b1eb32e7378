//! Per-page navigation configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages differ only in which links they show and where their header lives.
//! A page passes a (possibly partial) JSON config to the mount entry point;
//! missing fields fall back to the site defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::session::{KeyValueStore, Session, StorageKeys};

/// One navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Everything a page can customize about its navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// CSS selectors tried in order to find the host element.
    pub host_selectors: Vec<String>,
    /// `id` of the injected `<nav>`; its presence means "already mounted".
    pub marker_id: String,
    /// `id` of the logout control.
    pub logout_id: String,
    /// Links shown in both states.
    pub links: Vec<NavLink>,
    pub login_href: String,
    pub register_href: String,
    /// Where to send the visitor after logout.
    pub logout_redirect: String,
    /// Account label used when the identity has no email.
    pub account_fallback: String,
    /// Href of the current page, marked with `aria-current`.
    pub current_path: Option<String>,
    pub storage: StorageKeys,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            host_selectors: vec![
                "header .nav-host".to_owned(),
                "#site-nav".to_owned(),
                "header .container".to_owned(),
                "header".to_owned(),
            ],
            marker_id: "pw-nav".to_owned(),
            logout_id: "pw-logout".to_owned(),
            links: vec![
                NavLink::new("Home", "index.html"),
                NavLink::new("Patient Portal", "patient.html"),
                NavLink::new("Doctor Portal", "doctor.html"),
            ],
            login_href: "login.html".to_owned(),
            register_href: "register.html".to_owned(),
            logout_redirect: "login.html".to_owned(),
            account_fallback: "Account".to_owned(),
            current_path: None,
            storage: StorageKeys::default(),
        }
    }
}

impl NavConfig {
    /// Reduced link set used by the patient-facing pages.
    pub fn patient_portal() -> Self {
        Self {
            links: vec![
                NavLink::new("Home", "index.html"),
                NavLink::new("Patient Portal", "patient.html"),
            ],
            ..Self::default()
        }
    }

    /// Session accessor over `store` using this page's storage keys.
    pub fn session<S: KeyValueStore>(&self, store: S) -> Session<S> {
        Session::new(store, self.storage.clone())
    }

    /// Parse a page-supplied JSON config.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parse `raw` if given, falling back to defaults on absence or error.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid nav config, using defaults: {e}");
                Self::default()
            }
        }
    }
}
