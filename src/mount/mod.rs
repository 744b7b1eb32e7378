//! Page mount controller: inject the navigation bar once per page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every static page loads the same module and calls the mount entry point,
//! sometimes more than once when several scripts include it. Pages are
//! authored independently, so a missing header or logout control is normal
//! and silently tolerated.
//!
//! DESIGN
//! ======
//! DOM access goes through `PageDocument`, so the mount sequence
//! (locate host, guard, render, append, bind logout) runs unchanged against
//! the real document in the browser and a fake one in tests.
//!
//! ```text
//! NotMounted -> host? --no--> Done(NoHost)
//!                  \--yes--> injected? --yes--> Done(AlreadyMounted)
//!                                 \--no--> render -> append -> bind -> Done(Mounted)
//! ```


#[cfg(feature = "hydrate")]
pub mod browser;

use std::rc::Rc;

use crate::nav::{NavConfig, render};
use crate::session::{KeyValueStore, Session};

/// The slice of a DOM document the mount controller needs.
pub trait PageDocument: Clone + 'static {
    type Element;

    /// True once the document's structure has been parsed.
    fn is_ready(&self) -> bool;

    /// Run `callback` once the document's structure has been parsed.
    fn when_ready(&self, callback: Box<dyn FnOnce()>);

    /// First element matching `selector`. Invalid selectors match nothing.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Whether an element with `id` exists inside `host`.
    fn host_contains(&self, host: &Self::Element, id: &str) -> bool;

    /// Append `markup` after the host's existing children.
    fn append_markup(&self, host: &Self::Element, markup: &str);

    /// Attach `handler` to clicks on the element with `id` inside `host`.
    /// Returns `false` when no such element exists.
    fn on_click(&self, host: &Self::Element, id: &str, handler: Box<dyn Fn()>) -> bool;

    /// Navigate the page to `href`.
    fn redirect(&self, href: &str);
}

/// Result of one mount attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    /// No candidate selector matched; the page has no navigation.
    NoHost,
    /// The host already holds an injected navigation bar.
    AlreadyMounted,
    /// Navigation injected. `logout_bound` is false when there was no
    /// logout control to wire (anonymous state).
    Mounted { logout_bound: bool },
}

/// Mounts the navigation bar for one page.
#[derive(Clone, Debug)]
pub struct NavMount<D, S> {
    document: D,
    session: Session<S>,
    config: Rc<NavConfig>,
}

impl<D, S> NavMount<D, S>
where
    D: PageDocument,
    S: KeyValueStore + Clone + 'static,
{
    /// Controller reading the session from `store` under `config.storage`.
    pub fn new(document: D, store: S, config: NavConfig) -> Self {
        Self {
            document,
            session: config.session(store),
            config: Rc::new(config),
        }
    }

    fn find_host(&self) -> Option<D::Element> {
        self.config
            .host_selectors
            .iter()
            .find_map(|selector| self.document.query(selector))
    }

    /// Run the mount sequence now.
    pub fn mount(&self) -> MountOutcome {
        let Some(host) = self.find_host() else {
            log::debug!("no navigation host on this page");
            return MountOutcome::NoHost;
        };
        if self.document.host_contains(&host, &self.config.marker_id) {
            log::debug!("navigation already mounted");
            return MountOutcome::AlreadyMounted;
        }

        let state = self.session.state();
        self.document.append_markup(&host, &render(&state, &self.config));

        let logout_bound = state.is_authenticated()
            && self
                .document
                .on_click(&host, &self.config.logout_id, self.logout_handler());
        log::info!(
            "navigation mounted (authenticated: {}, logout bound: {logout_bound})",
            state.is_authenticated()
        );
        MountOutcome::Mounted { logout_bound }
    }

    /// Mount now if the document is parsed, otherwise once it is.
    ///
    /// Returns the outcome when the mount ran synchronously.
    pub fn schedule(self) -> Option<MountOutcome> {
        if self.document.is_ready() {
            return Some(self.mount());
        }
        let document = self.document.clone();
        document.when_ready(Box::new(move || {
            self.mount();
        }));
        None
    }

    fn logout_handler(&self) -> Box<dyn Fn()> {
        let session = self.session.clone();
        let document = self.document.clone();
        let config = Rc::clone(&self.config);
        Box::new(move || {
            session.logout();
            document.redirect(&config.logout_redirect);
        })
    }
}
