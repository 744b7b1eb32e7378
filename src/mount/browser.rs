//! `PageDocument` over the live browser document.
//!
//! TRADE-OFFS
//! ==========
//! Event closures are leaked with `forget`: they must live as long as the
//! page, and a page load mounts at most once.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::PageDocument;

#[derive(Clone, Debug)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    /// The current window's document, if running in a window.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl PageDocument for BrowserDocument {
    type Element = web_sys::Element;

    fn is_ready(&self) -> bool {
        self.document.ready_state() != "loading"
    }

    fn when_ready(&self, callback: Box<dyn FnOnce()>) {
        let listener = Closure::once_into_js(move || callback());
        if let Err(e) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
        {
            log::warn!("could not wait for DOMContentLoaded: {e:?}");
        }
    }

    fn query(&self, selector: &str) -> Option<web_sys::Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                log::debug!("skipping host selector {selector}: {e:?}");
                None
            }
        }
    }

    fn host_contains(&self, host: &web_sys::Element, id: &str) -> bool {
        self.document
            .get_element_by_id(id)
            .is_some_and(|el| host.contains(Some(el.as_ref())))
    }

    fn append_markup(&self, host: &web_sys::Element, markup: &str) {
        if let Err(e) = host.insert_adjacent_html("beforeend", markup) {
            log::warn!("navigation injection failed: {e:?}");
        }
    }

    fn on_click(&self, host: &web_sys::Element, id: &str, handler: Box<dyn Fn()>) -> bool {
        let Some(control) = self
            .document
            .get_element_by_id(id)
            .filter(|el| host.contains(Some(el.as_ref())))
        else {
            return false;
        };
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            handler();
        });
        match control.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref()) {
            Ok(()) => {
                listener.forget();
                true
            }
            Err(e) => {
                log::warn!("could not bind {id}: {e:?}");
                false
            }
        }
    }

    fn redirect(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            log::warn!("redirect to {href} failed: {e:?}");
        }
    }
}
