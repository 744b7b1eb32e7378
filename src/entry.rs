//! JavaScript-facing exports called from the static HTML pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page loads the WASM module and calls `mountNavigation`, optionally
//! with a JSON config for its link set and storage keys. The session exports
//! take the same optional config so they read and write the keys the
//! navigation reads. The API pages call the `*Text` helpers and write the
//! returned string into their output area.

use wasm_bindgen::prelude::*;

use crate::mount::NavMount;
use crate::mount::browser::BrowserDocument;
use crate::nav::NavConfig;
use crate::net::api::{self, ApiConfig, ApiError, RiskInput};
use crate::session::{BrowserStore, Identity, MemoryStore, Session};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Mount the navigation bar now, or once the document is parsed.
#[wasm_bindgen(js_name = mountNavigation)]
pub fn mount_navigation(config_json: Option<String>) {
    let config = NavConfig::from_json_or_default(config_json.as_deref());
    let Some(document) = BrowserDocument::current() else {
        return;
    };
    match BrowserStore::local() {
        Ok(store) => {
            NavMount::new(document, store, config).schedule();
        }
        Err(e) => {
            log::warn!("{e}; mounting signed-out navigation");
            NavMount::new(document, MemoryStore::new(), config).schedule();
        }
    }
}

/// Session over local storage, keyed by the same page config the
/// navigation was mounted with.
fn browser_session(config_json: Option<&str>) -> Result<Session<BrowserStore>, JsValue> {
    let store = BrowserStore::local().map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(NavConfig::from_json_or_default(config_json).session(store))
}

/// Record a completed login. `identity_json` must be an object; `email` is
/// used for the account label.
///
/// # Errors
///
/// Rejects malformed identity JSON or a storage write failure.
#[wasm_bindgen]
pub fn login(identity_json: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let identity: Identity =
        serde_json::from_str(identity_json).map_err(|e| JsValue::from_str(&format!("invalid identity: {e}")))?;
    browser_session(config_json.as_deref())?
        .login(identity)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(())
}

#[wasm_bindgen]
pub fn logout(config_json: Option<String>) {
    match browser_session(config_json.as_deref()) {
        Ok(session) => session.logout(),
        Err(e) => log::warn!("logout skipped: {e:?}"),
    }
}

#[wasm_bindgen(js_name = isAuthenticated)]
pub fn is_authenticated(config_json: Option<String>) -> bool {
    browser_session(config_json.as_deref()).is_ok_and(|session| session.is_authenticated())
}

#[wasm_bindgen(js_name = currentEmail)]
pub fn current_email(config_json: Option<String>) -> Option<String> {
    browser_session(config_json.as_deref())
        .ok()?
        .current_identity()?
        .display_email()
        .map(str::to_owned)
}

fn api_config(base_url: Option<String>) -> ApiConfig {
    ApiConfig::new(base_url.unwrap_or_default())
}

/// `GET /api/health`, rendered for display.
#[wasm_bindgen(js_name = healthText)]
pub async fn health_text(base_url: Option<String>) -> String {
    match api::fetch_health(&api_config(base_url)).await {
        Ok(status) => status.display(),
        Err(e) => e.inline_message(),
    }
}

/// `POST /api/risk-score` with a JSON-encoded `RiskInput`, rendered for display.
#[wasm_bindgen(js_name = riskScoreText)]
pub async fn risk_score_text(base_url: Option<String>, input_json: String) -> String {
    let input: RiskInput = match serde_json::from_str(&input_json) {
        Ok(input) => input,
        Err(e) => return ApiError::Request(e.to_string()).inline_message(),
    };
    match api::submit_risk_score(&api_config(base_url), &input).await {
        Ok(response) => {
            let raw = serde_json::to_value(&response).unwrap_or_default();
            format!("{}\n{}", api::risk_summary(&response), api::display_json(&raw))
        }
        Err(e) => e.inline_message(),
    }
}

/// `POST /api/upload-csv` with the chosen file, rendered for display.
#[wasm_bindgen(js_name = uploadCsvText)]
pub async fn upload_csv_text(base_url: Option<String>, file: web_sys::File) -> String {
    match api::upload_csv(&api_config(base_url), &file).await {
        Ok(body) => api::display_json(&body),
        Err(e) => e.inline_message(),
    }
}
