//! Pure navigation markup renderer.
//!
//! Output depends only on the session snapshot and the config, so equal
//! inputs always produce byte-identical markup. All interpolated text is
//! HTML-escaped.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use super::config::{NavConfig, NavLink};
use crate::session::SessionState;

/// Escape text for use in element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_link(out: &mut String, link: &NavLink, current: Option<&str>) {
    let aria = if current == Some(link.href.as_str()) {
        r#" aria-current="page""#
    } else {
        ""
    };
    out.push_str(&format!(
        r#"<a class="pw-nav__link" href="{}"{aria}>{}</a>"#,
        escape_html(&link.href),
        escape_html(&link.label),
    ));
}

/// Render the navigation bar for `state` using the links in `config`.
pub fn render(state: &SessionState, config: &NavConfig) -> String {
    let current = config.current_path.as_deref();
    let mut out = format!(
        r#"<nav id="{}" class="pw-nav" aria-label="Main">"#,
        escape_html(&config.marker_id)
    );

    for link in &config.links {
        push_link(&mut out, link, current);
    }

    if state.is_authenticated() {
        out.push_str(&format!(
            r#"<span class="pw-nav__account">{}</span><button type="button" id="{}" class="pw-nav__logout">Logout</button>"#,
            escape_html(state.account_label(&config.account_fallback)),
            escape_html(&config.logout_id),
        ));
    } else {
        push_link(&mut out, &NavLink::new("Login", config.login_href.as_str()), current);
        push_link(&mut out, &NavLink::new("Register", config.register_href.as_str()), current);
    }

    out.push_str("</nav>");
    out
}
