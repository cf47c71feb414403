use reqwest::header::{HeaderMap, SET_COOKIE, USER_AGENT};
use scraper::{Html, Selector};
use tracing::debug;

use crate::config::{self, Config};
use crate::error::{AppError, Result};
use crate::types::SessionContext;

/// Fetch the landing page and build a fresh session: CSRF token out of the
/// markup, Set-Cookie headers joined into one Cookie value. Runs once per
/// aggregation request; nothing is reused across requests.
pub async fn bootstrap_session(client: &reqwest::Client, cfg: &Config) -> Result<SessionContext> {
    let resp = client
        .get(&cfg.home_url)
        .header(USER_AGENT, config::USER_AGENT)
        .send()
        .await
        .map_err(|e| AppError::Session(format!("landing page fetch failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(AppError::Session(format!(
            "landing page returned HTTP {}",
            resp.status()
        )));
    }

    // Headers must be read before the body consumes the response.
    let cookies = join_set_cookies(resp.headers())?;

    let body = resp
        .text()
        .await
        .map_err(|e| AppError::Session(format!("landing page body read failed: {e}")))?;

    let csrf_token = extract_csrf_token(&body)
        .ok_or_else(|| AppError::Session("CSRF token not found!".to_string()))?;

    debug!(token_len = csrf_token.len(), "session bootstrapped");
    Ok(SessionContext {
        csrf_token,
        cookies,
    })
}

/// Join every Set-Cookie value with "; " for replay on the screen POSTs.
/// An empty cookie set is a session failure, not a silent empty string.
fn join_set_cookies(headers: &HeaderMap) -> Result<String> {
    let cookies: Vec<&str> = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();

    if cookies.is_empty() {
        return Err(AppError::Session(
            "no session cookies on landing page response".to_string(),
        ));
    }
    Ok(cookies.join("; "))
}

/// Pull the anti-forgery token out of `<meta name="csrf-token" content="...">`.
/// Sync on purpose: `scraper::Html` is not Send, so it must not live across
/// an await point.
fn extract_csrf_token(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"meta[name="csrf-token"]"#).ok()?;
    document
        .select(&selector)
        .next()?
        .value()
        .attr("content")
        .map(|s| s.to_string())
}
