use futures_util::future::try_join_all;
use reqwest::header::{COOKIE, REFERER, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::config::{self, Config};
use crate::error::{AppError, Result};
use crate::screens::{side_label, ScreenDef, SCREENS};
use crate::types::{ScreenResult, SessionContext, StockRow};

/// Run every screen in the table concurrently against the process endpoint.
/// Fail-fast: the first screen to error aborts the whole fan-out and no
/// partial result is returned. `try_join_all` keeps results in table order
/// regardless of completion order, which fixes the flatten order downstream.
pub async fn run_all_screens(
    client: &reqwest::Client,
    cfg: &Config,
    session: &SessionContext,
) -> Result<Vec<ScreenResult>> {
    let queries = SCREENS.iter().map(|def| run_screen(client, cfg, session, def));
    try_join_all(queries).await
}

async fn run_screen(
    client: &reqwest::Client,
    cfg: &Config,
    session: &SessionContext,
    def: &ScreenDef,
) -> Result<ScreenResult> {
    let resp = client
        .post(&cfg.process_url)
        .header("x-csrf-token", &session.csrf_token)
        .header(USER_AGENT, config::USER_AGENT)
        .header(REFERER, &cfg.home_url)
        .header(COOKIE, &session.cookies)
        .form(&[("scan_clause", def.clause)])
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("screen {}: {e}", def.name)))?;

    if !resp.status().is_success() {
        return Err(AppError::Upstream(format!(
            "screen {}: HTTP {}",
            def.name,
            resp.status()
        )));
    }

    let body: Value = resp
        .json()
        .await
        .map_err(|e| AppError::Upstream(format!("screen {}: invalid JSON body: {e}", def.name)))?;

    let rows = tag_rows(&body, def.name);
    debug!(screen = def.name, rows = rows.len(), "screen fetched");
    Ok(ScreenResult {
        name: def.name,
        rows,
    })
}

/// Extract the `data` array from a screen response and tag each row with the
/// screen's side label. A missing or null `data` field is an empty result,
/// not an error.
pub fn tag_rows(body: &Value, screen_name: &str) -> Vec<StockRow> {
    let side = side_label(screen_name);
    body.get("data")
        .and_then(Value::as_array)
        .map(|rows| rows.iter().map(|row| StockRow::tagged(row, side)).collect())
        .unwrap_or_default()
}
