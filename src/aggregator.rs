use std::time::Duration;

use tracing::info;

use crate::config::{Config, REQUEST_TIMEOUT_SECS};
use crate::error::{AppError, Result};
use crate::fetcher::run_all_screens;
use crate::scorer::apply_momentum;
use crate::screens::{MOMENTUM_SCREENS, SCREENS};
use crate::session::bootstrap_session;
use crate::types::{ScreenResult, StockRow};

/// The whole aggregation: bootstrap a session, fan out every screen query,
/// score and flatten. Each call starts from scratch; there is no session or
/// result reuse between calls, so concurrent invocations are independent.
pub async fn fetch_aggregated_screens(cfg: &Config) -> Result<Vec<StockRow>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| AppError::Internal(format!("http client build failed: {e}")))?;

    let session = bootstrap_session(&client, cfg).await?;
    info!(screens = SCREENS.len(), "session established, fanning out");

    let results = run_all_screens(&client, cfg, &session).await?;
    let rows = merge_results(results);
    info!(rows = rows.len(), "aggregation complete");
    Ok(rows)
}

/// Score the four momentum categories, then flatten everything in screen-table
/// order. Within a category the upstream response order is preserved. Rows are
/// never deduplicated across categories.
pub fn merge_results(mut results: Vec<ScreenResult>) -> Vec<StockRow> {
    for result in &mut results {
        if MOMENTUM_SCREENS.contains(&result.name) {
            apply_momentum(&mut result.rows);
        }
    }

    results.into_iter().flat_map(|r| r.rows).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::tag_rows;
    use serde_json::json;

    fn screen(name: &'static str, volumes: &[f64]) -> ScreenResult {
        let data: Vec<_> = volumes.iter().map(|v| json!({ "volume": v })).collect();
        ScreenResult {
            name,
            rows: tag_rows(&json!({ "data": data }), name),
        }
    }

    #[test]
    fn flatten_preserves_table_then_upstream_order() {
        let merged = merge_results(vec![
            screen("topGainers", &[1.0, 2.0]),
            screen("topLosers", &[3.0]),
        ]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].side, "topGainers");
        assert_eq!(merged[0].volume(), 1.0);
        assert_eq!(merged[1].volume(), 2.0);
        assert_eq!(merged[2].side, "topLosers");
    }

    #[test]
    fn only_momentum_categories_are_scored() {
        let merged = merge_results(vec![
            screen("buy", &[100.0, 200.0, 300.0]),
            screen("volumeGainers", &[100.0, 200.0, 300.0]),
        ]);
        let (buy, rest): (Vec<_>, Vec<_>) = merged.into_iter().partition(|r| r.side == "buy");
        assert!(buy.iter().all(|r| r.momentum_strength.is_some()));
        assert!(rest.iter().all(|r| r.momentum_strength.is_none()));
    }

    #[test]
    fn all_four_momentum_categories_are_scored() {
        let merged = merge_results(vec![
            screen("buy", &[10.0]),
            screen("sell", &[10.0]),
            screen("advanceBuy", &[10.0]),
            screen("advanceSell", &[10.0]),
        ]);
        assert!(merged.iter().all(|r| r.momentum_strength == Some(1.0)));
    }

    #[test]
    fn empty_momentum_category_stays_empty() {
        let merged = merge_results(vec![screen("buy", &[]), screen("sell", &[5.0])]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].side, "sell");
    }

    #[test]
    fn duplicate_symbols_across_categories_survive() {
        let row = json!({ "nsecode": "TCS", "volume": 9.0 });
        let merged = merge_results(vec![
            ScreenResult {
                name: "topGainers",
                rows: tag_rows(&json!({ "data": [row.clone()] }), "topGainers"),
            },
            ScreenResult {
                name: "volumeGainers",
                rows: tag_rows(&json!({ "data": [row] }), "volumeGainers"),
            },
        ]);
        assert_eq!(merged.len(), 2);
        assert_ne!(merged[0].side, merged[1].side);
    }
}
