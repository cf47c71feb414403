use axum::{extract::State, routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::aggregator::fetch_aggregated_screens;
use crate::config::Config;
use crate::error::AppError;
use crate::types::StockRow;

#[derive(Clone)]
pub struct ApiState {
    pub cfg: Config,
}

pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/stocks", get(get_stocks))
        .route("/health", get(get_health))
        .layer(cors)
        .with_state(state)
}

/// The aggregation operation: every screen run fresh, flattened into one
/// array. Failures answer 500 with `{"error": <message>}` via AppError's
/// IntoResponse.
async fn get_stocks(State(state): State<ApiState>) -> Result<Json<Vec<StockRow>>, AppError> {
    let rows = fetch_aggregated_screens(&state.cfg).await?;
    Ok(Json(rows))
}

async fn get_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
