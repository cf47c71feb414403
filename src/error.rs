use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Session bootstrap failed: landing page unreachable, CSRF token missing,
    /// or no Set-Cookie headers on the response.
    #[error("{0}")]
    Session(String),

    /// One of the fan-out screen queries failed (transport error, non-2xx
    /// status, or unparsable body). The whole aggregation aborts.
    #[error("{0}")]
    Upstream(String),

    /// Unexpected failure outside the session and fan-out phases.
    #[error("{0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Every failure surfaces uniformly as a 500 with `{"error": <message>}`.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let message = self.to_string();
        error!("{message}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": message })),
        )
            .into_response()
    }
}
