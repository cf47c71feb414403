use crate::error::{AppError, Result};

pub const HOME_URL: &str = "https://chartink.com/";
pub const PROCESS_URL: &str = "https://chartink.com/screener/process";

/// Chartink rejects requests without a browser-like User-Agent.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Per-request timeout for the landing-page fetch and every screen POST.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Landing page scraped for the CSRF token and session cookies (CHARTINK_HOME_URL).
    pub home_url: String,
    /// Screener query endpoint the fan-out POSTs hit (CHARTINK_PROCESS_URL).
    pub process_url: String,
    pub log_level: String,
    pub api_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            home_url: std::env::var("CHARTINK_HOME_URL").unwrap_or_else(|_| HOME_URL.to_string()),
            process_url: std::env::var("CHARTINK_PROCESS_URL")
                .unwrap_or_else(|_| PROCESS_URL.to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            api_port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .map_err(|_| AppError::Config("PORT must be a valid port number".to_string()))?,
        })
    }
}
