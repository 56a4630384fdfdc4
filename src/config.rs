//! Runtime configuration.
//!
//! All environment access happens here, once, at startup. The resulting
//! `Config` is passed by reference to the store, the SCB client, and the
//! pipeline, so none of them read ambient process state.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_STORE_DIR: &str = "./etappmal-data";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved configuration for a single invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `milestones.json`, `sources.json`, and `cache.json`.
    pub store_dir: PathBuf,
    /// Timeout applied to every SCB request.
    pub http_timeout: Duration,
    /// `User-Agent` header for SCB requests.
    pub user_agent: String,
}

impl Config {
    /// Build configuration from the environment (`.env` is honored).
    ///
    /// Recognized variables, all optional:
    /// - `ETAPPMAL_DIR`: store directory (default `./etappmal-data`)
    /// - `ETAPPMAL_HTTP_TIMEOUT_SECS`: request timeout (default 30)
    /// - `ETAPPMAL_USER_AGENT`: request user agent
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let store_dir = std::env::var("ETAPPMAL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_DIR));

        let http_timeout =
            timeout_from(std::env::var("ETAPPMAL_HTTP_TIMEOUT_SECS").ok().as_deref())?;

        let user_agent =
            std::env::var("ETAPPMAL_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Ok(Self {
            store_dir,
            http_timeout,
            user_agent,
        })
    }
}

fn timeout_from(raw: Option<&str>) -> Result<Duration, AppError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    };
    let secs: u64 = raw.trim().parse().map_err(|_| {
        AppError::new(2, format!("Invalid ETAPPMAL_HTTP_TIMEOUT_SECS value '{raw}'."))
    })?;
    if secs == 0 {
        return Err(AppError::new(2, "ETAPPMAL_HTTP_TIMEOUT_SECS must be > 0."));
    }
    Ok(Duration::from_secs(secs))
}

fn default_user_agent() -> String {
    format!("etappmal/{}", env!("CARGO_PKG_VERSION"))
}
