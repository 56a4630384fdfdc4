//! SCB fetch client with conditional-request support.
//!
//! Sources are fetched with `If-None-Match`/`If-Modified-Since` built from
//! the previous cache row, so unchanged tables cost one 304 round trip.
//! Fresh bodies are classified by content type: SCB's newer endpoints serve
//! JSON, the legacy table exports serve PX text.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{
    ACCEPT, CONTENT_TYPE, ETAG, HeaderMap, HeaderName, IF_MODIFIED_SINCE, IF_NONE_MATCH,
    LAST_MODIFIED,
};

use crate::config::Config;
use crate::domain::Transformed;
use crate::error::AppError;
use crate::px::parse_px;

pub struct ScbClient {
    client: Client,
}

impl ScbClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| AppError::new(4, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// GET `url`, sending cache validators when present.
    ///
    /// Transport failures abort with an error; HTTP error statuses are a
    /// normal per-source outcome and come back as [`FetchOutcome::HttpError`].
    pub fn fetch_conditional(
        &self,
        url: &str,
        etag: Option<&str>,
        last_modified: Option<&str>,
    ) -> Result<FetchOutcome, AppError> {
        let mut req = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(etag) = etag {
            req = req.header(IF_NONE_MATCH, etag);
        }
        if let Some(last_modified) = last_modified {
            req = req.header(IF_MODIFIED_SINCE, last_modified);
        }

        let resp = req
            .send()
            .map_err(|e| AppError::new(4, format!("Request to {url} failed: {e}")))?;

        if resp.status() == StatusCode::NOT_MODIFIED {
            return Ok(FetchOutcome::NotModified);
        }
        if !resp.status().is_success() {
            return Ok(FetchOutcome::HttpError(resp.status().as_u16()));
        }

        let etag = header_string(resp.headers(), ETAG);
        let last_modified = header_string(resp.headers(), LAST_MODIFIED);
        let content_type = header_string(resp.headers(), CONTENT_TYPE).unwrap_or_default();
        let body = resp.text().unwrap_or_default();

        Ok(FetchOutcome::Fresh(FreshPayload {
            payload: classify_payload(&content_type, &body),
            etag,
            last_modified,
        }))
    }
}

/// Result of one conditional fetch.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The server confirmed the cached copy is still current.
    NotModified,
    /// Non-2xx status; the body is ignored.
    HttpError(u16),
    /// A 2xx response with its classified body and new validators.
    Fresh(FreshPayload),
}

#[derive(Debug, Clone)]
pub struct FreshPayload {
    pub payload: Payload,
    pub etag: Option<String>,
    pub last_modified: Option<String>,
}

/// A fetched body, classified by content type.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Parsed JSON body.
    Json(serde_json::Value),
    /// JSON content type whose body did not parse; kept as an ok fetch
    /// with nothing to summarize.
    InvalidJson,
    /// Anything non-JSON is treated as PX text.
    Px(String),
}

impl Payload {
    /// Build the cache-row summary: the decoded series for PX bodies, the
    /// array length for JSON bodies.
    pub fn to_transformed(&self, fetched_at: DateTime<Utc>) -> Transformed {
        match self {
            Payload::Json(value) => Transformed {
                fetched_at,
                payload_summary: value.as_array().map(|a| a.len() as u64),
                px_text: None,
                series: Vec::new(),
                categories: Vec::new(),
            },
            Payload::InvalidJson => Transformed {
                fetched_at,
                payload_summary: None,
                px_text: None,
                series: Vec::new(),
                categories: Vec::new(),
            },
            Payload::Px(text) => {
                let parsed = parse_px(text);
                Transformed {
                    fetched_at,
                    payload_summary: Some(parsed.values.len() as u64),
                    px_text: Some(text.clone()),
                    series: parsed.values,
                    categories: parsed.categories,
                }
            }
        }
    }

    /// JSON body to keep in the cache row's raw column; PX text lives in
    /// the transformed summary instead.
    pub fn raw_value(&self) -> Option<serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value.clone()),
            Payload::InvalidJson | Payload::Px(_) => None,
        }
    }
}

/// Classify a body by its `Content-Type` header. Pure, so sync behavior is
/// testable without a network.
pub fn classify_payload(content_type: &str, body: &str) -> Payload {
    let ct = content_type.to_ascii_lowercase();
    if ct.contains("application/json") || ct.contains("text/json") {
        match serde_json::from_str(body) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::InvalidJson,
        }
    } else {
        Payload::Px(body.to_string())
    }
}

fn header_string(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
