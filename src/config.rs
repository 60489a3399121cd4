use anyhow::{Context, Result};

/// Address the development API server binds to, used when no base URL is
/// configured.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the HydroSense API, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Unit preselected at startup; the operator can change it at runtime.
    pub unit_id: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(&optional("HYDROSENSE_BASE_URL", DEFAULT_BASE_URL)),
            unit_id: optional("HYDROSENSE_UNIT_ID", ""),
            request_timeout_secs: optional("HYDROSENSE_REQUEST_TIMEOUT_SECS", "10")
                .parse()
                .context("HYDROSENSE_REQUEST_TIMEOUT_SECS must be a positive integer")?,
        })
    }
}

/// Strip trailing slashes so request paths can always be appended verbatim.
fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
