use std::time::Duration;

pub mod factory;
pub use factory::ClientFactory;

/// Path of the ask endpoint, relative to the service base URL
pub const ASK_THOM_PATH: &str = "/api/ai/ask-thom";

/// Default service location (local development backend)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default upper bound for one request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for the assistant service
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Service base URL, or the full endpoint URL
    pub base_url: String,
    pub timeout: Duration,
    /// Skip the network entirely; every answer comes from the local fallback
    pub offline: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            offline: false,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }
}

/// Normalize a base URL into the ask endpoint URL.
/// URLs that already point at the endpoint are used as-is.
pub fn ask_thom_endpoint(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.ends_with(ASK_THOM_PATH) {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, ASK_THOM_PATH)
    }
}
