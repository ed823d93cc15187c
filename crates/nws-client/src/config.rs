//! Configuration for the NWS API client.

use std::env;
use std::time::Duration;

use alert_core::ZoneList;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.weather.gov";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`NwsClient`](crate::NwsClient).
#[derive(Debug, Clone)]
pub struct NwsConfig {
    /// Base URL of the weather.gov API.
    pub base_url: String,

    /// User-Agent header sent with every request. The NWS API asks
    /// clients to identify themselves.
    pub user_agent: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl NwsConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `NWS_API_URL` - API base URL (default: https://api.weather.gov)
    /// - `NWS_USER_AGENT` - User-Agent header value
    pub fn from_env() -> Self {
        let base_url = env::var("NWS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut config = Self::new(base_url);
        if let Ok(user_agent) = env::var("NWS_USER_AGENT") {
            config.user_agent = user_agent;
        }
        config
    }

    /// Set the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the active-alert count endpoint URL.
    pub fn count_url(&self) -> String {
        format!("{}/alerts/active/count", self.base_url)
    }

    /// Get the active-alerts endpoint URL for the given zones.
    pub fn active_alerts_url(&self, zones: &ZoneList) -> String {
        format!("{}/alerts/active?zone={}", self.base_url, zones.as_query())
    }
}

impl Default for NwsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn default_user_agent() -> String {
    format!("nws-client/{}", env!("CARGO_PKG_VERSION"))
}
