//! HTTP client for the weather.gov alerting endpoints.

use std::collections::HashSet;

use alert_core::{async_trait, AlertError, AlertRecord, AlertSource, ZoneList};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::NwsConfig;
use crate::types::{AlertCount, AlertsResponse, ProblemDetail};

/// Media type of the count endpoint.
const ACCEPT_LD_JSON: &str = "application/ld+json";

/// Media type of the alerts endpoint.
const ACCEPT_GEO_JSON: &str = "application/geo+json";

/// Client for the NWS active-alerts API.
///
/// Wraps a [`reqwest::Client`] configured with the User-Agent and timeout
/// from [`NwsConfig`]. Cheap to clone via the inner connection pool if a
/// caller needs to, but one instance per process is the expected shape.
pub struct NwsClient {
    client: Client,
    config: NwsConfig,
}

impl NwsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NwsConfig) -> Result<Self, AlertError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| AlertError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`NwsConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, AlertError> {
        Self::new(NwsConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &NwsConfig {
        &self.config
    }

    /// Fetch the nationwide active-alert count, including the set of
    /// zones that currently have any alert.
    pub async fn alert_count(&self) -> Result<AlertCount, AlertError> {
        let url = self.config.count_url();
        debug!("fetching alert count from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", ACCEPT_LD_JSON)
            .send()
            .await
            .map_err(|e| AlertError::Network(format!("failed to fetch {}: {}", url, e)))?;

        let count: AlertCount = decode(response).await?;
        debug!("{} active alerts reported nationwide", count.total);
        Ok(count)
    }

    /// Fetch all active alerts for the given zones as typed records.
    pub async fn active_alerts(&self, zones: &ZoneList) -> Result<Vec<AlertRecord>, AlertError> {
        let url = self.config.active_alerts_url(zones);
        debug!("fetching active alerts from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", ACCEPT_GEO_JSON)
            .send()
            .await
            .map_err(|e| AlertError::Network(format!("failed to fetch {}: {}", url, e)))?;

        let alerts: AlertsResponse = decode(response).await?;
        debug!("parsed {} alert features", alerts.features.len());
        Ok(alerts.into_records())
    }
}

#[async_trait]
impl AlertSource for NwsClient {
    async fn active_zones(&self) -> Result<HashSet<String>, AlertError> {
        Ok(self.alert_count().await?.zone_ids())
    }

    async fn active_alerts(&self, zones: &ZoneList) -> Result<Vec<AlertRecord>, AlertError> {
        NwsClient::active_alerts(self, zones).await
    }
}

/// Check the HTTP status and decode the JSON body.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AlertError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        // The API wraps errors in an RFC 7807 problem document.
        if let Ok(problem) = serde_json::from_str::<ProblemDetail>(&body) {
            warn!("weather.gov returned {}: {}", status.as_u16(), problem.detail);
        }
        return Err(AlertError::Status(status.as_u16()));
    }

    response
        .json()
        .await
        .map_err(|e| AlertError::Malformed(format!("failed to parse response: {}", e)))
}
