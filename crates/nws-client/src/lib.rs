//! HTTP client for the National Weather Service alerting API.
//!
//! Talks to the two `api.weather.gov` endpoints the alert poller needs:
//! the active-alert count (which zones have alerts at all) and the
//! active alerts for a set of forecast zones. Responses are converted to
//! typed [`AlertRecord`]s right at the parsing boundary, with defined
//! defaults for fields the feed omits or nulls.
//!
//! # Example
//!
//! ```rust,no_run
//! use alert_core::ZoneList;
//! use nws_client::{NwsClient, NwsConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NwsClient::new(NwsConfig::default())?;
//!     let zones = ZoneList::parse("CAZ006,CAZ007")?;
//!     let records = client.active_alerts(&zones).await?;
//!     println!("{} active alerts", records.len());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod types;

pub use client::NwsClient;
pub use config::{NwsConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use types::{
    AlertCount, AlertFeature, AlertParameters, AlertProperties, AlertsResponse, ProblemDetail,
    ZoneCounts,
};

// Re-export core types that appear in this crate's public API.
pub use alert_core::{AlertError, AlertRecord, AlertSource, ZoneList};
