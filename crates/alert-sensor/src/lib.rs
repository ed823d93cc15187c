//! Polling sensor over the NWS active-alerts feed.
//!
//! [`AlertSensor`] pairs any [`AlertSource`] with the aggregation core:
//! each poll cycle first checks whether the watched zones have any
//! active alert at all, fetches details only when they do, and wholly
//! replaces the severity summary. Source failures degrade to "no
//! alerts" for that cycle rather than propagating, so the sensor keeps
//! running unattended.
//!
//! # Example
//!
//! ```rust
//! use alert_core::{AlertRecord, Severity, StaticSource, ZoneList};
//! use alert_sensor::{AlertSensor, SensorConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = StaticSource::new()
//!         .with_zone("CAZ006")
//!         .with_record(AlertRecord::new("Actual", "Flood Warning", Severity::Severe));
//!
//!     let config = SensorConfig::new(ZoneList::parse("CAZ006")?);
//!     let mut sensor = AlertSensor::new(source, config);
//!
//!     let summary = sensor.update().await;
//!     assert_eq!(summary.severity_level, 3);
//!     Ok(())
//! }
//! ```

mod config;
mod sensor;

pub use config::{SensorConfig, DEFAULT_ICON, DEFAULT_NAME, MIN_POLL_INTERVAL};
pub use sensor::{AlertSensor, SensorAttributes};

// Re-export core types that appear in this crate's public API.
pub use alert_core::{AlertError, AlertSource, AlertSummary, StatusFilter, ZoneList};
