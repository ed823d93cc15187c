//! Sensor configuration.

use std::time::Duration;

use alert_core::{StatusFilter, ZoneList};

/// Default sensor name.
pub const DEFAULT_NAME: &str = "NWS Alerts";

/// Icon shown for the sensor in a frontend.
pub const DEFAULT_ICON: &str = "mdi:alert";

/// Floor for the polling interval. The API is polled at most once a
/// minute.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Configuration for an [`AlertSensor`](crate::AlertSensor).
#[derive(Debug, Clone)]
pub struct SensorConfig {
    /// Display name of the sensor.
    pub name: String,

    /// Forecast zones to watch.
    pub zones: ZoneList,

    /// Status types whose alerts count toward the summary.
    pub statuses: StatusFilter,

    /// Time between poll cycles, never below [`MIN_POLL_INTERVAL`].
    pub poll_interval: Duration,
}

impl SensorConfig {
    /// Create a configuration watching the given zones, with defaults
    /// for everything else.
    pub fn new(zones: ZoneList) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            zones,
            statuses: StatusFilter::all(),
            poll_interval: MIN_POLL_INTERVAL,
        }
    }

    /// Set the sensor name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the accepted status types.
    pub fn with_statuses(mut self, statuses: StatusFilter) -> Self {
        self.statuses = statuses;
        self
    }

    /// Set the polling interval. Values below [`MIN_POLL_INTERVAL`] are
    /// raised to it.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(MIN_POLL_INTERVAL);
        self
    }
}
