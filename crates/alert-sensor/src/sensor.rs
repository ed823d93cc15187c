//! The polling sensor.

use std::future::Future;
use std::time::Instant;

use alert_core::{Aggregator, AlertSource, AlertSummary, Severity};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{SensorConfig, DEFAULT_ICON, MIN_POLL_INTERVAL};

/// State attributes exposed alongside the numeric severity level.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SensorAttributes {
    /// Event names joined with `" - "`; absent when nothing is active.
    pub title: Option<String>,
    /// Severity of each distinct event, encounter order.
    pub severity: Vec<Severity>,
    /// Long-form description of every active alert.
    pub display_desc: Option<String>,
    /// Speech-friendly description.
    pub spoken_desc: Option<String>,
}

/// A weather-alert sensor polling an [`AlertSource`].
///
/// Each update runs one poll cycle: check whether any watched zone has
/// an active alert at all, fetch details only if so, aggregate, and
/// wholly replace the previous summary. A failed fetch degrades to the
/// empty summary for that cycle; it is logged and never propagated, so
/// a sensor can run unattended for months.
pub struct AlertSensor<S: AlertSource> {
    source: S,
    config: SensorConfig,
    aggregator: Aggregator,
    summary: AlertSummary,
    last_update: Option<Instant>,
}

impl<S: AlertSource> AlertSensor<S> {
    /// Create a new sensor. Nothing is fetched until the first
    /// [`update`](Self::update).
    pub fn new(source: S, config: SensorConfig) -> Self {
        let aggregator = Aggregator::new(config.statuses.clone());
        Self {
            source,
            config,
            aggregator,
            summary: AlertSummary::default(),
            last_update: None,
        }
    }

    /// Run one poll cycle and replace the summary with the result.
    pub async fn update(&mut self) -> &AlertSummary {
        let summary = self.poll_cycle().await;
        if summary.severity_level != self.summary.severity_level {
            info!(
                "severity level changed: {} -> {}",
                self.summary.severity_level, summary.severity_level
            );
        }
        self.summary = summary;
        self.last_update = Some(Instant::now());
        &self.summary
    }

    async fn poll_cycle(&self) -> AlertSummary {
        let active = match self.source.active_zones().await {
            Ok(active) => active,
            Err(e) => {
                warn!("alert count fetch failed, reporting no alerts: {}", e);
                return AlertSummary::default();
            }
        };

        if !self.config.zones.any_active(&active) {
            debug!("no active alerts for {}", self.config.zones);
            return AlertSummary::default();
        }

        match self.source.active_alerts(&self.config.zones).await {
            Ok(records) => self.aggregator.aggregate(&records),
            Err(e) => {
                warn!("alert fetch failed, reporting no alerts: {}", e);
                AlertSummary::default()
            }
        }
    }

    /// The latest summary.
    pub fn state(&self) -> &AlertSummary {
        &self.summary
    }

    /// The numeric severity level of the latest summary.
    pub fn severity_level(&self) -> u8 {
        self.summary.severity_level
    }

    /// The state attributes of the latest summary.
    pub fn attributes(&self) -> SensorAttributes {
        SensorAttributes {
            title: self.summary.title(),
            severity: self.summary.severities.clone(),
            display_desc: self.summary.display_desc.clone(),
            spoken_desc: self.summary.spoken_desc.clone(),
        }
    }

    /// Display name of the sensor.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Frontend icon.
    pub fn icon(&self) -> &str {
        DEFAULT_ICON
    }

    /// When the last poll cycle finished, if one has run.
    pub fn last_update(&self) -> Option<Instant> {
        self.last_update
    }

    /// Get the configuration.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Poll until `shutdown_signal` completes, invoking `on_update`
    /// with each fresh summary.
    ///
    /// The first cycle runs immediately; after each cycle the sensor
    /// sleeps for the configured interval. Shutdown is checked before
    /// cycle work, so a pending fetch or sleep is abandoned promptly.
    pub async fn run<F, Sh>(&mut self, shutdown_signal: Sh, mut on_update: F)
    where
        F: FnMut(&AlertSummary) + Send,
        Sh: Future<Output = ()> + Send,
    {
        let interval = self.config.poll_interval.max(MIN_POLL_INTERVAL);
        info!(
            "starting alert sensor '{}' for zones {} (polling every {:?})",
            self.config.name, self.config.zones, interval
        );

        tokio::pin!(shutdown_signal);

        loop {
            tokio::select! {
                biased;

                () = &mut shutdown_signal => {
                    info!("shutdown signal received, stopping alert sensor");
                    return;
                }

                summary = self.update() => {
                    on_update(summary);
                }
            }

            tokio::select! {
                biased;

                () = &mut shutdown_signal => {
                    info!("shutdown signal received, stopping alert sensor");
                    return;
                }

                () = tokio::time::sleep(interval) => {}
            }
        }
    }

    /// Run the sensor until Ctrl+C is pressed.
    ///
    /// Convenience wrapper over [`run`](Self::run) with the default
    /// Ctrl+C signal handler.
    #[cfg(feature = "signal")]
    pub async fn run_until_stopped<F>(&mut self, on_update: F)
    where
        F: FnMut(&AlertSummary) + Send,
    {
        let shutdown = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for Ctrl+C");
        };
        self.run(shutdown, on_update).await
    }
}
