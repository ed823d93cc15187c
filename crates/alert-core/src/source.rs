//! Abstraction over where alert data comes from.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::AlertError;
use crate::record::AlertRecord;
use crate::zone::ZoneList;

/// A provider of active-alert data.
///
/// The production implementation talks to the NWS API over HTTP; tests
/// and offline tooling can substitute [`StaticSource`] or their own
/// canned implementation.
#[async_trait]
pub trait AlertSource: Send + Sync {
    /// All zone identifiers that currently have at least one active
    /// alert, regardless of whether we watch them.
    async fn active_zones(&self) -> Result<HashSet<String>, AlertError>;

    /// Full alert records for the given zones.
    async fn active_alerts(&self, zones: &ZoneList) -> Result<Vec<AlertRecord>, AlertError>;
}

/// An [`AlertSource`] serving fixed, in-memory data. Useful in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    zones: HashSet<String>,
    records: Vec<AlertRecord>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a zone as having active alerts.
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zones.insert(zone.into());
        self
    }

    /// Add a record returned by every `active_alerts` call.
    pub fn with_record(mut self, record: AlertRecord) -> Self {
        self.records.push(record);
        self
    }
}

#[async_trait]
impl AlertSource for StaticSource {
    async fn active_zones(&self) -> Result<HashSet<String>, AlertError> {
        Ok(self.zones.clone())
    }

    // The zone argument is ignored; the fixture returns everything it holds.
    async fn active_alerts(&self, _zones: &ZoneList) -> Result<Vec<AlertRecord>, AlertError> {
        Ok(self.records.clone())
    }
}
