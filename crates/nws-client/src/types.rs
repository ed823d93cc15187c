//! weather.gov API response types.

use std::collections::{HashMap, HashSet};

use alert_core::{AlertRecord, Severity};
use serde::Deserialize;

/// Response body of `/alerts/active/count`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertCount {
    /// Total number of active alerts nationwide.
    #[serde(default)]
    pub total: u32,
    /// Forecast zones with at least one active alert.
    #[serde(default)]
    pub zones: ZoneCounts,
}

impl AlertCount {
    /// Zone identifiers with active alerts, whichever shape arrived.
    pub fn zone_ids(&self) -> HashSet<String> {
        self.zones.zone_ids()
    }
}

/// The `zones` field of the count response.
///
/// The live API reports an object mapping zone ID to alert count; older
/// captures show a bare array of IDs. Accept either; only membership is
/// ever used.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ZoneCounts {
    Counts(HashMap<String, u32>),
    Ids(Vec<String>),
}

impl ZoneCounts {
    pub fn zone_ids(&self) -> HashSet<String> {
        match self {
            Self::Counts(map) => map.keys().cloned().collect(),
            Self::Ids(ids) => ids.iter().cloned().collect(),
        }
    }
}

impl Default for ZoneCounts {
    fn default() -> Self {
        Self::Ids(Vec::new())
    }
}

/// Response body of `/alerts/active` (a GeoJSON feature collection).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertsResponse {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

impl AlertsResponse {
    /// Convert every feature to a typed record.
    pub fn into_records(self) -> Vec<AlertRecord> {
        self.features
            .into_iter()
            .map(|feature| feature.properties.into_record())
            .collect()
    }
}

/// One GeoJSON feature wrapping an alert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

/// The alert fields consumed from a feature's `properties`.
///
/// The feed omits or nulls fields freely, so everything defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertProperties {
    /// Status: "Actual", "Exercise", "System", "Test", or "Draft".
    #[serde(default)]
    pub status: String,
    /// Event name, e.g. "Flood Warning".
    #[serde(default)]
    pub event: String,
    /// Severity label, e.g. "Severe". Free text as far as we're concerned.
    #[serde(default)]
    pub severity: String,
    /// Long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Recommended action, often null.
    #[serde(default)]
    pub instruction: Option<String>,
    /// Extra parameters; only the NWS headline is used.
    #[serde(default)]
    pub parameters: AlertParameters,
}

impl AlertProperties {
    /// Convert to a typed record, applying defined defaults for missing
    /// or null fields. Severity normalization happens here, once.
    pub fn into_record(self) -> AlertRecord {
        AlertRecord {
            status: self.status,
            event: self.event,
            headline: self.parameters.nws_headline.into_iter().next(),
            severity: Severity::parse(&self.severity),
            description: self.description.unwrap_or_default(),
            instruction: self.instruction.unwrap_or_default(),
        }
    }
}

/// The `parameters` bag attached to each alert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertParameters {
    /// Headline lines; the first entry is the display headline.
    #[serde(default, rename = "NWSheadline")]
    pub nws_headline: Vec<String>,
}

/// Error body the API returns alongside non-2xx statuses
/// (RFC 7807 problem detail).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}
