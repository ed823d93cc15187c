//! Alert records and status-type filtering.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

use crate::error::AlertError;
use crate::severity::Severity;

/// One active alert from the feed, after boundary parsing.
///
/// Fields default to empty rather than failing when the feed omits them;
/// the severity is already normalized to a [`Severity`] by the parsing
/// boundary, so the aggregator never sees a raw severity string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRecord {
    /// Raw operational status from the feed (`"Actual"`, `"Test"`, ...).
    pub status: String,
    /// Alert type/title (`"Flood Warning"`). Dedup key.
    pub event: String,
    /// Headline, when the feed carries one. Falls back to `event` during
    /// aggregation when absent or empty.
    pub headline: Option<String>,
    /// Normalized severity.
    pub severity: Severity,
    /// Long-form description text.
    pub description: String,
    /// Instruction text; empty when the feed has none.
    pub instruction: String,
}

impl AlertRecord {
    /// Create a record with empty description and instruction.
    pub fn new(
        status: impl Into<String>,
        event: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            status: status.into(),
            event: event.into(),
            headline: None,
            severity,
            description: String::new(),
            instruction: String::new(),
        }
    }

    /// Set the headline.
    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    /// Set the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the instruction text.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }
}

/// Operational classification of an alert.
///
/// Used to filter out non-real alerts (drills, system messages) before
/// aggregation. The feed reports these capitalized; comparison is
/// case-insensitive and the canonical form here is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    Actual,
    Exercise,
    System,
    Test,
    Draft,
}

impl StatusType {
    /// All five known status types, in feed order.
    pub const ALL: [StatusType; 5] = [
        StatusType::Actual,
        StatusType::Exercise,
        StatusType::System,
        StatusType::Test,
        StatusType::Draft,
    ];

    /// Parse a status label, case-insensitively. `None` for unknown labels.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "actual" => Some(Self::Actual),
            "exercise" => Some(Self::Exercise),
            "system" => Some(Self::System),
            "test" => Some(Self::Test),
            "draft" => Some(Self::Draft),
            _ => None,
        }
    }

    /// The lowercase label (`"actual"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actual => "actual",
            Self::Exercise => "exercise",
            Self::System => "system",
            Self::Test => "test",
            Self::Draft => "draft",
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of status types accepted by the aggregator.
///
/// A record whose status is not in this set contributes to no output
/// field. Defaults to all five known types.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusFilter {
    accepted: IndexSet<StatusType>,
}

impl StatusFilter {
    /// Accept all five known status types.
    pub fn all() -> Self {
        Self {
            accepted: StatusType::ALL.into_iter().collect(),
        }
    }

    /// Accept only the given status types.
    pub fn only(types: impl IntoIterator<Item = StatusType>) -> Self {
        Self {
            accepted: types.into_iter().collect(),
        }
    }

    /// Build a filter from configuration labels, validating each one.
    ///
    /// Unknown labels and an empty list are configuration errors; this is
    /// where user-supplied status lists get checked, not the feed data.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, AlertError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = IndexSet::new();
        for label in labels {
            let label = label.as_ref();
            let status = StatusType::parse(label).ok_or_else(|| {
                AlertError::Config(format!(
                    "unknown status type '{}' (expected one of: actual, exercise, system, test, draft)",
                    label
                ))
            })?;
            accepted.insert(status);
        }
        if accepted.is_empty() {
            return Err(AlertError::Config(
                "status type list is empty".to_string(),
            ));
        }
        Ok(Self { accepted })
    }

    /// Whether a record with this raw status string should be considered.
    ///
    /// The status is lower-cased and parsed first, so feed statuses outside
    /// the known five are never accepted.
    pub fn accepts(&self, raw_status: &str) -> bool {
        StatusType::parse(raw_status)
            .map(|status| self.accepted.contains(&status))
            .unwrap_or(false)
    }

    /// Iterate the accepted types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusType> {
        self.accepted.iter()
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builders() {
        let record = AlertRecord::new("Actual", "Wind Advisory", Severity::Minor)
            .with_headline("Wind Advisory until 6 PM")
            .with_description("Gusts to 45 mph.")
            .with_instruction("Secure loose objects.");

        assert_eq!(record.status, "Actual");
        assert_eq!(record.event, "Wind Advisory");
        assert_eq!(record.headline.as_deref(), Some("Wind Advisory until 6 PM"));
        assert_eq!(record.severity, Severity::Minor);
        assert_eq!(record.description, "Gusts to 45 mph.");
        assert_eq!(record.instruction, "Secure loose objects.");
    }

    #[test]
    fn test_status_type_parse() {
        assert_eq!(StatusType::parse("actual"), Some(StatusType::Actual));
        assert_eq!(StatusType::parse("Actual"), Some(StatusType::Actual));
        assert_eq!(StatusType::parse("EXERCISE"), Some(StatusType::Exercise));
        assert_eq!(StatusType::parse("bogus"), None);
    }

    #[test]
    fn test_filter_default_accepts_all_known() {
        let filter = StatusFilter::default();
        for status in StatusType::ALL {
            assert!(filter.accepts(status.as_str()));
        }
    }

    #[test]
    fn test_filter_accepts_case_insensitive() {
        let filter = StatusFilter::only([StatusType::Actual]);
        assert!(filter.accepts("Actual"));
        assert!(filter.accepts("actual"));
        assert!(filter.accepts("ACTUAL"));
        assert!(!filter.accepts("test"));
        assert!(!filter.accepts("Test"));
    }

    #[test]
    fn test_filter_rejects_unknown_feed_status() {
        let filter = StatusFilter::all();
        assert!(!filter.accepts("rumor"));
        assert!(!filter.accepts(""));
    }

    #[test]
    fn test_from_labels_valid() {
        let filter = StatusFilter::from_labels(["actual", "Test"]).unwrap();
        assert!(filter.accepts("actual"));
        assert!(filter.accepts("test"));
        assert!(!filter.accepts("draft"));
    }

    #[test]
    fn test_from_labels_unknown_label_errors() {
        let err = StatusFilter::from_labels(["actual", "bogus"]).unwrap_err();
        match err {
            AlertError::Config(msg) => assert!(msg.contains("bogus")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_labels_empty_errors() {
        let labels: [&str; 0] = [];
        assert!(StatusFilter::from_labels(labels).is_err());
    }
}
