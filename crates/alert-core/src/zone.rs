//! Configured forecast zones and the activity pre-check.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexSet;

use crate::error::AlertError;

/// An ordered, deduplicated set of NWS zone identifiers.
///
/// Parsed from the configured comma-joined string (`"CAZ006, CAC073"`);
/// used both as the query parameter for the detailed alert fetch and for
/// the cheap activity pre-check against the count endpoint's zone set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneList {
    zones: IndexSet<String>,
}

impl ZoneList {
    /// Parse a comma-separated zone list.
    ///
    /// All whitespace is stripped, empty entries are dropped, and
    /// duplicates keep their first position. An input with no zones left
    /// is a configuration error, since the zone list is required.
    pub fn parse(input: &str) -> Result<Self, AlertError> {
        let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let zones: IndexSet<String> = stripped
            .split(',')
            .filter(|zone| !zone.is_empty())
            .map(str::to_string)
            .collect();

        if zones.is_empty() {
            return Err(AlertError::Config(format!(
                "no zone identifiers in '{}'",
                input
            )));
        }

        Ok(Self { zones })
    }

    /// True iff at least one configured zone is in the active set.
    ///
    /// Pure predicate; the first match short-circuits. An empty active
    /// set (including a feed that omitted the zone field entirely) means
    /// no activity.
    pub fn any_active(&self, active: &HashSet<String>) -> bool {
        self.zones.iter().any(|zone| active.contains(zone))
    }

    /// Comma-joined form for the `zone=` query parameter.
    pub fn as_query(&self) -> String {
        self.zones
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Iterate the zones in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(String::as_str)
    }

    /// Number of configured zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the list is empty (never true for a parsed list).
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl fmt::Display for ZoneList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_query())
    }
}
