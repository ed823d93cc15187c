//! Alert severity levels and their ordering.

use std::fmt;

use serde::Serialize;

/// Severity of a single alert, as reported by the NWS feed.
///
/// The variants form a total order used to pick the worst-case level
/// across all active alerts: `Unknown < Minor < Moderate < Severe <
/// Extreme`. Serialization and `Display` use the feed's capitalized
/// forms (`"Severe"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Unknown,
    Minor,
    Moderate,
    Severe,
    Extreme,
}

impl Severity {
    /// Numeric rank of this severity, 0 (`Unknown`) through 4 (`Extreme`).
    ///
    /// This is the value reported as the sensor state: the maximum rank
    /// over all accepted alerts.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Minor => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
            Self::Extreme => 4,
        }
    }

    /// Parse a severity label from the feed, case-insensitively.
    ///
    /// This is the normalization step for raw feed values: `"severe"`
    /// parses to [`Severity::Severe`]. Anything outside the five
    /// recognized labels falls back to [`Severity::Unknown`] (rank 0);
    /// the record itself still counts toward the summary, it just cannot
    /// raise the severity level.
    pub fn parse(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "minor" => Self::Minor,
            "moderate" => Self::Moderate,
            "severe" => Self::Severe,
            "extreme" => Self::Extreme,
            _ => Self::Unknown,
        }
    }

    /// The capitalized label for this severity (`"Moderate"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Minor => "Minor",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
