//! The alert aggregation pass and its output summary.

use serde::Serialize;

use crate::record::{AlertRecord, StatusFilter};
use crate::severity::Severity;

/// Severity-ranked summary of all active alerts for a zone set.
///
/// Recomputed from scratch on every poll cycle; the default value is the
/// "no active alerts" state, which is also what failed or fully filtered
/// cycles report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlertSummary {
    /// Maximum severity rank over all accepted, deduplicated records.
    /// 0 when nothing is active.
    pub severity_level: u8,
    /// Distinct event names, first-seen order.
    pub events: Vec<String>,
    /// Severity of each event, parallel to `events`.
    pub severities: Vec<Severity>,
    /// Long-form description: one 4-line block per event, blank-line
    /// separated. Absent when nothing is active.
    pub display_desc: Option<String>,
    /// Speech-friendly join of the headlines. Absent when nothing is
    /// active.
    pub spoken_desc: Option<String>,
}

impl AlertSummary {
    /// Whether any alert survived filtering and dedup this cycle.
    pub fn has_alerts(&self) -> bool {
        !self.events.is_empty()
    }

    /// Event names joined with `" - "`, the compact display title.
    pub fn title(&self) -> Option<String> {
        if self.events.is_empty() {
            None
        } else {
            Some(self.events.join(" - "))
        }
    }
}

/// Computes an [`AlertSummary`] from raw feed records.
///
/// The accepted status set is fixed at construction; the aggregation
/// itself is a pure single pass over the input, so the same records and
/// filter always produce the same summary.
#[derive(Debug, Clone)]
pub struct Aggregator {
    statuses: StatusFilter,
}

impl Aggregator {
    /// Create an aggregator accepting the given status types.
    pub fn new(statuses: StatusFilter) -> Self {
        Self { statuses }
    }

    /// Aggregate records into a summary, preserving input order.
    ///
    /// One pass: records failing the status filter contribute nothing;
    /// the first record for each event name wins and later duplicates are
    /// skipped entirely (they cannot raise the severity level either).
    /// `events`, `severities`, and both descriptions are all built from
    /// this same traversal, so they stay mutually consistent.
    pub fn aggregate(&self, records: &[AlertRecord]) -> AlertSummary {
        let mut severity_level = 0u8;
        let mut events: Vec<String> = Vec::new();
        let mut severities: Vec<Severity> = Vec::new();
        let mut headlines: Vec<String> = Vec::new();
        let mut blocks: Vec<String> = Vec::new();

        for record in records {
            if !self.statuses.accepts(&record.status) {
                continue;
            }
            if events.iter().any(|seen| seen == &record.event) {
                // First occurrence of an event name wins.
                continue;
            }

            let headline = match record.headline.as_deref() {
                Some(h) if !h.is_empty() => h,
                _ => record.event.as_str(),
            };

            if record.severity.rank() > severity_level {
                severity_level = record.severity.rank();
            }

            events.push(record.event.clone());
            severities.push(record.severity);
            headlines.push(headline.to_string());
            blocks.push(format!(
                "{}\n{}\n{}\n{}",
                record.event, headline, record.description, record.instruction
            ));
        }

        let display_desc = if blocks.is_empty() {
            None
        } else {
            Some(blocks.join("\n\n"))
        };

        AlertSummary {
            severity_level,
            events,
            severities,
            display_desc,
            spoken_desc: join_spoken(&headlines),
        }
    }
}

/// Join headlines into one speakable phrase.
///
/// One headline stands alone; two or more are joined with `", a "`
/// except for `" and a "` before the last: `H1, a H2 and a H3`.
fn join_spoken(headlines: &[String]) -> Option<String> {
    match headlines {
        [] => None,
        [only] => Some(only.clone()),
        [rest @ .., last] => Some(format!("{} and a {}", rest.join(", a "), last)),
    }
}
