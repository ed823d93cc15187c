//! Core types and aggregation logic for NWS weather alert monitoring.
//!
//! This crate provides the shared vocabulary for the alert poller:
//!
//! - [`AlertRecord`] / [`Severity`] / [`StatusType`] - typed alert data
//! - [`Aggregator`] / [`AlertSummary`] - the severity-ranked summary computation
//! - [`ZoneList`] - configured forecast zones and the activity pre-check
//! - [`AlertSource`] - the trait alert feeds implement
//! - [`AlertError`] - shared error type
//!
//! # Example
//!
//! ```rust
//! use alert_core::{Aggregator, AlertRecord, Severity, StatusFilter};
//!
//! let records = vec![
//!     AlertRecord::new("Actual", "Flood Warning", Severity::Severe)
//!         .with_headline("Flood Warning until noon PDT"),
//! ];
//!
//! let summary = Aggregator::new(StatusFilter::all()).aggregate(&records);
//! assert_eq!(summary.severity_level, 3);
//! assert_eq!(summary.events, vec!["Flood Warning"]);
//! assert_eq!(summary.spoken_desc.as_deref(), Some("Flood Warning until noon PDT"));
//! ```

mod error;
mod record;
mod severity;
mod source;
mod summary;
mod zone;

pub use error::AlertError;
pub use record::{AlertRecord, StatusFilter, StatusType};
pub use severity::Severity;
pub use source::{AlertSource, StaticSource};
pub use summary::{Aggregator, AlertSummary};
pub use zone::ZoneList;

// Re-export async_trait for implementors of AlertSource.
pub use async_trait::async_trait;
