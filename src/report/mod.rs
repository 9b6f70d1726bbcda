//! Cross-entity participation report: fetch the four source collections,
//! then join them into one `ReportRow` per volunteer.

pub mod aggregate;
pub mod fetch;
pub mod model;

pub use aggregate::aggregate;
pub use fetch::{ReportSnapshot, fetch_events, fetch_history, fetch_report_snapshot};
pub use model::{ParticipationDetail, ReportRow};

/// Placeholder for data that is missing or no longer resolvable.
pub const NOT_AVAILABLE: &str = "N/A";
/// Event name used when a participation points at a deleted event.
pub const UNKNOWN_EVENT: &str = "Unknown Event";
