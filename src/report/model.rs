use serde::Serialize;

/// A participation record enriched with its event's display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationDetail {
    pub event_name: String,
    pub event_date: String,
    pub role: String,
    pub hours: f64,
    pub status: String,
    pub participation_date: String,
}

/// Per-volunteer aggregate. Built fresh for every report and never stored.
///
/// `total_events == participations.len()` and `total_hours` is the sum of
/// the participations' hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub volunteer_name: String,
    pub volunteer_email: String,
    pub skills_summary: String,
    pub total_events: usize,
    pub total_hours: f64,
    pub participations: Vec<ParticipationDetail>,
}

impl ReportRow {
    pub fn has_participations(&self) -> bool {
        !self.participations.is_empty()
    }
}
