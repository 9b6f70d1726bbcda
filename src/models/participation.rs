use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status assumed when a record carries none.
pub const DEFAULT_STATUS: &str = "completed";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// One volunteer's participation in one event.
///
/// `event_id` may point at an event that has since been deleted; `hours`
/// may be absent and then counts as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationRecord {
    pub id: String,
    pub volunteer_email: String,
    pub event_id: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default = "default_status")]
    pub status: String,
    pub participation_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ParticipationRecord {
    pub fn hours_or_zero(&self) -> f64 {
        self.hours.unwrap_or(0.0)
    }

    /// The recorded role; an empty string counts as no role.
    pub fn assigned_role(&self) -> Option<&str> {
        self.role.as_deref().filter(|r| !r.is_empty())
    }

    pub fn status_or_default(&self) -> &str {
        if self.status.is_empty() {
            DEFAULT_STATUS
        } else {
            &self.status
        }
    }
}
