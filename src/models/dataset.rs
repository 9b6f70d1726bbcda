//! JSON dataset used by `vreport import` to seed the store.

use super::{Account, Event, ParticipationRecord, Profile};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub history: Vec<ParticipationRecord>,
}

impl Dataset {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path)?;
        let ds: Dataset = serde_json::from_str(&raw)
            .map_err(|e| AppError::Import(format!("{}: {e}", path.display())))?;
        ds.validate()?;
        Ok(ds)
    }

    /// Rejects negative hours; everything else is enforced by the schema.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(bad) = self
            .history
            .iter()
            .find(|h| h.hours.is_some_and(|v| v < 0.0 || !v.is_finite()))
        {
            return Err(AppError::Import(format!(
                "history record {} has invalid hours",
                bad.id
            )));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.accounts.len() + self.profiles.len() + self.events.len() + self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_json_with_defaults() {
        let raw = r#"{
            "accounts": [{"email": "a@x.org", "displayName": "Ann", "role": "volunteer"}],
            "history": [{
                "id": "h1", "volunteerEmail": "a@x.org", "eventId": "e1",
                "participationDate": "2024-03-01T10:00:00Z",
                "createdAt": "2024-03-01T10:00:00Z",
                "updatedAt": "2024-03-01T10:00:00Z"
            }]
        }"#;
        let ds: Dataset = serde_json::from_str(raw).unwrap();
        assert_eq!(ds.accounts[0].display_name, "Ann");
        assert_eq!(ds.history[0].status, "completed");
        assert_eq!(ds.history[0].hours, None);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn negative_hours_are_rejected() {
        let raw = r#"{"history": [{
            "id": "h1", "volunteerEmail": "a@x.org", "eventId": "e1", "hours": -2,
            "participationDate": "2024-03-01T10:00:00Z",
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z"
        }]}"#;
        let ds: Dataset = serde_json::from_str(raw).unwrap();
        assert!(matches!(ds.validate(), Err(AppError::Import(_))));
    }
}
