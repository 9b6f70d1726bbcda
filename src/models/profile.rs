use serde::{Deserialize, Serialize};

/// Volunteer profile. Only the skill list matters to reporting; an account
/// without a profile is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
}
