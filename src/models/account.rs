use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Volunteer,
    Administrator,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Volunteer => "volunteer",
            Role::Administrator => "administrator",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "volunteer" => Some(Role::Volunteer),
            "administrator" => Some(Role::Administrator),
            _ => None,
        }
    }
}

/// A login account. `email` is the natural key every other collection joins on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    pub role: Role,
}

impl Account {
    /// Name shown in reports: the display name, or the email when it is blank.
    pub fn report_name(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.email
        } else {
            &self.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_name_falls_back_to_email() {
        let acc = Account {
            email: "ann@example.org".into(),
            display_name: "  ".into(),
            role: Role::Volunteer,
        };
        assert_eq!(acc.report_name(), "ann@example.org");
    }

    #[test]
    fn role_db_strings() {
        assert_eq!(Role::from_db_str("volunteer"), Some(Role::Volunteer));
        assert_eq!(Role::from_db_str("admin"), None);
        assert_eq!(Role::Administrator.to_db_str(), "administrator");
    }
}
