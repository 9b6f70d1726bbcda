//! Fixed column contracts, one per export kind.

use super::ExportFormat;

/// Quoting applied to text fields by the tabular encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// Quote only fields that contain a delimiter, quote or line break.
    Necessary,
    /// Quote every non-numeric field.
    NonNumeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSet {
    pub titles: &'static [&'static str],
    pub quoting: Quoting,
}

pub mod titles {
    pub const EVENT_NAME: &str = "Event Name";
    pub const DATE: &str = "Date";
    pub const LOCATION: &str = "Location";
    pub const DESCRIPTION: &str = "Description";
    pub const SKILLS_REQUIRED: &str = "Skills Required";
    pub const URGENCY: &str = "Urgency";
    pub const CREATED_AT: &str = "Created At";

    pub const ID: &str = "ID";
    pub const USER_ID: &str = "User ID";
    pub const EVENT_ID: &str = "Event ID";
    pub const ROLE: &str = "Role";
    pub const HOURS: &str = "Hours";
    pub const STATUS: &str = "Status";
    pub const PARTICIPATION_DATE: &str = "Participation Date";
    pub const UPDATED_AT: &str = "Updated At";

    pub const VOLUNTEER_NAME: &str = "Volunteer Name";
    pub const VOLUNTEER_EMAIL: &str = "Volunteer Email";
    pub const SKILLS: &str = "Skills";
    pub const TOTAL_EVENTS: &str = "Total Events";
    pub const TOTAL_HOURS: &str = "Total Hours";
    pub const EVENT_DATE: &str = "Event Date";
}

use titles::*;

pub const EVENT_COLUMNS: ColumnSet = ColumnSet {
    titles: &[
        EVENT_NAME,
        DATE,
        LOCATION,
        DESCRIPTION,
        SKILLS_REQUIRED,
        URGENCY,
        CREATED_AT,
    ],
    quoting: Quoting::Necessary,
};

pub const HISTORY_COLUMNS: ColumnSet = ColumnSet {
    titles: &[
        ID,
        USER_ID,
        EVENT_ID,
        ROLE,
        HOURS,
        STATUS,
        PARTICIPATION_DATE,
        CREATED_AT,
        UPDATED_AT,
    ],
    quoting: Quoting::NonNumeric,
};

pub const REPORT_COLUMNS: ColumnSet = ColumnSet {
    titles: &[
        VOLUNTEER_NAME,
        VOLUNTEER_EMAIL,
        SKILLS,
        TOTAL_EVENTS,
        TOTAL_HOURS,
        EVENT_NAME,
        EVENT_DATE,
        ROLE,
        HOURS,
        STATUS,
        PARTICIPATION_DATE,
    ],
    quoting: Quoting::NonNumeric,
};

/// Which dataset an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Events,
    History,
    Report,
}

impl ExportKind {
    pub fn columns(&self) -> &'static ColumnSet {
        match self {
            ExportKind::Events => &EVENT_COLUMNS,
            ExportKind::History => &HISTORY_COLUMNS,
            ExportKind::Report => &REPORT_COLUMNS,
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            ExportKind::Events => "events",
            ExportKind::History => "volunteer-history",
            ExportKind::Report => "volunteer-history-report",
        }
    }

    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.file_stem(), format.as_str())
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            ExportKind::Events => "Volunteer Events Report",
            ExportKind::History => "Volunteer History Export",
            ExportKind::Report => "Volunteer Participation History Report",
        }
    }
}
