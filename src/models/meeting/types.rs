use serde::{Deserialize, Serialize};

pub const MEETING_TYPES: [&str; 3] = ["Online", "Offline", "Hybrid"];
pub const MOM_STATUSES: [&str; 3] = ["Open", "Closed", "Pending"];

/// A persisted meeting record.
#[derive(Debug, Clone, Serialize)]
pub struct Mom {
    pub id: i64,
    pub meeting_date: String,
    pub start_time: String,
    pub end_time: String,
    pub present_attendees: Vec<String>,
    pub absent_attendees: Vec<String>,
    pub external_attendees: Vec<String>,
    pub project_name: String,
    pub meeting_type: String,
    pub location: String,
    pub status: String,
    pub created_date: String,
    pub created_by: i64,
}

/// Fields accepted when creating a meeting.
#[derive(Debug, Deserialize)]
pub struct NewMom {
    pub meeting_date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub present_attendees: Vec<String>,
    #[serde(default)]
    pub absent_attendees: Vec<String>,
    #[serde(default)]
    pub external_attendees: Vec<String>,
    pub project_name: String,
    #[serde(default = "default_meeting_type")]
    pub meeting_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub created_by: i64,
}

fn default_meeting_type() -> String {
    "Online".to_string()
}

fn default_status() -> String {
    "Open".to_string()
}

/// Partial update. Only provided fields are applied to the stored row.
#[derive(Debug, Default, Deserialize)]
pub struct MomUpdate {
    pub meeting_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub present_attendees: Option<Vec<String>>,
    pub absent_attendees: Option<Vec<String>>,
    pub external_attendees: Option<Vec<String>>,
    pub project_name: Option<String>,
    pub meeting_type: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}

/// Optional filters for the meeting list. `project` is a case-insensitive
/// substring match; the rest are exact.
#[derive(Debug, Default)]
pub struct MomFilter {
    pub project: Option<String>,
    pub status: Option<String>,
    pub meeting_type: Option<String>,
    pub meeting_date: Option<String>,
    pub created_by: Option<i64>,
}
