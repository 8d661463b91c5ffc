use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const ACTION_ITEM_STATUSES: [&str; 4] = ["Pending", "In Progress", "Completed", "Cancelled"];

/// One entry in an action item's append-only remark log.
///
/// Entries are never edited or removed individually; the full history is
/// preserved in order and returned with every item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemarkEntry {
    pub text: String,
    pub by: String,
    pub remark_date: String,
}

/// A persisted action item. `remark` is always a list, never null.
#[derive(Debug, Clone, Serialize)]
pub struct ActionItem {
    pub id: i64,
    pub mom_id: i64,
    pub project: String,
    pub action_item: String,
    pub assigned_to: String,
    pub re_assigned_to: Option<String>,
    pub due_date: String,
    pub status: String,
    pub remark: Vec<RemarkEntry>,
    pub updated_at: String,
    pub meeting_date: Option<String>,
}

/// Fields accepted when creating an action item. `project` and
/// `meeting_date` are denormalized copies of the owning meeting's values,
/// kept on the item so it survives reassignment and meeting edits.
#[derive(Debug, Deserialize)]
pub struct NewActionItem {
    pub mom_id: i64,
    pub project: String,
    pub action_item: String,
    pub assigned_to: String,
    pub re_assigned_to: Option<String>,
    pub due_date: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub remark: Vec<RemarkEntry>,
    pub meeting_date: Option<String>,
}

fn default_status() -> String {
    "Pending".to_string()
}

/// Partial update. `remark` entries are appended to the stored log rather
/// than substituted for it; every other field overwrites.
#[derive(Debug, Default, Deserialize)]
pub struct ActionItemUpdate {
    pub project: Option<String>,
    pub action_item: Option<String>,
    pub assigned_to: Option<String>,
    pub re_assigned_to: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub remark: Option<Vec<RemarkEntry>>,
    pub meeting_date: Option<String>,
}

/// Optional filters for the action-item list. `remark` is a substring match
/// over the stored log; the rest are exact.
#[derive(Debug, Default)]
pub struct ActionItemFilter {
    pub mom_id: Option<i64>,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
    pub updated_at: Option<String>,
    pub remark: Option<String>,
    pub re_assigned_to: Option<String>,
}

/// An action item enriched with its remark breakdown, for the
/// reassignment-scoped view.
#[derive(Debug, Clone, Serialize)]
pub struct ReassignedActionItem {
    #[serde(flatten)]
    pub item: ActionItem,
    pub remark_count: usize,
    pub latest_remark: Option<RemarkEntry>,
    pub remarks_by_user: BTreeMap<String, Vec<RemarkEntry>>,
}
