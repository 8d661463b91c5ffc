//! Shared request/response types for the JSON API.

use serde::Serialize;

use crate::errors::ApiError;
use crate::models::action_item::ActionItem;
use crate::models::decision::Decision;
use crate::models::information::Information;
use crate::models::meeting::Mom;

/// Generic paginated response wrapper for list endpoints.
#[derive(Serialize, Debug, Clone)]
pub struct PaginatedResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Assemble the envelope: `page` derives from the skip/limit pair and
    /// `total_pages` rounds up (0 when nothing matched).
    pub fn new(items: Vec<T>, total: i64, skip: i64, limit: i64) -> Self {
        PaginatedResponse {
            items,
            total,
            page: skip / limit + 1,
            per_page: limit,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A meeting together with all of its child records.
#[derive(Serialize, Debug)]
pub struct MomComplete {
    #[serde(flatten)]
    pub mom: Mom,
    pub information: Vec<Information>,
    pub decisions: Vec<Decision>,
    pub action_items: Vec<ActionItem>,
}

/// Overdue + due-soon reporting view, no independent state.
#[derive(Serialize, Debug)]
pub struct ActionItemSummary {
    pub overdue_count: usize,
    pub due_soon_count: usize,
    pub overdue_items: Vec<ActionItem>,
    pub due_soon_items: Vec<ActionItem>,
}

pub fn default_limit() -> i64 {
    10
}

pub fn default_sort() -> String {
    "due_date".to_string()
}

pub fn default_order() -> String {
    "asc".to_string()
}

/// Reject out-of-range pagination before any store access.
pub fn validate_page(skip: i64, limit: i64) -> Result<(), ApiError> {
    if !(1..=100).contains(&limit) {
        return Err(ApiError::Validation(
            "limit must be between 1 and 100".to_string(),
        ));
    }
    if skip < 0 {
        return Err(ApiError::Validation("skip must be non-negative".to_string()));
    }
    Ok(())
}
