use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{self, ActionItemSummary, PaginatedResponse};
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::action_item;

const ASSIGNED_SORTS: [&str; 3] = ["due_date", "status", "action_item"];
const REASSIGNED_SORTS: [&str; 4] = ["due_date", "status", "updated_at", "meeting_date"];

fn validate_sort(sort_by: &str, order: &str, allowed: &[&str]) -> Result<(), ApiError> {
    if !allowed.contains(&sort_by) {
        return Err(ApiError::Validation(format!(
            "sort_by must be one of {}",
            allowed.join(", ")
        )));
    }
    if order != "asc" && order != "desc" {
        return Err(ApiError::Validation(
            "order must be asc or desc".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    #[serde(default = "api::default_sort")]
    pub sort_by: String,
    #[serde(default = "api::default_order")]
    pub order: String,
}

/// GET /mom/action-items/user/{username} — items originally assigned to a
/// user, sortable by due_date/status/action_item.
pub async fn by_assigned(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    query: web::Query<SortQuery>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    validate_sort(&query.sort_by, &query.order, &ASSIGNED_SORTS)?;

    let conn = pool.get()?;
    let items = action_item::find_by_assigned(&conn, &username, &query.sort_by, &query.order)?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /mom/action-items/overdue/all — items past their due date.
pub async fn overdue(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let conn = pool.get()?;
    let items = action_item::find_overdue(&conn)?;
    Ok(HttpResponse::Ok().json(items))
}

#[derive(Debug, Deserialize)]
pub struct DueSoonQuery {
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    7
}

/// GET /mom/action-items/due-soon/all?days= — items due within the window.
pub async fn due_soon(
    pool: web::Data<DbPool>,
    query: web::Query<DueSoonQuery>,
) -> Result<HttpResponse, ApiError> {
    if !(1..=30).contains(&query.days) {
        return Err(ApiError::Validation(
            "days must be between 1 and 30".to_string(),
        ));
    }

    let conn = pool.get()?;
    let items = action_item::find_due_soon(&conn, query.days)?;
    Ok(HttpResponse::Ok().json(items))
}

#[derive(Debug, Deserialize)]
pub struct ReassignedQuery {
    #[serde(default = "api::default_sort")]
    pub sort_by: String,
    #[serde(default = "api::default_order")]
    pub order: String,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "api::default_limit")]
    pub limit: i64,
}

/// GET /mom/action-items/reassigned/{username} — items currently reassigned
/// to a user, each with its remark breakdown.
pub async fn by_reassigned(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    query: web::Query<ReassignedQuery>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    validate_sort(&query.sort_by, &query.order, &REASSIGNED_SORTS)?;
    api::validate_page(query.skip, query.limit)?;

    let conn = pool.get()?;
    let (items, total) = action_item::find_by_reassigned(
        &conn,
        &username,
        &query.sort_by,
        &query.order,
        query.skip,
        query.limit,
    )?;
    Ok(HttpResponse::Ok().json(PaginatedResponse::new(items, total, query.skip, query.limit)))
}

/// GET /mom/action-items/stats/summary — overdue and due-soon (7 days)
/// counts and items in one reporting view.
pub async fn summary(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let conn = pool.get()?;
    let overdue_items = action_item::find_overdue(&conn)?;
    let due_soon_items = action_item::find_due_soon(&conn, 7)?;

    Ok(HttpResponse::Ok().json(ActionItemSummary {
        overdue_count: overdue_items.len(),
        due_soon_count: due_soon_items.len(),
        overdue_items,
        due_soon_items,
    }))
}
