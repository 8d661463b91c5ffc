use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{self, PaginatedResponse};
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::action_item::{
    self, ACTION_ITEM_STATUSES, ActionItemFilter, ActionItemUpdate, NewActionItem,
};
use crate::models::meeting;

fn validate_status(status: &str, errors: &mut Vec<String>) {
    if !ACTION_ITEM_STATUSES.contains(&status) {
        errors.push(format!(
            "status must be one of {}",
            ACTION_ITEM_STATUSES.join(", ")
        ));
    }
}

/// POST /mom/action-items — create an action item.
pub async fn create(
    pool: web::Data<DbPool>,
    body: web::Json<NewActionItem>,
) -> Result<HttpResponse, ApiError> {
    let new = body.into_inner();

    let mut errors = Vec::new();
    if new.action_item.trim().is_empty() {
        errors.push("action_item is required".to_string());
    }
    if new.assigned_to.trim().is_empty() {
        errors.push("assigned_to is required".to_string());
    }
    if new.due_date.trim().is_empty() {
        errors.push("due_date is required".to_string());
    }
    validate_status(&new.status, &mut errors);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }

    let conn = pool.get()?;
    if meeting::find_by_id(&conn, new.mom_id)?.is_none() {
        return Err(ApiError::NotFound(format!(
            "Meeting {} not found",
            new.mom_id
        )));
    }

    let id = action_item::create(&conn, &new)?;
    let created = action_item::find_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound(format!("Action item {} not found", id)))?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /mom/action-items/{id} — fetch one action item.
pub async fn get(pool: web::Data<DbPool>, path: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let conn = pool.get()?;
    let item = action_item::find_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound(format!("Action item {} not found", id)))?;
    Ok(HttpResponse::Ok().json(item))
}

#[derive(Debug, Deserialize)]
pub struct ActionItemListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "api::default_limit")]
    pub limit: i64,
    pub mom_id: Option<i64>,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
    pub updated_at: Option<String>,
    pub remark: Option<String>,
    pub re_assigned_to: Option<String>,
}

/// GET /mom/action-items — list action items with optional filters.
pub async fn list(
    pool: web::Data<DbPool>,
    query: web::Query<ActionItemListQuery>,
) -> Result<HttpResponse, ApiError> {
    let q = query.into_inner();
    api::validate_page(q.skip, q.limit)?;

    let filter = ActionItemFilter {
        mom_id: q.mom_id,
        assigned_to: q.assigned_to,
        due_date: q.due_date,
        updated_at: q.updated_at,
        remark: q.remark,
        re_assigned_to: q.re_assigned_to,
    };

    let conn = pool.get()?;
    let (items, total) = action_item::find_paginated(&conn, &filter, q.skip, q.limit)?;
    Ok(HttpResponse::Ok().json(PaginatedResponse::new(items, total, q.skip, q.limit)))
}

/// PUT /mom/action-items/{id} — partial update. Supplied remark entries are
/// appended to the stored log; every other field overwrites.
pub async fn update(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<ActionItemUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let upd = body.into_inner();

    let mut errors = Vec::new();
    if let Some(s) = &upd.status {
        validate_status(s, &mut errors);
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }

    let conn = pool.get()?;
    let updated = action_item::update(&conn, id, &upd)?
        .ok_or_else(|| ApiError::NotFound(format!("Action item {} not found", id)))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /mom/action-items/{id} — delete one action item.
pub async fn delete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let conn = pool.get()?;
    if !action_item::delete(&conn, id)? {
        return Err(ApiError::NotFound(format!("Action item {} not found", id)));
    }
    Ok(HttpResponse::NoContent().finish())
}
