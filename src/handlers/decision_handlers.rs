use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{self, PaginatedResponse};
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::{decision, meeting};

/// POST /mom/decision — record a decision for a meeting.
pub async fn create(
    pool: web::Data<DbPool>,
    body: web::Json<decision::NewDecision>,
) -> Result<HttpResponse, ApiError> {
    let new = body.into_inner();
    if new.decision.trim().is_empty() {
        return Err(ApiError::Validation("decision is required".to_string()));
    }

    let conn = pool.get()?;
    if meeting::find_by_id(&conn, new.mom_id)?.is_none() {
        return Err(ApiError::NotFound(format!(
            "Meeting {} not found",
            new.mom_id
        )));
    }

    let id = decision::create(&conn, &new)?;
    let created = decision::find_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound(format!("Decision {} not found", id)))?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /mom/decision/{id} — fetch one decision.
pub async fn get(pool: web::Data<DbPool>, path: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let conn = pool.get()?;
    let row = decision::find_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound(format!("Decision {} not found", id)))?;
    Ok(HttpResponse::Ok().json(row))
}

#[derive(Debug, Deserialize)]
pub struct DecisionListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "api::default_limit")]
    pub limit: i64,
    pub mom_id: Option<i64>,
}

/// GET /mom/decision — list decisions, optionally scoped to one meeting.
pub async fn list(
    pool: web::Data<DbPool>,
    query: web::Query<DecisionListQuery>,
) -> Result<HttpResponse, ApiError> {
    let q = query.into_inner();
    api::validate_page(q.skip, q.limit)?;

    let conn = pool.get()?;
    let (items, total) = decision::find_paginated(&conn, q.mom_id, q.skip, q.limit)?;
    Ok(HttpResponse::Ok().json(PaginatedResponse::new(items, total, q.skip, q.limit)))
}

#[derive(Debug, Deserialize)]
pub struct DecisionBody {
    pub decision: String,
}

/// PUT /mom/decision/{id} — update the text of one decision.
pub async fn update(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<DecisionBody>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if body.decision.trim().is_empty() {
        return Err(ApiError::Validation("decision is required".to_string()));
    }

    let conn = pool.get()?;
    let updated = decision::update(&conn, id, &body.decision)?
        .ok_or_else(|| ApiError::NotFound(format!("Decision {} not found", id)))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /mom/decision/{id} — delete one decision.
pub async fn delete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let conn = pool.get()?;
    if !decision::delete(&conn, id)? {
        return Err(ApiError::NotFound(format!("Decision {} not found", id)));
    }
    Ok(HttpResponse::NoContent().finish())
}
