use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{self, PaginatedResponse};
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::{information, meeting};

/// POST /mom/information — add an information entry to a meeting.
pub async fn create(
    pool: web::Data<DbPool>,
    body: web::Json<information::NewInformation>,
) -> Result<HttpResponse, ApiError> {
    let new = body.into_inner();
    if new.information.trim().is_empty() {
        return Err(ApiError::Validation("information is required".to_string()));
    }

    let conn = pool.get()?;
    if meeting::find_by_id(&conn, new.mom_id)?.is_none() {
        return Err(ApiError::NotFound(format!(
            "Meeting {} not found",
            new.mom_id
        )));
    }

    let id = information::create(&conn, &new)?;
    let created = information::find_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound(format!("Information {} not found", id)))?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /mom/information/{id} — fetch one entry.
pub async fn get(pool: web::Data<DbPool>, path: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let conn = pool.get()?;
    let row = information::find_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound(format!("Information {} not found", id)))?;
    Ok(HttpResponse::Ok().json(row))
}

#[derive(Debug, Deserialize)]
pub struct InformationListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "api::default_limit")]
    pub limit: i64,
    pub mom_id: Option<i64>,
}

/// GET /mom/information — list entries, optionally scoped to one meeting.
pub async fn list(
    pool: web::Data<DbPool>,
    query: web::Query<InformationListQuery>,
) -> Result<HttpResponse, ApiError> {
    let q = query.into_inner();
    api::validate_page(q.skip, q.limit)?;

    let conn = pool.get()?;
    let (items, total) = information::find_paginated(&conn, q.mom_id, q.skip, q.limit)?;
    Ok(HttpResponse::Ok().json(PaginatedResponse::new(items, total, q.skip, q.limit)))
}

#[derive(Debug, Deserialize)]
pub struct InformationBody {
    pub information: String,
}

/// PUT /mom/information/{id} — update the text of one entry.
pub async fn update(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<InformationBody>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if body.information.trim().is_empty() {
        return Err(ApiError::Validation("information is required".to_string()));
    }

    let conn = pool.get()?;
    let updated = information::update(&conn, id, &body.information)?
        .ok_or_else(|| ApiError::NotFound(format!("Information {} not found", id)))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /mom/information/{id} — delete one entry.
pub async fn delete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let conn = pool.get()?;
    if !information::delete(&conn, id)? {
        return Err(ApiError::NotFound(format!("Information {} not found", id)));
    }
    Ok(HttpResponse::NoContent().finish())
}
