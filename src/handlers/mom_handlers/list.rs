use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{self, PaginatedResponse};
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::meeting::{self, MomFilter};

#[derive(Debug, Deserialize)]
pub struct MomListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "api::default_limit")]
    pub limit: i64,
    pub project: Option<String>,
    pub status: Option<String>,
    pub meeting_type: Option<String>,
    pub meeting_date: Option<String>,
    pub created_by: Option<i64>,
}

/// GET /mom — list meetings with optional filters, paginated.
pub async fn list(
    pool: web::Data<DbPool>,
    query: web::Query<MomListQuery>,
) -> Result<HttpResponse, ApiError> {
    let q = query.into_inner();
    api::validate_page(q.skip, q.limit)?;

    let filter = MomFilter {
        project: q.project,
        status: q.status,
        meeting_type: q.meeting_type,
        meeting_date: q.meeting_date,
        created_by: q.created_by,
    };

    let conn = pool.get()?;
    let (items, total) = meeting::find_paginated(&conn, &filter, q.skip, q.limit)?;
    Ok(HttpResponse::Ok().json(PaginatedResponse::new(items, total, q.skip, q.limit)))
}
