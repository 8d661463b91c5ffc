use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::action_item;

#[derive(Debug, Deserialize)]
pub struct AddRemarkRequest {
    pub text: String,
    pub username: String,
}

/// POST /mom/action-items/{id}/remark — append one remark to the item's log.
pub async fn add_remark(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<AddRemarkRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let mut errors = Vec::new();
    if body.text.trim().is_empty() {
        errors.push("text is required".to_string());
    }
    if body.username.trim().is_empty() {
        errors.push("username is required".to_string());
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }

    let mut conn = pool.get()?;
    let updated = action_item::add_remark(&mut conn, id, &body.text, &body.username)?
        .ok_or_else(|| ApiError::NotFound(format!("Action item {} not found", id)))?;
    Ok(HttpResponse::Ok().json(updated))
}
