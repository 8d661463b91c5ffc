use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::cascade;

/// DELETE /mom/{id}/complete — delete a meeting and all of its children,
/// returning the deletion summary with its verification block.
pub async fn delete_complete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut conn = pool.get()?;
    let summary = cascade::delete_complete(&mut conn, id)?
        .ok_or_else(|| ApiError::NotFound(format!("Meeting {} not found", id)))?;
    Ok(HttpResponse::Ok().json(summary))
}
