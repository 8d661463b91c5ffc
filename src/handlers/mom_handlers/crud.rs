use actix_web::{HttpResponse, web};

use crate::api::MomComplete;
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::meeting::{MEETING_TYPES, MOM_STATUSES, MomUpdate, NewMom};
use crate::models::{action_item, decision, information, meeting};

fn validate_meeting_type(meeting_type: &str, errors: &mut Vec<String>) {
    if !MEETING_TYPES.contains(&meeting_type) {
        errors.push(format!(
            "meeting_type must be one of {}",
            MEETING_TYPES.join(", ")
        ));
    }
}

fn validate_status(status: &str, errors: &mut Vec<String>) {
    if !MOM_STATUSES.contains(&status) {
        errors.push(format!("status must be one of {}", MOM_STATUSES.join(", ")));
    }
}

/// POST /mom — create a meeting.
pub async fn create(
    pool: web::Data<DbPool>,
    body: web::Json<NewMom>,
) -> Result<HttpResponse, ApiError> {
    let new = body.into_inner();

    let mut errors = Vec::new();
    if new.project_name.trim().is_empty() {
        errors.push("project_name is required".to_string());
    }
    if new.meeting_date.trim().is_empty() {
        errors.push("meeting_date is required".to_string());
    }
    validate_meeting_type(&new.meeting_type, &mut errors);
    validate_status(&new.status, &mut errors);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }

    let conn = pool.get()?;
    let id = meeting::create(&conn, &new)?;
    let created = meeting::find_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound(format!("Meeting {} not found", id)))?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /mom/{id} — fetch one meeting.
pub async fn get(pool: web::Data<DbPool>, path: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let conn = pool.get()?;
    let mom = meeting::find_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound(format!("Meeting {} not found", id)))?;
    Ok(HttpResponse::Ok().json(mom))
}

/// GET /mom/{id}/complete — the meeting with all of its child records.
pub async fn get_complete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let conn = pool.get()?;
    let mom = meeting::find_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound(format!("Meeting {} not found", id)))?;

    let response = MomComplete {
        information: information::find_all_for_mom(&conn, id)?,
        decisions: decision::find_all_for_mom(&conn, id)?,
        action_items: action_item::find_all_for_mom(&conn, id)?,
        mom,
    };
    Ok(HttpResponse::Ok().json(response))
}

/// PUT /mom/{id} — partial update; only provided fields are applied.
pub async fn update(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<MomUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let upd = body.into_inner();

    let mut errors = Vec::new();
    if let Some(t) = &upd.meeting_type {
        validate_meeting_type(t, &mut errors);
    }
    if let Some(s) = &upd.status {
        validate_status(s, &mut errors);
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }

    let conn = pool.get()?;
    let updated = meeting::update(&conn, id, &upd)?
        .ok_or_else(|| ApiError::NotFound(format!("Meeting {} not found", id)))?;
    Ok(HttpResponse::Ok().json(updated))
}

#[derive(Debug, serde::Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// PUT /mom/{id}/status — update just the status field.
pub async fn update_status(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<StatusBody>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let mut errors = Vec::new();
    validate_status(&body.status, &mut errors);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors.join("; ")));
    }

    let conn = pool.get()?;
    let updated = meeting::update_status(&conn, id, &body.status)?
        .ok_or_else(|| ApiError::NotFound(format!("Meeting {} not found", id)))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /mom/{id} — delete the meeting row only; children stay behind.
pub async fn delete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let conn = pool.get()?;
    if !meeting::delete(&conn, id)? {
        return Err(ApiError::NotFound(format!("Meeting {} not found", id)));
    }
    Ok(HttpResponse::NoContent().finish())
}
