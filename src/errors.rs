use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::api::ApiErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    Db(rusqlite::Error),
    Pool(r2d2::Error),
    Validation(String),
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Db(e) => write!(f, "Database error: {e}"),
            ApiError::Pool(e) => write!(f, "Pool error: {e}"),
            ApiError::Validation(e) => write!(f, "Validation failed: {e}"),
            ApiError::NotFound(e) => write!(f, "Not found: {e}"),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound(msg) => HttpResponse::NotFound().json(ApiErrorResponse {
                error: msg.clone(),
                details: None,
            }),
            ApiError::Validation(msg) => HttpResponse::BadRequest().json(ApiErrorResponse {
                error: "Validation failed".to_string(),
                details: Some(msg.clone()),
            }),
            // Storage details stay in the server log, not the response body.
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(ApiErrorResponse {
                    error: "Internal server error".to_string(),
                    details: None,
                })
            }
        }
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> Self {
        ApiError::Db(e)
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(e: r2d2::Error) -> Self {
        ApiError::Pool(e)
    }
}
