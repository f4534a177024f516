//! Request-level error handling.
//!
//! Storage failures surface as opaque 500s; form-shape rejections carry
//! their reason back as a 422. A missing id on complete/delete is not an
//! error; those paths no-op and redirect.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::DbError;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Db(#[from] DbError),

    #[error("invalid form field: {0}")]
    Invalid(String),

    #[error("state lock poisoned")]
    LockPoisoned,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Db(e) => {
                log::error!("storage error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
            AppError::LockPoisoned => {
                log::error!("state lock poisoned");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
            AppError::Invalid(reason) => {
                (StatusCode::UNPROCESSABLE_ENTITY, reason).into_response()
            }
        }
    }
}
