use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::error::DomainError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, heading, detail) = match self {
            AppError::Domain(err) => match &err {
                DomainError::NotFound(_) => {
                    (StatusCode::NOT_FOUND, "404 Not Found", err.to_string())
                }
                DomainError::ConstraintViolation(_) => {
                    (StatusCode::CONFLICT, "409 Conflict", err.to_string())
                }
                DomainError::Validation { .. } => {
                    (StatusCode::BAD_REQUEST, "400 Bad Request", err.to_string())
                }
                DomainError::Unexpected(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "500 Internal Server Error",
                    "internal error".to_string(),
                ),
            },
            AppError::Validation(err) => {
                (StatusCode::BAD_REQUEST, "400 Bad Request", err.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "400 Bad Request", msg),
            AppError::Template(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "500 Internal Server Error",
                "internal error".to_string(),
            ),
        };

        (status, Html(error_page(heading, &detail))).into_response()
    }
}

fn error_page(heading: &str, detail: &str) -> String {
    let detail = tera::escape_html(detail);
    format!(
        "<!doctype html>\n<html>\n<head><title>{heading}</title></head>\n\
         <body>\n<h1>{heading}</h1>\n<p>{detail}</p>\n\
         <p><a href=\"/\">Back to Blogly</a></p>\n</body>\n</html>\n"
    )
}
