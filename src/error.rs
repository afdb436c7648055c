use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced by the relay. Every variant renders as `{ "error": "..." }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API key is not set in environment.")]
    MissingApiKey,
    #[error("{0}")]
    Validation(String),
    #[error("{provider} API error: {reason}")]
    Upstream { provider: String, status: u16, reason: String },
    #[error("{0}")]
    Internal(String),
    /// Framework-level rejections (unknown route, wrong method, oversized body).
    #[error("{message}")]
    Http { status: u16, message: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn not_found() -> Self {
        AppError::Http { status: 404, message: "Not found.".to_string() }
    }

    pub fn method_not_allowed() -> Self {
        AppError::Http { status: 405, message: "Method not allowed.".to_string() }
    }

    pub fn payload_too_large() -> Self {
        AppError::Http { status: 413, message: "Payload too large.".to_string() }
    }

    /// Wraps an actix error that did not originate from this crate, keeping its status.
    pub fn from_framework(err: &actix_web::Error) -> Self {
        let status = err.as_response_error().status_code();
        match status {
            StatusCode::NOT_FOUND => AppError::not_found(),
            StatusCode::METHOD_NOT_ALLOWED => AppError::method_not_allowed(),
            _ => AppError::Http { status: status.as_u16(), message: err.to_string() },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingApiKey | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } | AppError::Http { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or_else(|_| {
                    log::error!("Invalid status code {}, falling back to 500", status);
                    StatusCode::INTERNAL_SERVER_ERROR
                })
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(ErrorResponse::from(self))
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        ErrorResponse { error: error.to_string() }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
