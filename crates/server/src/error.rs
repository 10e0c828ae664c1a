use crate::dtos::common::ErrorResponse;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use models::validation::MissingFields;
use thiserror::Error;

/// Everything a handler can fail with, mapped onto a status code and `{ "error": ... }`
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed path id or request field
    #[error("{0}")]
    BadRequest(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    #[error(transparent)]
    MissingFields(#[from] MissingFields),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidBody(_) | Self::MissingFields(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(ServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Service(ServiceError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Database details stay in the log
        let error = if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("Request failed: {self}");
            "An unexpected error occurred".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Numeric ids arrive as path strings so a bad one answers with a JSON error
pub fn parse_id(raw: &str, message: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(message.to_string()))
}
