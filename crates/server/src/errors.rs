use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

pub const DUPLICATE_EMAIL: &str = "A reservation with this email already exists.";
pub const NOT_FOUND: &str = "No reservation found for this email.";

/// Failure of a reservation endpoint, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{}", DUPLICATE_EMAIL)]
    Conflict,
    #[error("{}", NOT_FOUND)]
    NotFound,
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::BadRequest(msg),
            ServiceError::Conflict => ApiError::Conflict,
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match &self {
            ApiError::Internal(detail) => {
                error!(error = %detail, "reservation request failed");
                "Internal Server Error".to_string()
            }
            ApiError::BadRequest(detail) => {
                warn!(error = %detail, "rejected malformed reservation request");
                detail.clone()
            }
            ApiError::Conflict => DUPLICATE_EMAIL.to_string(),
            ApiError::NotFound => NOT_FOUND.to_string(),
        };
        (status, Json(ErrorBody::new(msg))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error("database unavailable: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
