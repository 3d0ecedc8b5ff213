use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Machine-readable code for a single validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    MissingField,
    Format,
    PastDate,
    TimeOrder,
    InvalidDuration,
    UnknownType,
    UnknownStatus,
    NotFound,
    NotBookable,
    OutOfWorkingHours,
    Conflict,
    TrainerMismatch,
}

/// One problem found while validating a booking request. Requests are checked
/// exhaustively and every issue is reported together, so a caller can show
/// all problems at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub code: IssueCode,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &str, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Validation failed with {} issue(s)", .0.len())]
    ValidationFailed(Vec<ValidationIssue>),
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::ValidationFailed(issues) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "errors": issues }),
            ),
            AppError::InvalidTransition(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::Internal => {
                error!("internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
