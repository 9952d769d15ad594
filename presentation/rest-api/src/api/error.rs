use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::RepositoryError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.into(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Retryable store failures surface as 503 so clients know to try again.
pub fn store_failure(err: &RepositoryError, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    if err.is_retryable() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorResponse::new("ServiceUnavailable", message),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("InternalError", message),
        )
    }
}
