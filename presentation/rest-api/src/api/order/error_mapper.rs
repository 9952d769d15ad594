use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, store_failure};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match &self {
            OrderError::EmptyCart => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", message),
            ),
            OrderError::InsufficientStock { .. } => (
                StatusCode::CONFLICT,
                ErrorResponse::new("Conflict", message),
            ),
            OrderError::AddressNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", message),
            ),
            OrderError::PlacementFailed(e) | OrderError::Repository(e) => {
                store_failure(e, &message)
            }
        }
    }
}
