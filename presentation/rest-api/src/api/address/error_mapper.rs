use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::address::errors::AddressError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, store_failure};

impl IntoErrorResponse for AddressError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            AddressError::FieldEmpty { field } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", format!("{}.{}", self, field)),
            ),
            AddressError::InvalidPincode => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", self.to_string()),
            ),
            AddressError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", self.to_string()),
            ),
            AddressError::Repository(e) => store_failure(e, &self.to_string()),
        }
    }
}
