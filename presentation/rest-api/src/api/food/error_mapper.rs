use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::food::errors::FoodError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, store_failure};

impl IntoErrorResponse for FoodError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match &self {
            FoodError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", message),
            ),
            FoodError::NameEmpty
            | FoodError::RateNotPositive
            | FoodError::RateOutOfRange
            | FoodError::QuantityNegative
            | FoodError::NoChanges => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", message),
            ),
            FoodError::Repository(e) => store_failure(e, &message),
        }
    }
}
