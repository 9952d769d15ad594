use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, store_failure};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match &self {
            CartError::QuantityNotPositive
            | CartError::AmountNotPositive
            | CartError::AmountOutOfRange => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", message),
            ),
            CartError::RestaurantMismatch { .. } => (
                StatusCode::CONFLICT,
                ErrorResponse::new("Conflict", message),
            ),
            CartError::FoodNotListed => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", message),
            ),
            CartError::Access(e) => store_failure(e, &message),
        }
    }
}
