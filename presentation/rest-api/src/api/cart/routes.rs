use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_food::{AddFoodToCartParams, AddFoodToCartUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_entry::{
    RemoveCartEntryParams, RemoveCartEntryUseCase,
};
use business::domain::cart::value_objects::RemovalOutcome;

use crate::api::cart::dto::{
    AddToCartRequest, CartEntryResponse, CartLineResponse, ClearCartResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::TrustedUser;
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_food_use_case: Arc<dyn AddFoodToCartUseCase>,
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    remove_entry_use_case: Arc<dyn RemoveCartEntryUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_food_use_case: Arc<dyn AddFoodToCartUseCase>,
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        remove_entry_use_case: Arc<dyn RemoveCartEntryUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            add_food_use_case,
            get_cart_use_case,
            remove_entry_use_case,
            clear_use_case,
        }
    }
}

/// Cart management API
///
/// A cart only ever holds food from one restaurant.
#[OpenApi]
impl CartApi {
    /// Add food to the cart
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Cart")]
    async fn add_food(&self, auth: TrustedUser, body: Json<AddToCartRequest>) -> AddToCartResponse {
        let params = AddFoodToCartParams {
            user_id: auth.0,
            restaurant_id: body.0.restaurant_id,
            food_id: body.0.food_id,
            quantity: body.0.quantity,
            amount: body.0.amount,
        };

        match self.add_food_use_case.execute(params).await {
            Ok(entry) => AddToCartResponse::Created(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToCartResponse::BadRequest(json),
                    404 => AddToCartResponse::NotFound(json),
                    409 => AddToCartResponse::Conflict(json),
                    503 => AddToCartResponse::ServiceUnavailable(json),
                    _ => AddToCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the active cart
    ///
    /// Lines are returned oldest first.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: TrustedUser) -> GetCartResponse {
        match self
            .get_cart_use_case
            .execute(GetCartParams { user_id: auth.0 })
            .await
        {
            Ok(lines) => {
                let responses: Vec<CartLineResponse> =
                    lines.into_iter().map(|l| l.into()).collect();
                GetCartResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetCartResponse::ServiceUnavailable(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove one cart entry
    #[oai(path = "/cart/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_entry(&self, auth: TrustedUser, id: Path<Uuid>) -> RemoveCartEntryResponse {
        let params = RemoveCartEntryParams {
            id: id.0,
            user_id: auth.0,
        };

        match self.remove_entry_use_case.execute(params).await {
            Ok(RemovalOutcome::Removed) => RemoveCartEntryResponse::NoContent,
            Ok(RemovalOutcome::NotFound) => RemoveCartEntryResponse::NotFound(
                ErrorResponse::new("NotFound", "cart.entry_not_found"),
            ),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => RemoveCartEntryResponse::ServiceUnavailable(json),
                    _ => RemoveCartEntryResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear the cart
    ///
    /// Removes every active entry. Settled entries are order history and stay.
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self, auth: TrustedUser) -> ClearCartResponseKind {
        match self
            .clear_use_case
            .execute(ClearCartParams { user_id: auth.0 })
            .await
        {
            Ok(count) => ClearCartResponseKind::Ok(Json(ClearCartResponse { count })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => ClearCartResponseKind::ServiceUnavailable(json),
                    _ => ClearCartResponseKind::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToCartResponse {
    #[oai(status = 201)]
    Created(Json<CartEntryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartLineResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartEntryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponseKind {
    #[oai(status = 200)]
    Ok(Json<ClearCartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::cart::errors::CartError;
    use business::domain::cart::model::{CartEntry, CartLine};
    use mockall::mock;
    use poem::Endpoint;
    use poem::http::StatusCode;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    mock! {
        pub AddFood {}

        #[async_trait]
        impl AddFoodToCartUseCase for AddFood {
            async fn execute(&self, params: AddFoodToCartParams) -> Result<CartEntry, CartError>;
        }
    }

    mock! {
        pub GetCart {}

        #[async_trait]
        impl GetCartUseCase for GetCart {
            async fn execute(&self, params: GetCartParams) -> Result<Vec<CartLine>, CartError>;
        }
    }

    mock! {
        pub RemoveEntry {}

        #[async_trait]
        impl RemoveCartEntryUseCase for RemoveEntry {
            async fn execute(&self, params: RemoveCartEntryParams) -> Result<RemovalOutcome, CartError>;
        }
    }

    mock! {
        pub Clear {}

        #[async_trait]
        impl ClearCartUseCase for Clear {
            async fn execute(&self, params: ClearCartParams) -> Result<u64, CartError>;
        }
    }

    fn client(add_food: MockAddFood, remove_entry: MockRemoveEntry) -> TestClient<impl Endpoint> {
        let api = CartApi::new(
            Arc::new(add_food),
            Arc::new(MockGetCart::new()),
            Arc::new(remove_entry),
            Arc::new(MockClear::new()),
        );
        TestClient::new(Route::new().nest("/", OpenApiService::new(api, "test", "1.0")))
    }

    fn add_body() -> serde_json::Value {
        json!({
            "restaurant_id": Uuid::new_v4(),
            "food_id": Uuid::new_v4(),
            "quantity": 1,
            "amount": 20.0,
        })
    }

    #[tokio::test]
    async fn should_require_user_header() {
        let mut add_food = MockAddFood::new();
        add_food.expect_execute().never();
        let cli = client(add_food, MockRemoveEntry::new());

        let resp = cli.post("/cart").body_json(&add_body()).send().await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_answer_conflict_on_restaurant_mismatch() {
        let mut add_food = MockAddFood::new();
        add_food
            .expect_execute()
            .withf(|params| params.user_id.as_str() == "user-1")
            .returning(|_| {
                Err(CartError::RestaurantMismatch {
                    active_restaurant_id: Uuid::new_v4(),
                })
            });
        let cli = client(add_food, MockRemoveEntry::new());

        let resp = cli
            .post("/cart")
            .header("X-User-Id", "user-1")
            .body_json(&add_body())
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_answer_not_found_when_entry_already_gone() {
        let mut remove_entry = MockRemoveEntry::new();
        remove_entry
            .expect_execute()
            .returning(|_| Ok(RemovalOutcome::NotFound));
        let cli = client(MockAddFood::new(), remove_entry);

        let resp = cli
            .delete(format!("/cart/{}", Uuid::new_v4()))
            .header("X-User-Id", "user-1")
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
