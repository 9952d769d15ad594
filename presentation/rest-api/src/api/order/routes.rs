use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::order::use_cases::get_all::{GetOrdersParams, GetOrdersUseCase};
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderLineResponse, PlaceOrderRequest, PlacedOrderResponse};
use crate::api::security::TrustedUser;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_use_case: Arc<dyn PlaceOrderUseCase>,
    get_all_use_case: Arc<dyn GetOrdersUseCase>,
}

impl OrderApi {
    pub fn new(
        place_use_case: Arc<dyn PlaceOrderUseCase>,
        get_all_use_case: Arc<dyn GetOrdersUseCase>,
    ) -> Self {
        Self {
            place_use_case,
            get_all_use_case,
        }
    }
}

#[OpenApi]
impl OrderApi {
    /// Place an order
    ///
    /// Turns every active cart line into an order in one transaction and
    /// decrements stock. Nothing is written when the call fails.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn place(&self, auth: TrustedUser, body: Json<PlaceOrderRequest>) -> PlaceOrderResponse {
        let params = PlaceOrderParams {
            user_id: auth.0,
            address_id: body.0.address_id,
        };

        match self.place_use_case.execute(params).await {
            Ok(placed) => PlaceOrderResponse::Created(Json(placed.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    404 => PlaceOrderResponse::NotFound(json),
                    409 => PlaceOrderResponse::Conflict(json),
                    503 => PlaceOrderResponse::ServiceUnavailable(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// List placed orders, newest first
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all(&self, auth: TrustedUser) -> GetOrdersResponse {
        match self
            .get_all_use_case
            .execute(GetOrdersParams { user_id: auth.0 })
            .await
        {
            Ok(lines) => {
                let responses: Vec<OrderLineResponse> =
                    lines.into_iter().map(|l| l.into()).collect();
                GetOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetOrdersResponse::ServiceUnavailable(json),
                    _ => GetOrdersResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<PlacedOrderResponse>),
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
pub enum GetOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderLineResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::RepositoryError;
    use business::domain::order::errors::OrderError;
    use business::domain::order::model::{OrderLine, PlacedOrder};
    use mockall::mock;
    use poem::Endpoint;
    use poem::http::StatusCode;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;
    use uuid::Uuid;

    mock! {
        pub Place {}

        #[async_trait]
        impl PlaceOrderUseCase for Place {
            async fn execute(&self, params: PlaceOrderParams) -> Result<PlacedOrder, OrderError>;
        }
    }

    mock! {
        pub GetOrders {}

        #[async_trait]
        impl GetOrdersUseCase for GetOrders {
            async fn execute(&self, params: GetOrdersParams) -> Result<Vec<OrderLine>, OrderError>;
        }
    }

    fn client(place: MockPlace) -> TestClient<impl Endpoint> {
        let api = OrderApi::new(Arc::new(place), Arc::new(MockGetOrders::new()));
        TestClient::new(Route::new().nest("/", OpenApiService::new(api, "test", "1.0")))
    }

    #[tokio::test]
    async fn should_return_group_of_created_orders() {
        let group_id = Uuid::new_v4();
        let mut place = MockPlace::new();
        place.expect_execute().returning(move |_| {
            Ok(PlacedOrder {
                group_id,
                order_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
            })
        });
        let cli = client(place);

        let resp = cli
            .post("/orders")
            .header("X-User-Id", "user-1")
            .body_json(&json!({ "address_id": Uuid::new_v4() }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let body = resp.json().await;
        body.value()
            .object()
            .get("group_id")
            .assert_string(&group_id.to_string());
    }

    #[tokio::test]
    async fn should_answer_service_unavailable_on_lock_timeout() {
        let mut place = MockPlace::new();
        place
            .expect_execute()
            .returning(|_| Err(OrderError::PlacementFailed(RepositoryError::LockTimeout)));
        let cli = client(place);

        let resp = cli
            .post("/orders")
            .header("X-User-Id", "user-1")
            .body_json(&json!({ "address_id": Uuid::new_v4() }))
            .send()
            .await;

        resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }
}
