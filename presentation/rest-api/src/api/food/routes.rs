use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::food::use_cases::get_by_id::{GetFoodParams, GetFoodUseCase};
use business::domain::food::use_cases::update::{UpdateFoodParams, UpdateFoodUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::food::dto::{FoodResponse, UpdateFoodRequest};
use crate::api::security::TrustedUser;
use crate::api::tags::ApiTags;

pub struct FoodApi {
    get_by_id_use_case: Arc<dyn GetFoodUseCase>,
    update_use_case: Arc<dyn UpdateFoodUseCase>,
}

impl FoodApi {
    pub fn new(
        get_by_id_use_case: Arc<dyn GetFoodUseCase>,
        update_use_case: Arc<dyn UpdateFoodUseCase>,
    ) -> Self {
        Self {
            get_by_id_use_case,
            update_use_case,
        }
    }
}

/// Menu stock API
#[OpenApi]
impl FoodApi {
    /// Get a food item with its current stock
    #[oai(path = "/foods/:id", method = "get", tag = "ApiTags::Foods")]
    async fn get_by_id(&self, id: Path<Uuid>) -> FoodResponseKind {
        match self
            .get_by_id_use_case
            .execute(GetFoodParams { id: id.0 })
            .await
        {
            Ok(food) => FoodResponseKind::Ok(Json(food.into())),
            Err(err) => FoodResponseKind::from_error(err.into_error_response()),
        }
    }

    /// Update a food item of a restaurant's menu
    #[oai(
        path = "/restaurants/:restaurant_id/foods/:id",
        method = "patch",
        tag = "ApiTags::Foods"
    )]
    async fn update(
        &self,
        _auth: TrustedUser,
        restaurant_id: Path<Uuid>,
        id: Path<Uuid>,
        body: Json<UpdateFoodRequest>,
    ) -> FoodResponseKind {
        let params = UpdateFoodParams {
            id: id.0,
            restaurant_id: restaurant_id.0,
            updates: body.0.into_updates(),
        };

        match self.update_use_case.execute(params).await {
            Ok(food) => FoodResponseKind::Ok(Json(food.into())),
            Err(err) => FoodResponseKind::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FoodResponseKind {
    #[oai(status = 200)]
    Ok(Json<FoodResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl FoodResponseKind {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => FoodResponseKind::BadRequest(json),
            404 => FoodResponseKind::NotFound(json),
            503 => FoodResponseKind::ServiceUnavailable(json),
            _ => FoodResponseKind::InternalError(json),
        }
    }
}
