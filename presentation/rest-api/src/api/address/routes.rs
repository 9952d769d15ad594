use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::address::use_cases::create::{CreateAddressParams, CreateAddressUseCase};
use business::domain::address::use_cases::get_all::{GetAddressesParams, GetAddressesUseCase};

use crate::api::address::dto::{AddressResponse, CreateAddressRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::TrustedUser;
use crate::api::tags::ApiTags;

pub struct AddressApi {
    create_use_case: Arc<dyn CreateAddressUseCase>,
    get_all_use_case: Arc<dyn GetAddressesUseCase>,
}

impl AddressApi {
    pub fn new(
        create_use_case: Arc<dyn CreateAddressUseCase>,
        get_all_use_case: Arc<dyn GetAddressesUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
        }
    }
}

#[OpenApi]
impl AddressApi {
    /// Save a delivery address
    #[oai(path = "/addresses", method = "post", tag = "ApiTags::Addresses")]
    async fn create(&self, auth: TrustedUser, body: Json<CreateAddressRequest>) -> CreateAddressResponse {
        let body = body.0;
        let params = CreateAddressParams {
            user_id: auth.0,
            house_number: body.house_number,
            street_name: body.street_name,
            area_name: body.area_name,
            city_name: body.city_name,
            pincode: body.pincode,
        };

        match self.create_use_case.execute(params).await {
            Ok(address) => CreateAddressResponse::Created(Json(address.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateAddressResponse::BadRequest(json),
                    503 => CreateAddressResponse::ServiceUnavailable(json),
                    _ => CreateAddressResponse::InternalError(json),
                }
            }
        }
    }

    /// List saved addresses, newest first
    #[oai(path = "/addresses", method = "get", tag = "ApiTags::Addresses")]
    async fn get_all(&self, auth: TrustedUser) -> GetAddressesResponse {
        match self
            .get_all_use_case
            .execute(GetAddressesParams { user_id: auth.0 })
            .await
        {
            Ok(addresses) => {
                let responses: Vec<AddressResponse> =
                    addresses.into_iter().map(|a| a.into()).collect();
                GetAddressesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetAddressesResponse::ServiceUnavailable(json),
                    _ => GetAddressesResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateAddressResponse {
    #[oai(status = 201)]
    Created(Json<AddressResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAddressesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AddressResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
