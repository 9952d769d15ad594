use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::Address;
use crate::domain::shared::value_objects::UserId;

pub struct CreateAddressParams {
    pub user_id: UserId,
    pub house_number: String,
    pub street_name: String,
    pub area_name: String,
    pub city_name: String,
    pub pincode: String,
}

#[async_trait]
pub trait CreateAddressUseCase: Send + Sync {
    async fn execute(&self, params: CreateAddressParams) -> Result<Address, AddressError>;
}
