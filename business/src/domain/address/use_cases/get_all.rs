use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::Address;
use crate::domain::shared::value_objects::UserId;

pub struct GetAddressesParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAddressesUseCase: Send + Sync {
    async fn execute(&self, params: GetAddressesParams) -> Result<Vec<Address>, AddressError>;
}
