use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::Address;
use crate::domain::address::repository::AddressRepository;
use crate::domain::address::use_cases::get_all::{GetAddressesParams, GetAddressesUseCase};
use crate::domain::logger::Logger;

pub struct GetAddressesUseCaseImpl {
    pub repository: Arc<dyn AddressRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAddressesUseCase for GetAddressesUseCaseImpl {
    async fn execute(&self, params: GetAddressesParams) -> Result<Vec<Address>, AddressError> {
        self.logger
            .info(&format!("Getting addresses for user: {}", params.user_id));

        let addresses = self.repository.get_all(&params.user_id).await?;
        Ok(addresses)
    }
}
