use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::{Address, NewAddressProps};
use crate::domain::address::repository::AddressRepository;
use crate::domain::address::use_cases::create::{CreateAddressParams, CreateAddressUseCase};
use crate::domain::logger::Logger;

pub struct CreateAddressUseCaseImpl {
    pub repository: Arc<dyn AddressRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateAddressUseCase for CreateAddressUseCaseImpl {
    async fn execute(&self, params: CreateAddressParams) -> Result<Address, AddressError> {
        self.logger
            .info(&format!("Creating address for user: {}", params.user_id));

        let address = Address::new(NewAddressProps {
            user_id: params.user_id,
            house_number: params.house_number,
            street_name: params.street_name,
            area_name: params.area_name,
            city_name: params.city_name,
            pincode: params.pincode,
        })?;

        self.repository.save(&address).await?;

        self.logger
            .info(&format!("Address created with id: {}", address.id));
        Ok(address)
    }
}
