use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Address;

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn save(&self, address: &Address) -> Result<(), RepositoryError>;
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Address>, RepositoryError>;
}
