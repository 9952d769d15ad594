use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::value_objects::RemovalOutcome;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveCartEntryParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait RemoveCartEntryUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartEntryParams) -> Result<RemovalOutcome, CartError>;
}
