use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::PlacedOrder;
use crate::domain::shared::value_objects::UserId;

pub struct PlaceOrderParams {
    pub user_id: UserId,
    pub address_id: Uuid,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<PlacedOrder, OrderError>;
}
