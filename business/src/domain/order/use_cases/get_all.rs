use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderLine;
use crate::domain::shared::value_objects::UserId;

pub struct GetOrdersParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetOrdersUseCase: Send + Sync {
    async fn execute(&self, params: GetOrdersParams) -> Result<Vec<OrderLine>, OrderError>;
}
