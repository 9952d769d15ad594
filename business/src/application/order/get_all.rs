use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderLine;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::{GetOrdersParams, GetOrdersUseCase};

pub struct GetOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrdersUseCase for GetOrdersUseCaseImpl {
    async fn execute(&self, params: GetOrdersParams) -> Result<Vec<OrderLine>, OrderError> {
        self.logger
            .info(&format!("Getting orders for user: {}", params.user_id));

        let orders = self.repository.get_all(&params.user_id).await?;

        self.logger.debug(&format!("Found {} order lines", orders.len()));
        Ok(orders)
    }
}
