use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::order::errors::{OrderError, PlacementError};
use crate::domain::order::model::{OrderPlacement, PlacedOrder};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

pub struct PlaceOrderUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<PlacedOrder, OrderError> {
        self.logger.info(&format!(
            "Placing order for {} to address {}",
            params.user_id, params.address_id
        ));

        let entries = self
            .cart_repository
            .get_active_entries(&params.user_id)
            .await?;

        let placement = match OrderPlacement::new(params.user_id, params.address_id, entries) {
            Ok(placement) => placement,
            Err(err) => {
                self.logger.info("Nothing to place, cart is empty");
                return Err(err);
            }
        };

        match self.order_repository.place(&placement).await {
            Ok(placed) => {
                self.logger.info(&format!(
                    "Order group {} placed with {} lines",
                    placed.group_id,
                    placed.order_ids.len()
                ));
                Ok(placed)
            }
            Err(err) => {
                match &err {
                    PlacementError::InsufficientStock {
                        food_id,
                        requested,
                        available,
                    } => self.logger.warn(&format!(
                        "Order group {} rejected: food {} has {} left, {} requested",
                        placement.group_id, food_id, available, requested
                    )),
                    other => self.logger.error(&format!(
                        "Order group {} rolled back: {}",
                        placement.group_id, other
                    )),
                }
                Err(err.into())
            }
        }
    }
}
