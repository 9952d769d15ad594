use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartEntry, NewCartEntryProps};
use crate::domain::cart::repository::{CartInsertion, CartRepository};
use crate::domain::cart::use_cases::add_food::{AddFoodToCartParams, AddFoodToCartUseCase};
use crate::domain::logger::Logger;

pub struct AddFoodToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFoodToCartUseCase for AddFoodToCartUseCaseImpl {
    async fn execute(&self, params: AddFoodToCartParams) -> Result<CartEntry, CartError> {
        self.logger.info(&format!(
            "Adding food {} from restaurant {} to cart of {}",
            params.food_id, params.restaurant_id, params.user_id
        ));

        let entry = CartEntry::new(NewCartEntryProps {
            user_id: params.user_id,
            restaurant_id: params.restaurant_id,
            food_id: params.food_id,
            quantity: params.quantity,
            amount: params.amount,
        })?;

        match self.repository.add_entry(&entry).await? {
            CartInsertion::Inserted => {
                self.logger.info(&format!("Cart entry created: {}", entry.id));
                Ok(entry)
            }
            CartInsertion::RestaurantMismatch {
                active_restaurant_id,
            } => {
                self.logger.warn(&format!(
                    "Cart of {} already holds food from restaurant {}",
                    entry.user_id, active_restaurant_id
                ));
                Err(CartError::RestaurantMismatch {
                    active_restaurant_id,
                })
            }
            CartInsertion::FoodNotListed => {
                self.logger.warn(&format!(
                    "Food {} is not listed by restaurant {}",
                    entry.food_id, entry.restaurant_id
                ));
                Err(CartError::FoodNotListed)
            }
        }
    }
}
