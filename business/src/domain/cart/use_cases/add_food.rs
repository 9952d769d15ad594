use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartEntry;
use crate::domain::shared::value_objects::UserId;

pub struct AddFoodToCartParams {
    pub user_id: UserId,
    pub restaurant_id: Uuid,
    pub food_id: Uuid,
    pub quantity: i32,
    pub amount: f64,
}

#[async_trait]
pub trait AddFoodToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddFoodToCartParams) -> Result<CartEntry, CartError>;
}
