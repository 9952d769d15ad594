use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::FoodItem;
use crate::domain::food::value_objects::FoodUpdate;

pub struct UpdateFoodParams {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub updates: Vec<FoodUpdate>,
}

#[async_trait]
pub trait UpdateFoodUseCase: Send + Sync {
    async fn execute(&self, params: UpdateFoodParams) -> Result<FoodItem, FoodError>;
}
