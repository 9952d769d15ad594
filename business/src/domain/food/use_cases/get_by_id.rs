use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::FoodItem;

pub struct GetFoodParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetFoodUseCase: Send + Sync {
    async fn execute(&self, params: GetFoodParams) -> Result<FoodItem, FoodError>;
}
