use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food::errors::FoodError;
use crate::domain::food::model::FoodItem;
use crate::domain::food::repository::FoodRepository;
use crate::domain::food::use_cases::get_by_id::{GetFoodParams, GetFoodUseCase};
use crate::domain::logger::Logger;

pub struct GetFoodUseCaseImpl {
    pub repository: Arc<dyn FoodRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFoodUseCase for GetFoodUseCaseImpl {
    async fn execute(&self, params: GetFoodParams) -> Result<FoodItem, FoodError> {
        self.logger.info(&format!("Getting food: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FoodError::NotFound,
                other => FoodError::Repository(other),
            })
    }
}
