use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::FoodItem;
use super::value_objects::FoodUpdate;

#[async_trait]
pub trait FoodRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<FoodItem, RepositoryError>;
    /// Applies all `updates` in one transaction and returns the stored row.
    async fn update(&self, id: Uuid, updates: &[FoodUpdate]) -> Result<FoodItem, RepositoryError>;
}
