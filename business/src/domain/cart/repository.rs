use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{CartEntry, CartLine};

/// What happened to an insert attempt. The restaurant check and the insert
/// run in the same unit of work, serialized per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartInsertion {
    Inserted,
    RestaurantMismatch { active_restaurant_id: Uuid },
    FoodNotListed,
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn add_entry(&self, entry: &CartEntry) -> Result<CartInsertion, RepositoryError>;
    async fn get_active_lines(&self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError>;
    async fn get_active_entries(&self, user_id: &UserId)
    -> Result<Vec<CartEntry>, RepositoryError>;
    /// Returns `false` when no active entry with that id belongs to the user.
    async fn remove_active(&self, id: Uuid, user_id: &UserId) -> Result<bool, RepositoryError>;
    async fn clear_active(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
}
