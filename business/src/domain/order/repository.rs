use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::errors::PlacementError;
use super::model::{OrderLine, OrderPlacement, PlacedOrder};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Settles every line of `placement` in a single transaction: checks and
    /// decrements stock under row locks, flips each cart entry to settled and
    /// inserts its order row. Either all of it commits or none of it does.
    async fn place(&self, placement: &OrderPlacement) -> Result<PlacedOrder, PlacementError>;
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<OrderLine>, RepositoryError>;
}
