use uuid::Uuid;

use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("order.insufficient_stock")]
    InsufficientStock {
        food_id: Uuid,
        requested: i32,
        available: i32,
    },
    #[error("order.address_not_found")]
    AddressNotFound,
    /// The placement unit was opened and has been rolled back.
    #[error("order.placement_failed")]
    PlacementFailed(#[source] RepositoryError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Why the store refused or aborted a placement. In every case nothing
/// from the attempt was committed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("placement.insufficient_stock")]
    InsufficientStock {
        food_id: Uuid,
        requested: i32,
        available: i32,
    },
    #[error("placement.address_not_found")]
    AddressNotFound,
    /// A cart entry stopped being active between the read and the settle.
    #[error("placement.cart_changed")]
    CartChanged { cart_id: Uuid },
    #[error("placement.store")]
    Store(#[from] RepositoryError),
}

impl From<PlacementError> for OrderError {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::InsufficientStock {
                food_id,
                requested,
                available,
            } => OrderError::InsufficientStock {
                food_id,
                requested,
                available,
            },
            PlacementError::AddressNotFound => OrderError::AddressNotFound,
            PlacementError::CartChanged { .. } => {
                OrderError::PlacementFailed(RepositoryError::Persistence)
            }
            PlacementError::Store(e) => OrderError::PlacementFailed(e),
        }
    }
}
