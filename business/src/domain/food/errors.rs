#[derive(Debug, thiserror::Error)]
pub enum FoodError {
    #[error("food.not_found")]
    NotFound,
    #[error("food.name_empty")]
    NameEmpty,
    #[error("food.rate_not_positive")]
    RateNotPositive,
    #[error("food.rate_out_of_range")]
    RateOutOfRange,
    #[error("food.quantity_negative")]
    QuantityNegative,
    #[error("food.no_changes")]
    NoChanges,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
