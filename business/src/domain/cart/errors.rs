use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.quantity_not_positive")]
    QuantityNotPositive,
    #[error("cart.amount_not_positive")]
    AmountNotPositive,
    #[error("cart.amount_out_of_range")]
    AmountOutOfRange,
    #[error("cart.restaurant_mismatch")]
    RestaurantMismatch { active_restaurant_id: Uuid },
    #[error("cart.food_not_listed")]
    FoodNotListed,
    #[error("cart.access_failure")]
    Access(#[from] crate::domain::errors::RepositoryError),
}
