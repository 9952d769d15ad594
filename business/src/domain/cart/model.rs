use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use super::value_objects::CartStatus;
use crate::domain::shared::value_objects::{UserId, is_storable_money};

#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub id: Uuid,
    pub user_id: UserId,
    pub restaurant_id: Uuid,
    pub food_id: Uuid,
    pub quantity: i32,
    pub amount: f64,
    pub status: CartStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewCartEntryProps {
    pub user_id: UserId,
    pub restaurant_id: Uuid,
    pub food_id: Uuid,
    pub quantity: i32,
    pub amount: f64,
}

impl CartEntry {
    pub fn new(props: NewCartEntryProps) -> Result<Self, CartError> {
        if props.quantity <= 0 {
            return Err(CartError::QuantityNotPositive);
        }

        if !props.amount.is_finite() || props.amount <= 0.0 {
            return Err(CartError::AmountNotPositive);
        }

        if !is_storable_money(props.amount) {
            return Err(CartError::AmountOutOfRange);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            restaurant_id: props.restaurant_id,
            food_id: props.food_id,
            quantity: props.quantity,
            amount: props.amount,
            status: CartStatus::Active,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        restaurant_id: Uuid,
        food_id: Uuid,
        quantity: i32,
        amount: f64,
        status: CartStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            restaurant_id,
            food_id,
            quantity,
            amount,
            status,
            created_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == CartStatus::Active
    }
}

/// An active cart entry joined with the names shown to the customer.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub restaurant_name: String,
    pub food_id: Uuid,
    pub food_name: String,
    pub quantity: i32,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(quantity: i32, amount: f64) -> NewCartEntryProps {
        NewCartEntryProps {
            user_id: UserId::new("test-user-id"),
            restaurant_id: Uuid::new_v4(),
            food_id: Uuid::new_v4(),
            quantity,
            amount,
        }
    }

    #[test]
    fn should_create_active_entry_when_valid() {
        let entry = CartEntry::new(props(2, 40.0)).unwrap();

        assert_eq!(entry.status, CartStatus::Active);
        assert_eq!(entry.quantity, 2);
        assert!(entry.is_active());
    }

    #[test]
    fn should_reject_zero_quantity() {
        let result = CartEntry::new(props(0, 40.0));

        assert!(matches!(result, Err(CartError::QuantityNotPositive)));
    }

    #[test]
    fn should_reject_negative_quantity() {
        let result = CartEntry::new(props(-3, 40.0));

        assert!(matches!(result, Err(CartError::QuantityNotPositive)));
    }

    #[test]
    fn should_reject_non_positive_amount() {
        assert!(matches!(
            CartEntry::new(props(1, 0.0)),
            Err(CartError::AmountNotPositive)
        ));
        assert!(matches!(
            CartEntry::new(props(1, f64::INFINITY)),
            Err(CartError::AmountNotPositive)
        ));
    }

    #[test]
    fn should_reject_amount_the_store_cannot_hold() {
        assert!(matches!(
            CartEntry::new(props(1, 1e12)),
            Err(CartError::AmountOutOfRange)
        ));
        assert!(matches!(
            CartEntry::new(props(1, 0.001)),
            Err(CartError::AmountOutOfRange)
        ));
    }

    #[test]
    fn should_accept_amount_at_column_bounds() {
        assert!(CartEntry::new(props(1, 0.01)).is_ok());
        assert!(CartEntry::new(props(1, 99_999_999.99)).is_ok());
    }
}
