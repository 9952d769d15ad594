use uuid::Uuid;

use super::errors::FoodError;
use super::value_objects::{FoodType, FoodUpdate};
use crate::domain::shared::value_objects::is_storable_money;

/// A menu item and its sellable stock.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub rate: f64,
    pub food_type: FoodType,
    pub quantity: i32,
}

impl FoodItem {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        restaurant_id: Uuid,
        name: String,
        rate: f64,
        food_type: FoodType,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            name,
            rate,
            food_type,
            quantity,
        }
    }

    pub fn has_stock_for(&self, requested: i32) -> bool {
        self.quantity >= requested
    }

    /// Returns a copy with `updates` applied, rejecting values that would
    /// break the item's invariants.
    pub fn with_updates(&self, updates: &[FoodUpdate]) -> Result<Self, FoodError> {
        validate_updates(updates)?;

        let mut updated = self.clone();
        for update in updates {
            match update {
                FoodUpdate::Name(name) => updated.name = name.clone(),
                FoodUpdate::Rate(rate) => updated.rate = *rate,
                FoodUpdate::FoodType(food_type) => updated.food_type = *food_type,
                FoodUpdate::Quantity(quantity) => updated.quantity = *quantity,
            }
        }
        Ok(updated)
    }
}

pub fn validate_updates(updates: &[FoodUpdate]) -> Result<(), FoodError> {
    if updates.is_empty() {
        return Err(FoodError::NoChanges);
    }

    for update in updates {
        match update {
            FoodUpdate::Name(name) if name.trim().is_empty() => return Err(FoodError::NameEmpty),
            FoodUpdate::Rate(rate) if !rate.is_finite() || *rate <= 0.0 => {
                return Err(FoodError::RateNotPositive);
            }
            FoodUpdate::Rate(rate) if !is_storable_money(*rate) => {
                return Err(FoodError::RateOutOfRange);
            }
            FoodUpdate::Quantity(quantity) if *quantity < 0 => {
                return Err(FoodError::QuantityNegative);
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn biryani(quantity: i32) -> FoodItem {
        FoodItem::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Chicken Biryani".to_string(),
            220.0,
            FoodType::NonVeg,
            quantity,
        )
    }

    #[test]
    fn should_report_stock_when_enough_units_left() {
        let food = biryani(3);

        assert!(food.has_stock_for(3));
        assert!(!food.has_stock_for(4));
    }

    #[test]
    fn should_apply_every_update_in_order() {
        let food = biryani(3);

        let updated = food
            .with_updates(&[
                FoodUpdate::Name("Mutton Biryani".to_string()),
                FoodUpdate::Quantity(10),
                FoodUpdate::Quantity(12),
            ])
            .unwrap();

        assert_eq!(updated.name, "Mutton Biryani");
        assert_eq!(updated.quantity, 12);
        assert_eq!(updated.rate, food.rate);
    }

    #[test]
    fn should_reject_negative_quantity() {
        let result = biryani(3).with_updates(&[FoodUpdate::Quantity(-1)]);

        assert!(matches!(result, Err(FoodError::QuantityNegative)));
    }

    #[test]
    fn should_reject_non_finite_rate() {
        let result = biryani(3).with_updates(&[FoodUpdate::Rate(f64::NAN)]);

        assert!(matches!(result, Err(FoodError::RateNotPositive)));
    }

    #[test]
    fn should_reject_empty_update_list() {
        assert!(matches!(validate_updates(&[]), Err(FoodError::NoChanges)));
    }

    #[test]
    fn should_reject_rate_outside_column_range() {
        assert!(matches!(
            validate_updates(&[FoodUpdate::Rate(1e12)]),
            Err(FoodError::RateOutOfRange)
        ));
        assert!(matches!(
            validate_updates(&[FoodUpdate::Rate(0.004)]),
            Err(FoodError::RateOutOfRange)
        ));
        assert!(validate_updates(&[FoodUpdate::Rate(99_999_999.99)]).is_ok());
        assert!(validate_updates(&[FoodUpdate::Rate(0.01)]).is_ok());
    }
}
