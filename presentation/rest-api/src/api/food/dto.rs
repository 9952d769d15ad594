use poem_openapi::{Enum, Object};
use uuid::Uuid;

use business::domain::food::model::FoodItem;
use business::domain::food::value_objects::{FoodType, FoodUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "snake_case")]
pub enum FoodTypeDto {
    Veg,
    NonVeg,
}

impl From<FoodType> for FoodTypeDto {
    fn from(food_type: FoodType) -> Self {
        match food_type {
            FoodType::Veg => FoodTypeDto::Veg,
            FoodType::NonVeg => FoodTypeDto::NonVeg,
        }
    }
}

impl From<FoodTypeDto> for FoodType {
    fn from(dto: FoodTypeDto) -> Self {
        match dto {
            FoodTypeDto::Veg => FoodType::Veg,
            FoodTypeDto::NonVeg => FoodType::NonVeg,
        }
    }
}

/// Only the fields that are present get changed.
#[derive(Debug, Clone, Object)]
pub struct UpdateFoodRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub rate: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub food_type: Option<FoodTypeDto>,
    /// Units in stock
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i32>,
}

impl UpdateFoodRequest {
    pub fn into_updates(self) -> Vec<FoodUpdate> {
        let mut updates = Vec::new();
        if let Some(name) = self.name {
            updates.push(FoodUpdate::Name(name));
        }
        if let Some(rate) = self.rate {
            updates.push(FoodUpdate::Rate(rate));
        }
        if let Some(food_type) = self.food_type {
            updates.push(FoodUpdate::FoodType(food_type.into()));
        }
        if let Some(quantity) = self.quantity {
            updates.push(FoodUpdate::Quantity(quantity));
        }
        updates
    }
}

#[derive(Debug, Clone, Object)]
pub struct FoodResponse {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub rate: f64,
    pub food_type: FoodTypeDto,
    pub quantity: i32,
}

impl From<FoodItem> for FoodResponse {
    fn from(food: FoodItem) -> Self {
        Self {
            id: food.id,
            restaurant_id: food.restaurant_id,
            name: food.name,
            rate: food.rate,
            food_type: food.food_type.into(),
            quantity: food.quantity,
        }
    }
}
