use bigdecimal::BigDecimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::food::model::FoodItem;
use business::domain::food::value_objects::FoodType;

use crate::numeric::from_numeric;

#[derive(Debug, FromRow)]
pub struct FoodEntity {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub rate: BigDecimal,
    pub food_type: String,
    pub quantity: i32,
}

impl FoodEntity {
    pub fn into_domain(self) -> FoodItem {
        FoodItem::from_repository(
            self.id,
            self.restaurant_id,
            self.name,
            from_numeric(&self.rate),
            self.food_type.parse::<FoodType>().unwrap_or(FoodType::Veg),
            self.quantity,
        )
    }
}
