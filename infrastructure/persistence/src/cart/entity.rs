use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{CartEntry, CartLine};
use business::domain::cart::value_objects::CartStatus;
use business::domain::shared::value_objects::UserId;

use crate::numeric::from_numeric;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub user_id: String,
    pub restaurant_id: Uuid,
    pub food_id: Uuid,
    pub quantity: i32,
    pub amount: BigDecimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> CartEntry {
        CartEntry::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.restaurant_id,
            self.food_id,
            self.quantity,
            from_numeric(&self.amount),
            self.status
                .parse::<CartStatus>()
                .unwrap_or(CartStatus::Settled),
            self.created_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct CartLineEntity {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub restaurant_name: String,
    pub food_id: Uuid,
    pub food_name: String,
    pub quantity: i32,
    pub amount: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl CartLineEntity {
    pub fn into_domain(self) -> CartLine {
        CartLine {
            id: self.id,
            restaurant_id: self.restaurant_id,
            restaurant_name: self.restaurant_name,
            food_id: self.food_id,
            food_name: self.food_name,
            quantity: self.quantity,
            amount: from_numeric(&self.amount),
            created_at: self.created_at,
        }
    }
}
