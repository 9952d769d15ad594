use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::order::model::OrderLine;

use crate::numeric::from_numeric;

#[derive(Debug, FromRow)]
pub struct OrderLineEntity {
    pub id: Uuid,
    pub group_id: Uuid,
    pub cart_id: Uuid,
    pub address_id: Uuid,
    pub food_name: String,
    pub restaurant_name: String,
    pub quantity: i32,
    pub amount: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl OrderLineEntity {
    pub fn into_domain(self) -> OrderLine {
        OrderLine {
            id: self.id,
            group_id: self.group_id,
            cart_id: self.cart_id,
            address_id: self.address_id,
            food_name: self.food_name,
            restaurant_name: self.restaurant_name,
            quantity: self.quantity,
            amount: from_numeric(&self.amount),
            created_at: self.created_at,
        }
    }
}
