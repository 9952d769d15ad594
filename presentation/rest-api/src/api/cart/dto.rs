use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::cart::model::{CartEntry, CartLine};

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Restaurant the food is ordered from
    pub restaurant_id: Uuid,
    /// Food item to add
    pub food_id: Uuid,
    /// Units requested (must be positive)
    pub quantity: i32,
    /// Line total, unit price times quantity
    pub amount: f64,
}

#[derive(Debug, Clone, Object)]
pub struct CartEntryResponse {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub food_id: Uuid,
    pub quantity: i32,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl From<CartEntry> for CartEntryResponse {
    fn from(entry: CartEntry) -> Self {
        Self {
            id: entry.id,
            restaurant_id: entry.restaurant_id,
            food_id: entry.food_id,
            quantity: entry.quantity,
            amount: entry.amount,
            created_at: entry.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub restaurant_name: String,
    pub food_id: Uuid,
    pub food_name: String,
    pub quantity: i32,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.id,
            restaurant_id: line.restaurant_id,
            restaurant_name: line.restaurant_name,
            food_id: line.food_id,
            food_name: line.food_name,
            quantity: line.quantity,
            amount: line.amount,
            created_at: line.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearCartResponse {
    /// Number of entries removed
    pub count: u64,
}
