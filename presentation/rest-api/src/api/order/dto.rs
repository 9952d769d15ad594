use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::order::model::{OrderLine, PlacedOrder};

#[derive(Debug, Clone, Object)]
pub struct PlaceOrderRequest {
    /// Delivery address, must belong to the caller
    pub address_id: Uuid,
}

#[derive(Debug, Clone, Object)]
pub struct PlacedOrderResponse {
    /// Shared by every order row created in this checkout
    pub group_id: Uuid,
    /// One order per cart line, in cart order
    pub order_ids: Vec<Uuid>,
}

impl From<PlacedOrder> for PlacedOrderResponse {
    fn from(placed: PlacedOrder) -> Self {
        Self {
            group_id: placed.group_id,
            order_ids: placed.order_ids,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderLineResponse {
    pub id: Uuid,
    pub group_id: Uuid,
    pub cart_id: Uuid,
    pub address_id: Uuid,
    pub food_name: String,
    pub restaurant_name: String,
    pub quantity: i32,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            id: line.id,
            group_id: line.group_id,
            cart_id: line.cart_id,
            address_id: line.address_id,
            food_name: line.food_name,
            restaurant_name: line.restaurant_name,
            quantity: line.quantity,
            amount: line.amount,
            created_at: line.created_at,
        }
    }
}
