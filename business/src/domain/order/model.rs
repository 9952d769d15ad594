use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::OrderError;
use crate::domain::cart::model::CartEntry;
use crate::domain::shared::value_objects::UserId;

/// One order row. Every row produced by the same checkout shares `group_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_id: UserId,
    pub cart_id: Uuid,
    pub address_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        group_id: Uuid,
        user_id: UserId,
        cart_id: Uuid,
        address_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            group_id,
            user_id,
            cart_id,
            address_id,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementLine {
    pub entry: CartEntry,
    pub order: Order,
}

/// Everything the store needs to settle a cart in one unit of work.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPlacement {
    pub group_id: Uuid,
    pub user_id: UserId,
    pub address_id: Uuid,
    pub lines: Vec<PlacementLine>,
}

impl OrderPlacement {
    pub fn new(
        user_id: UserId,
        address_id: Uuid,
        entries: Vec<CartEntry>,
    ) -> Result<Self, OrderError> {
        if entries.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let group_id = Uuid::new_v4();
        let now = Utc::now();
        let lines = entries
            .into_iter()
            .map(|entry| PlacementLine {
                order: Order {
                    id: Uuid::new_v4(),
                    group_id,
                    user_id: user_id.clone(),
                    cart_id: entry.id,
                    address_id,
                    created_at: now,
                },
                entry,
            })
            .collect();

        Ok(Self {
            group_id,
            user_id,
            address_id,
            lines,
        })
    }

    /// Units requested per food item, ordered by food id. Stores lock food
    /// rows in this order so concurrent placements cannot deadlock.
    pub fn stock_demand(&self) -> BTreeMap<Uuid, i32> {
        let mut demand = BTreeMap::new();
        for line in &self.lines {
            let units = demand.entry(line.entry.food_id).or_insert(0i32);
            *units = units.saturating_add(line.entry.quantity);
        }
        demand
    }

    pub fn placed(&self) -> PlacedOrder {
        PlacedOrder {
            group_id: self.group_id,
            order_ids: self.lines.iter().map(|line| line.order.id).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub group_id: Uuid,
    pub order_ids: Vec<Uuid>,
}

/// An order row joined with its settled cart line and display names.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::NewCartEntryProps;

    fn entry(food_id: Uuid, quantity: i32) -> CartEntry {
        CartEntry::new(NewCartEntryProps {
            user_id: UserId::new("test-user-id"),
            restaurant_id: Uuid::nil(),
            food_id,
            quantity,
            amount: 10.0 * quantity as f64,
        })
        .unwrap()
    }

    #[test]
    fn should_reject_empty_cart() {
        let result = OrderPlacement::new(UserId::new("test-user-id"), Uuid::new_v4(), vec![]);

        assert!(matches!(result, Err(OrderError::EmptyCart)));
    }

    #[test]
    fn should_create_one_order_per_entry_sharing_group() {
        let address_id = Uuid::new_v4();
        let entries = vec![entry(Uuid::new_v4(), 1), entry(Uuid::new_v4(), 2)];

        let placement =
            OrderPlacement::new(UserId::new("test-user-id"), address_id, entries.clone()).unwrap();

        assert_eq!(placement.lines.len(), 2);
        for (line, entry) in placement.lines.iter().zip(&entries) {
            assert_eq!(line.order.cart_id, entry.id);
            assert_eq!(line.order.group_id, placement.group_id);
            assert_eq!(line.order.address_id, address_id);
        }
    }

    #[test]
    fn should_sum_demand_for_repeated_food() {
        let food = Uuid::new_v4();
        let other = Uuid::new_v4();
        let placement = OrderPlacement::new(
            UserId::new("test-user-id"),
            Uuid::new_v4(),
            vec![entry(food, 2), entry(other, 1), entry(food, 3)],
        )
        .unwrap();

        let demand = placement.stock_demand();

        assert_eq!(demand.len(), 2);
        assert_eq!(demand[&food], 5);
        assert_eq!(demand[&other], 1);
    }

    #[test]
    fn should_list_order_ids_in_cart_order() {
        let placement = OrderPlacement::new(
            UserId::new("test-user-id"),
            Uuid::new_v4(),
            vec![entry(Uuid::new_v4(), 1), entry(Uuid::new_v4(), 1)],
        )
        .unwrap();

        let placed = placement.placed();

        assert_eq!(placed.group_id, placement.group_id);
        assert_eq!(
            placed.order_ids,
            vec![placement.lines[0].order.id, placement.lines[1].order.id]
        );
    }
}
