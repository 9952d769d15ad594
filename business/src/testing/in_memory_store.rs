//! Stateful fake behind the same repository traits as the PostgreSQL adapters.
//!
//! Every multi-row write works on a staged copy of the state that replaces the
//! live state only when the whole operation succeeds, which gives the same
//! all-or-nothing visibility as a committed transaction. A single mutex
//! serializes writers the way row locks do in the real store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::address::model::Address;
use crate::domain::address::repository::AddressRepository;
use crate::domain::cart::model::{CartEntry, CartLine};
use crate::domain::cart::repository::{CartInsertion, CartRepository};
use crate::domain::cart::value_objects::CartStatus;
use crate::domain::errors::RepositoryError;
use crate::domain::food::model::FoodItem;
use crate::domain::food::repository::FoodRepository;
use crate::domain::food::value_objects::{FoodType, FoodUpdate};
use crate::domain::order::errors::PlacementError;
use crate::domain::order::model::{Order, OrderLine, OrderPlacement, PlacedOrder};
use crate::domain::order::repository::OrderRepository;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Default)]
struct State {
    restaurants: HashMap<Uuid, String>,
    foods: HashMap<Uuid, FoodItem>,
    cart: Vec<CartEntry>,
    orders: Vec<Order>,
    addresses: Vec<Address>,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    fail_order_insert_at: Mutex<Option<usize>>,
    committed_writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, RepositoryError> {
        self.state.lock().map_err(|_| RepositoryError::DatabaseError)
    }

    fn commit(&self, guard: &mut MutexGuard<'_, State>, staged: State) {
        **guard = staged;
        self.committed_writes.fetch_add(1, Ordering::SeqCst);
    }

    pub fn add_restaurant(&self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.state
            .lock()
            .unwrap()
            .restaurants
            .insert(id, name.to_string());
        id
    }

    pub fn add_food(&self, restaurant_id: Uuid, name: &str, rate: f64, quantity: i32) -> Uuid {
        let id = Uuid::new_v4();
        let food = FoodItem::from_repository(
            id,
            restaurant_id,
            name.to_string(),
            rate,
            FoodType::Veg,
            quantity,
        );
        self.state.lock().unwrap().foods.insert(id, food);
        id
    }

    pub fn add_address(&self, address: Address) -> Uuid {
        let id = address.id;
        self.state.lock().unwrap().addresses.push(address);
        id
    }

    /// Makes the `n`-th order insert (1-based) of the next placement fail.
    pub fn fail_order_insert_at(&self, n: usize) {
        *self.fail_order_insert_at.lock().unwrap() = Some(n);
    }

    pub fn food_quantity(&self, food_id: Uuid) -> i32 {
        self.state.lock().unwrap().foods[&food_id].quantity
    }

    /// Every cart row of the user, settled ones included.
    pub fn cart_rows(&self, user_id: &UserId) -> Vec<CartEntry> {
        self.state
            .lock()
            .unwrap()
            .cart
            .iter()
            .filter(|entry| &entry.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn order_rows(&self) -> Vec<Order> {
        self.state.lock().unwrap().orders.clone()
    }

    pub fn committed_writes(&self) -> usize {
        self.committed_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CartRepository for InMemoryStore {
    async fn add_entry(&self, entry: &CartEntry) -> Result<CartInsertion, RepositoryError> {
        let mut guard = self.lock()?;

        if let Some(other) = guard
            .cart
            .iter()
            .find(|e| e.user_id == entry.user_id && e.is_active())
            .filter(|e| e.restaurant_id != entry.restaurant_id)
        {
            return Ok(CartInsertion::RestaurantMismatch {
                active_restaurant_id: other.restaurant_id,
            });
        }

        let listed = guard
            .foods
            .get(&entry.food_id)
            .is_some_and(|food| food.restaurant_id == entry.restaurant_id);
        if !listed {
            return Ok(CartInsertion::FoodNotListed);
        }

        let mut staged = guard.clone();
        staged.cart.push(entry.clone());
        self.commit(&mut guard, staged);
        Ok(CartInsertion::Inserted)
    }

    async fn get_active_lines(&self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let guard = self.lock()?;
        let lines = guard
            .cart
            .iter()
            .filter(|e| &e.user_id == user_id && e.is_active())
            .map(|e| CartLine {
                id: e.id,
                restaurant_id: e.restaurant_id,
                restaurant_name: guard
                    .restaurants
                    .get(&e.restaurant_id)
                    .cloned()
                    .unwrap_or_default(),
                food_id: e.food_id,
                food_name: guard
                    .foods
                    .get(&e.food_id)
                    .map(|f| f.name.clone())
                    .unwrap_or_default(),
                quantity: e.quantity,
                amount: e.amount,
                created_at: e.created_at,
            })
            .collect();
        Ok(lines)
    }

    async fn get_active_entries(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CartEntry>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .cart
            .iter()
            .filter(|e| &e.user_id == user_id && e.is_active())
            .cloned()
            .collect())
    }

    async fn remove_active(&self, id: Uuid, user_id: &UserId) -> Result<bool, RepositoryError> {
        let mut guard = self.lock()?;
        let mut staged = guard.clone();
        let before = staged.cart.len();
        staged
            .cart
            .retain(|e| !(e.id == id && &e.user_id == user_id && e.is_active()));
        let removed = staged.cart.len() < before;
        if removed {
            self.commit(&mut guard, staged);
        }
        Ok(removed)
    }

    async fn clear_active(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let mut guard = self.lock()?;
        let mut staged = guard.clone();
        let before = staged.cart.len();
        staged
            .cart
            .retain(|e| !(&e.user_id == user_id && e.is_active()));
        let cleared = (before - staged.cart.len()) as u64;
        if cleared > 0 {
            self.commit(&mut guard, staged);
        }
        Ok(cleared)
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn place(&self, placement: &OrderPlacement) -> Result<PlacedOrder, PlacementError> {
        let fail_at = self
            .fail_order_insert_at
            .lock()
            .map_err(|_| RepositoryError::DatabaseError)?
            .take();
        let mut guard = self.lock()?;
        let mut staged = guard.clone();

        let owns_address = staged
            .addresses
            .iter()
            .any(|a| a.id == placement.address_id && a.user_id == placement.user_id);
        if !owns_address {
            return Err(PlacementError::AddressNotFound);
        }

        let demand = placement.stock_demand();
        for (food_id, requested) in &demand {
            let available = staged.foods.get(food_id).map(|f| f.quantity).unwrap_or(0);
            if available < *requested {
                return Err(PlacementError::InsufficientStock {
                    food_id: *food_id,
                    requested: *requested,
                    available,
                });
            }
        }

        for (index, line) in placement.lines.iter().enumerate() {
            let entry = staged
                .cart
                .iter_mut()
                .find(|e| e.id == line.entry.id && e.user_id == placement.user_id && e.is_active())
                .ok_or(PlacementError::CartChanged {
                    cart_id: line.entry.id,
                })?;
            entry.status = CartStatus::Settled;

            if fail_at == Some(index + 1) {
                return Err(PlacementError::Store(RepositoryError::Persistence));
            }
            staged.orders.push(line.order.clone());
        }

        for (food_id, requested) in &demand {
            if let Some(food) = staged.foods.get_mut(food_id) {
                food.quantity -= requested;
            }
        }

        self.commit(&mut guard, staged);
        Ok(placement.placed())
    }

    async fn get_all(&self, user_id: &UserId) -> Result<Vec<OrderLine>, RepositoryError> {
        let guard = self.lock()?;
        let mut lines: Vec<OrderLine> = guard
            .orders
            .iter()
            .filter(|o| &o.user_id == user_id)
            .filter_map(|o| {
                let entry = guard.cart.iter().find(|e| e.id == o.cart_id)?;
                Some(OrderLine {
                    id: o.id,
                    group_id: o.group_id,
                    cart_id: o.cart_id,
                    address_id: o.address_id,
                    food_name: guard
                        .foods
                        .get(&entry.food_id)
                        .map(|f| f.name.clone())
                        .unwrap_or_default(),
                    restaurant_name: guard
                        .restaurants
                        .get(&entry.restaurant_id)
                        .cloned()
                        .unwrap_or_default(),
                    quantity: entry.quantity,
                    amount: entry.amount,
                    created_at: o.created_at,
                })
            })
            .collect();
        lines.reverse();
        Ok(lines)
    }
}

#[async_trait]
impl AddressRepository for InMemoryStore {
    async fn save(&self, address: &Address) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        if guard.addresses.iter().any(|a| a.id == address.id) {
            return Err(RepositoryError::Duplicated);
        }
        let mut staged = guard.clone();
        staged.addresses.push(address.clone());
        self.commit(&mut guard, staged);
        Ok(())
    }

    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Address>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .addresses
            .iter()
            .rev()
            .filter(|a| &a.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FoodRepository for InMemoryStore {
    async fn get_by_id(&self, id: Uuid) -> Result<FoodItem, RepositoryError> {
        let guard = self.lock()?;
        guard.foods.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, id: Uuid, updates: &[FoodUpdate]) -> Result<FoodItem, RepositoryError> {
        let mut guard = self.lock()?;
        let current = guard.foods.get(&id).ok_or(RepositoryError::NotFound)?;
        let updated = current
            .with_updates(updates)
            .map_err(|_| RepositoryError::Persistence)?;
        let mut staged = guard.clone();
        staged.foods.insert(id, updated.clone());
        self.commit(&mut guard, staged);
        Ok(updated)
    }
}
