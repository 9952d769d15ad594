use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::order::errors::PlacementError;
use business::domain::order::model::{OrderLine, OrderPlacement, PlacedOrder};
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::OrderLineEntity;
use crate::errors::to_repository_error;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
    lock_timeout: Duration,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool, lock_timeout: Duration) -> Self {
        Self { pool, lock_timeout }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn place(&self, placement: &OrderPlacement) -> Result<PlacedOrder, PlacementError> {
        let fail = |e: sqlx::Error| PlacementError::Store(to_repository_error("order.place", e));
        let mut tx = self.pool.begin().await.map_err(fail)?;

        sqlx::query("SELECT set_config('lock_timeout', $1, true)")
            .bind(format!("{}ms", self.lock_timeout.as_millis()))
            .execute(&mut *tx)
            .await
            .map_err(fail)?;

        let address: Option<(i32,)> =
            sqlx::query_as("SELECT 1 FROM address WHERE id = $1 AND user_id = $2 FOR SHARE")
                .bind(placement.address_id)
                .bind(placement.user_id.as_str())
                .fetch_optional(&mut *tx)
                .await
                .map_err(fail)?;
        if address.is_none() {
            return Err(PlacementError::AddressNotFound);
        }

        // Rows are locked in food id order so overlapping placements queue
        // behind each other instead of deadlocking.
        let demand = placement.stock_demand();
        for (food_id, requested) in &demand {
            let row: Option<(i32,)> =
                sqlx::query_as("SELECT quantity FROM food WHERE id = $1 FOR UPDATE")
                    .bind(food_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(fail)?;
            let available = row.map(|(quantity,)| quantity).unwrap_or(0);
            if available < *requested {
                return Err(PlacementError::InsufficientStock {
                    food_id: *food_id,
                    requested: *requested,
                    available,
                });
            }
        }

        for line in &placement.lines {
            let settled = sqlx::query(
                "UPDATE cart SET status = 'settled' WHERE id = $1 AND user_id = $2 AND status = 'active'",
            )
            .bind(line.entry.id)
            .bind(placement.user_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(fail)?;
            if settled.rows_affected() != 1 {
                return Err(PlacementError::CartChanged {
                    cart_id: line.entry.id,
                });
            }

            sqlx::query(
                r#"INSERT INTO orders (id, group_id, user_id, cart_id, address_id, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)"#,
            )
            .bind(line.order.id)
            .bind(line.order.group_id)
            .bind(line.order.user_id.as_str())
            .bind(line.order.cart_id)
            .bind(line.order.address_id)
            .bind(line.order.created_at)
            .execute(&mut *tx)
            .await
            .map_err(fail)?;
        }

        for (food_id, requested) in &demand {
            sqlx::query("UPDATE food SET quantity = quantity - $1 WHERE id = $2")
                .bind(requested)
                .bind(food_id)
                .execute(&mut *tx)
                .await
                .map_err(fail)?;
        }

        tx.commit().await.map_err(fail)?;
        Ok(placement.placed())
    }

    async fn get_all(&self, user_id: &UserId) -> Result<Vec<OrderLine>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderLineEntity>(
            r#"SELECT o.id, o.group_id, o.cart_id, o.address_id, f.name AS food_name,
                r.name AS restaurant_name, c.quantity, c.amount, o.created_at
            FROM orders o
            JOIN cart c ON c.id = o.cart_id
            JOIN food f ON f.id = c.food_id
            JOIN restaurant r ON r.id = c.restaurant_id
            WHERE o.user_id = $1
            ORDER BY o.created_at DESC"#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| to_repository_error("order.get_all", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

/// Runs against a live PostgreSQL named by `DATABASE_URL` and returns early
/// when the variable is unset. Every test seeds its own restaurant and users.
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    use business::domain::address::model::{Address, NewAddressProps};
    use business::domain::address::repository::AddressRepository;
    use business::domain::cart::model::{CartEntry, NewCartEntryProps};
    use business::domain::cart::repository::{CartInsertion, CartRepository};

    use super::*;
    use crate::address::repository::AddressRepositoryPostgres;
    use crate::cart::repository::CartRepositoryPostgres;
    use crate::db::run_migrations;
    use crate::numeric::to_numeric;

    const LOCK_TIMEOUT: Duration = Duration::from_millis(2000);

    async fn test_pool() -> Option<PgPool> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&url)
            .await
            .expect("DATABASE_URL is set but unreachable");
        run_migrations(&pool, concat!(env!("CARGO_MANIFEST_DIR"), "/migrations"))
            .await
            .expect("migrations should apply");
        Some(pool)
    }

    async fn seed_restaurant(pool: &PgPool) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO restaurant (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind("Saravana Bhavan")
            .execute(pool)
            .await
            .unwrap();
        id
    }

    async fn seed_food(pool: &PgPool, restaurant_id: Uuid, name: &str, quantity: i32) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO food (id, restaurant_id, name, rate, food_type, quantity) VALUES ($1, $2, $3, $4, 'veg', $5)",
        )
        .bind(id)
        .bind(restaurant_id)
        .bind(name)
        .bind(to_numeric(20.0).unwrap())
        .bind(quantity)
        .execute(pool)
        .await
        .unwrap();
        id
    }

    async fn seed_address(pool: &PgPool, user_id: &UserId) -> Uuid {
        let address = Address::new(NewAddressProps {
            user_id: user_id.clone(),
            house_number: "12".to_string(),
            street_name: "Anna Salai".to_string(),
            area_name: "Teynampet".to_string(),
            city_name: "Chennai".to_string(),
            pincode: "600018".to_string(),
        })
        .unwrap();
        AddressRepositoryPostgres::new(pool.clone())
            .save(&address)
            .await
            .unwrap();
        address.id
    }

    async fn add_to_cart(
        pool: &PgPool,
        user_id: &UserId,
        restaurant_id: Uuid,
        food_id: Uuid,
        quantity: i32,
    ) {
        let entry = CartEntry::new(NewCartEntryProps {
            user_id: user_id.clone(),
            restaurant_id,
            food_id,
            quantity,
            amount: 20.0 * quantity as f64,
        })
        .unwrap();
        let inserted = CartRepositoryPostgres::new(pool.clone(), LOCK_TIMEOUT)
            .add_entry(&entry)
            .await
            .unwrap();
        assert_eq!(inserted, CartInsertion::Inserted);
    }

    async fn placement_for(pool: &PgPool, user_id: &UserId, address_id: Uuid) -> OrderPlacement {
        let entries = CartRepositoryPostgres::new(pool.clone(), LOCK_TIMEOUT)
            .get_active_entries(user_id)
            .await
            .unwrap();
        OrderPlacement::new(user_id.clone(), address_id, entries).unwrap()
    }

    async fn food_quantity(pool: &PgPool, food_id: Uuid) -> i32 {
        let (quantity,): (i32,) = sqlx::query_as("SELECT quantity FROM food WHERE id = $1")
            .bind(food_id)
            .fetch_one(pool)
            .await
            .unwrap();
        quantity
    }

    async fn order_count(pool: &PgPool, user_id: &UserId) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_one(pool)
            .await
            .unwrap();
        count
    }

    fn fresh_user() -> UserId {
        UserId::new(format!("user-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn should_settle_cart_and_decrement_stock_in_one_commit() {
        let Some(pool) = test_pool().await else { return };
        let user = fresh_user();
        let restaurant = seed_restaurant(&pool).await;
        let dosa = seed_food(&pool, restaurant, "Masala Dosa", 5).await;
        let address = seed_address(&pool, &user).await;
        add_to_cart(&pool, &user, restaurant, dosa, 2).await;

        let repository = OrderRepositoryPostgres::new(pool.clone(), LOCK_TIMEOUT);
        let placement = placement_for(&pool, &user, address).await;
        let placed = repository.place(&placement).await.unwrap();

        assert_eq!(placed.order_ids.len(), 1);
        assert_eq!(food_quantity(&pool, dosa).await, 3);
        let lines = repository.get_all(&user).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].group_id, placed.group_id);
        assert_eq!(lines[0].food_name, "Masala Dosa");
        let active = CartRepositoryPostgres::new(pool.clone(), LOCK_TIMEOUT)
            .get_active_entries(&user)
            .await
            .unwrap();
        assert!(active.is_empty());
    }

    #[tokio::test]
    async fn should_roll_back_every_line_when_one_food_is_short() {
        let Some(pool) = test_pool().await else { return };
        let user = fresh_user();
        let restaurant = seed_restaurant(&pool).await;
        let dosa = seed_food(&pool, restaurant, "Masala Dosa", 5).await;
        let vada = seed_food(&pool, restaurant, "Medu Vada", 1).await;
        let address = seed_address(&pool, &user).await;
        add_to_cart(&pool, &user, restaurant, dosa, 2).await;
        add_to_cart(&pool, &user, restaurant, vada, 3).await;

        let repository = OrderRepositoryPostgres::new(pool.clone(), LOCK_TIMEOUT);
        let placement = placement_for(&pool, &user, address).await;
        let result = repository.place(&placement).await;

        match result {
            Err(PlacementError::InsufficientStock {
                food_id,
                requested,
                available,
            }) => {
                assert_eq!(food_id, vada);
                assert_eq!(requested, 3);
                assert_eq!(available, 1);
            }
            other => panic!("expected insufficient stock, got {:?}", other),
        }
        assert_eq!(food_quantity(&pool, dosa).await, 5);
        assert_eq!(food_quantity(&pool, vada).await, 1);
        assert_eq!(order_count(&pool, &user).await, 0);
        let active = CartRepositoryPostgres::new(pool.clone(), LOCK_TIMEOUT)
            .get_active_entries(&user)
            .await
            .unwrap();
        assert_eq!(active.len(), 2);
    }

    #[tokio::test]
    async fn should_refuse_replaying_a_settled_placement() {
        let Some(pool) = test_pool().await else { return };
        let user = fresh_user();
        let restaurant = seed_restaurant(&pool).await;
        let dosa = seed_food(&pool, restaurant, "Masala Dosa", 10).await;
        let address = seed_address(&pool, &user).await;
        add_to_cart(&pool, &user, restaurant, dosa, 2).await;

        let repository = OrderRepositoryPostgres::new(pool.clone(), LOCK_TIMEOUT);
        let placement = placement_for(&pool, &user, address).await;
        repository.place(&placement).await.unwrap();
        let replay = repository.place(&placement).await;

        assert!(matches!(replay, Err(PlacementError::CartChanged { .. })));
        assert_eq!(food_quantity(&pool, dosa).await, 8);
        assert_eq!(order_count(&pool, &user).await, 1);
    }

    #[tokio::test]
    async fn should_reject_address_of_another_user() {
        let Some(pool) = test_pool().await else { return };
        let user = fresh_user();
        let neighbour = fresh_user();
        let restaurant = seed_restaurant(&pool).await;
        let dosa = seed_food(&pool, restaurant, "Masala Dosa", 5).await;
        let foreign_address = seed_address(&pool, &neighbour).await;
        add_to_cart(&pool, &user, restaurant, dosa, 1).await;

        let repository = OrderRepositoryPostgres::new(pool.clone(), LOCK_TIMEOUT);
        let placement = placement_for(&pool, &user, foreign_address).await;

        assert_eq!(
            repository.place(&placement).await,
            Err(PlacementError::AddressNotFound)
        );
        assert_eq!(food_quantity(&pool, dosa).await, 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_sell_the_last_unit_exactly_once() {
        let Some(pool) = test_pool().await else { return };
        let restaurant = seed_restaurant(&pool).await;
        let dosa = seed_food(&pool, restaurant, "Masala Dosa", 1).await;

        let mut placements = Vec::new();
        for _ in 0..6 {
            let user = fresh_user();
            let address = seed_address(&pool, &user).await;
            add_to_cart(&pool, &user, restaurant, dosa, 1).await;
            placements.push(placement_for(&pool, &user, address).await);
        }

        let repository = Arc::new(OrderRepositoryPostgres::new(pool.clone(), LOCK_TIMEOUT));
        let mut handles = Vec::new();
        for placement in placements {
            let repository = repository.clone();
            handles.push(tokio::spawn(async move { repository.place(&placement).await }));
        }
        let mut placed = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => placed += 1,
                Err(PlacementError::InsufficientStock { available, .. }) => {
                    assert_eq!(available, 0)
                }
                Err(other) => panic!("unexpected placement failure: {:?}", other),
            }
        }

        assert_eq!(placed, 1);
        assert_eq!(food_quantity(&pool, dosa).await, 0);
    }
}
