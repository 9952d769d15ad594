use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::{CartEntry, CartLine};
use business::domain::cart::repository::{CartInsertion, CartRepository};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{CartEntity, CartLineEntity};
use crate::errors::to_repository_error;
use crate::numeric::to_numeric;

pub struct CartRepositoryPostgres {
    pool: PgPool,
    lock_timeout: Duration,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool, lock_timeout: Duration) -> Self {
        Self { pool, lock_timeout }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn add_entry(&self, entry: &CartEntry) -> Result<CartInsertion, RepositoryError> {
        let fail = |e: sqlx::Error| to_repository_error("cart.add_entry", e);
        let mut tx = self.pool.begin().await.map_err(fail)?;

        sqlx::query("SELECT set_config('lock_timeout', $1, true)")
            .bind(format!("{}ms", self.lock_timeout.as_millis()))
            .execute(&mut *tx)
            .await
            .map_err(fail)?;

        // Serializes concurrent adds of one user until commit.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(entry.user_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(fail)?;

        let other: Option<(Uuid,)> = sqlx::query_as(
            "SELECT restaurant_id FROM cart WHERE user_id = $1 AND status = 'active' AND restaurant_id <> $2 LIMIT 1",
        )
        .bind(entry.user_id.as_str())
        .bind(entry.restaurant_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(fail)?;

        if let Some((active_restaurant_id,)) = other {
            return Ok(CartInsertion::RestaurantMismatch {
                active_restaurant_id,
            });
        }

        let (listed,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM food WHERE id = $1 AND restaurant_id = $2)",
        )
        .bind(entry.food_id)
        .bind(entry.restaurant_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(fail)?;

        if !listed {
            return Ok(CartInsertion::FoodNotListed);
        }

        sqlx::query(
            r#"INSERT INTO cart (id, user_id, restaurant_id, food_id, quantity, amount, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(entry.id)
        .bind(entry.user_id.as_str())
        .bind(entry.restaurant_id)
        .bind(entry.food_id)
        .bind(entry.quantity)
        .bind(to_numeric(entry.amount)?)
        .bind(entry.status.to_string())
        .bind(entry.created_at)
        .execute(&mut *tx)
        .await
        .map_err(fail)?;

        tx.commit().await.map_err(fail)?;
        Ok(CartInsertion::Inserted)
    }

    async fn get_active_lines(&self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartLineEntity>(
            r#"SELECT c.id, c.restaurant_id, r.name AS restaurant_name, c.food_id, f.name AS food_name,
                c.quantity, c.amount, c.created_at
            FROM cart c
            JOIN food f ON f.id = c.food_id
            JOIN restaurant r ON r.id = c.restaurant_id
            WHERE c.user_id = $1 AND c.status = 'active'
            ORDER BY c.created_at ASC"#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| to_repository_error("cart.get_active_lines", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_active_entries(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CartEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartEntity>(
            "SELECT id, user_id, restaurant_id, food_id, quantity, amount, status, created_at FROM cart WHERE user_id = $1 AND status = 'active' ORDER BY created_at ASC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| to_repository_error("cart.get_active_entries", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn remove_active(&self, id: Uuid, user_id: &UserId) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("DELETE FROM cart WHERE id = $1 AND user_id = $2 AND status = 'active'")
                .bind(id)
                .bind(user_id.as_str())
                .execute(&self.pool)
                .await
                .map_err(|e| to_repository_error("cart.remove_active", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn clear_active(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart WHERE user_id = $1 AND status = 'active'")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| to_repository_error("cart.clear_active", e))?;

        Ok(result.rows_affected())
    }
}
