use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::food::model::FoodItem;
use business::domain::food::repository::FoodRepository;
use business::domain::food::value_objects::FoodUpdate;

use super::entity::FoodEntity;
use crate::errors::to_repository_error;
use crate::numeric::to_numeric;

const SELECT_FOOD: &str =
    "SELECT id, restaurant_id, name, rate, food_type, quantity FROM food WHERE id = $1";

pub struct FoodRepositoryPostgres {
    pool: PgPool,
}

impl FoodRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodRepository for FoodRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<FoodItem, RepositoryError> {
        let entity = sqlx::query_as::<_, FoodEntity>(SELECT_FOOD)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| to_repository_error("food.get_by_id", e))?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: Uuid, updates: &[FoodUpdate]) -> Result<FoodItem, RepositoryError> {
        let fail = |e: sqlx::Error| to_repository_error("food.update", e);
        let mut tx = self.pool.begin().await.map_err(fail)?;

        for update in updates {
            let query = match update {
                FoodUpdate::Name(name) => {
                    sqlx::query("UPDATE food SET name = $1 WHERE id = $2").bind(name.clone())
                }
                FoodUpdate::Rate(rate) => {
                    sqlx::query("UPDATE food SET rate = $1 WHERE id = $2").bind(to_numeric(*rate)?)
                }
                FoodUpdate::FoodType(food_type) => {
                    sqlx::query("UPDATE food SET food_type = $1 WHERE id = $2")
                        .bind(food_type.to_string())
                }
                FoodUpdate::Quantity(quantity) => {
                    sqlx::query("UPDATE food SET quantity = $1 WHERE id = $2").bind(*quantity)
                }
            };

            let result = query.bind(id).execute(&mut *tx).await.map_err(fail)?;
            if result.rows_affected() == 0 {
                return Err(RepositoryError::NotFound);
            }
        }

        let entity = sqlx::query_as::<_, FoodEntity>(SELECT_FOOD)
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(fail)?;

        tx.commit().await.map_err(fail)?;
        Ok(entity.into_domain())
    }
}
