use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::address::model::Address;
use business::domain::address::repository::AddressRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::AddressEntity;
use crate::errors::to_repository_error;

pub struct AddressRepositoryPostgres {
    pool: PgPool,
}

impl AddressRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for AddressRepositoryPostgres {
    async fn save(&self, address: &Address) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO address (id, user_id, house_number, street_name, area_name, city_name, pincode, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(address.id)
        .bind(address.user_id.as_str())
        .bind(&address.house_number)
        .bind(&address.street_name)
        .bind(&address.area_name)
        .bind(&address.city_name)
        .bind(&address.pincode)
        .bind(address.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| to_repository_error("address.save", e))?;

        Ok(())
    }

    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Address>, RepositoryError> {
        let entities = sqlx::query_as::<_, AddressEntity>(
            "SELECT id, user_id, house_number, street_name, area_name, city_name, pincode, created_at FROM address WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| to_repository_error("address.get_all", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
