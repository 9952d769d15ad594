use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::address::model::Address;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct AddressEntity {
    pub id: Uuid,
    pub user_id: String,
    pub house_number: String,
    pub street_name: String,
    pub area_name: String,
    pub city_name: String,
    pub pincode: String,
    pub created_at: DateTime<Utc>,
}

impl AddressEntity {
    pub fn into_domain(self) -> Address {
        Address::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.house_number,
            self.street_name,
            self.area_name,
            self.city_name,
            self.pincode,
            self.created_at,
        )
    }
}
