use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::address::model::Address;

#[derive(Debug, Clone, Object)]
pub struct CreateAddressRequest {
    pub house_number: String,
    pub street_name: String,
    pub area_name: String,
    pub city_name: String,
    /// Six digits, not starting with zero
    pub pincode: String,
}

#[derive(Debug, Clone, Object)]
pub struct AddressResponse {
    pub id: Uuid,
    pub house_number: String,
    pub street_name: String,
    pub area_name: String,
    pub city_name: String,
    pub pincode: String,
    pub created_at: DateTime<Utc>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            house_number: address.house_number,
            street_name: address.street_name,
            area_name: address.area_name,
            city_name: address.city_name,
            pincode: address.pincode,
            created_at: address.created_at,
        }
    }
}
