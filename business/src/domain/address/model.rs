use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::AddressError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: Uuid,
    pub user_id: UserId,
    pub house_number: String,
    pub street_name: String,
    pub area_name: String,
    pub city_name: String,
    pub pincode: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewAddressProps {
    pub user_id: UserId,
    pub house_number: String,
    pub street_name: String,
    pub area_name: String,
    pub city_name: String,
    pub pincode: String,
}

impl Address {
    pub fn new(props: NewAddressProps) -> Result<Self, AddressError> {
        let fields = [
            ("house_number", &props.house_number),
            ("street_name", &props.street_name),
            ("area_name", &props.area_name),
            ("city_name", &props.city_name),
            ("pincode", &props.pincode),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AddressError::FieldEmpty { field: *field });
        }

        let pincode = props.pincode.trim().to_string();
        if !is_valid_pincode(&pincode) {
            return Err(AddressError::InvalidPincode);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            house_number: props.house_number.trim().to_string(),
            street_name: props.street_name.trim().to_string(),
            area_name: props.area_name.trim().to_string(),
            city_name: props.city_name.trim().to_string(),
            pincode,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        house_number: String,
        street_name: String,
        area_name: String,
        city_name: String,
        pincode: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            house_number,
            street_name,
            area_name,
            city_name,
            pincode,
            created_at,
        }
    }
}

/// Six digits, first one non-zero.
fn is_valid_pincode(pincode: &str) -> bool {
    regex::Regex::new(r"^[1-9][0-9]{5}$")
        .map(|re| re.is_match(pincode))
        .unwrap_or(false)
}
