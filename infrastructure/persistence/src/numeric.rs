use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};

use business::domain::errors::RepositoryError;

/// Money and rates live as `NUMERIC` in the store and `f64` in the domain.
pub fn to_numeric(value: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(value)
        .map(|v| v.round(2))
        .ok_or(RepositoryError::Persistence)
}

pub fn from_numeric(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
