use serde::{Deserialize, Serialize};

/// Opaque identifier of the customer, as forwarded by the identity provider.
/// Every cart, order and address row is scoped by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Bounds of a money column stored as `NUMERIC(10, 2)`.
pub const MIN_MONEY: f64 = 0.01;
pub const MAX_MONEY: f64 = 99_999_999.99;

/// Whether `value` survives rounding to cents without becoming zero or
/// overflowing the column.
pub fn is_storable_money(value: f64) -> bool {
    value.is_finite() && (MIN_MONEY..=MAX_MONEY).contains(&value)
}
