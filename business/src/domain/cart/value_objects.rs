use serde::{Deserialize, Serialize};

/// Lifecycle of a cart entry. `Settled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartStatus {
    Active,
    Settled,
}

impl std::fmt::Display for CartStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartStatus::Active => write!(f, "active"),
            CartStatus::Settled => write!(f, "settled"),
        }
    }
}

impl std::str::FromStr for CartStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CartStatus::Active),
            "settled" => Ok(CartStatus::Settled),
            _ => Err(format!("Invalid cart status: {}", s)),
        }
    }
}

/// Result of removing a single entry. Removing twice is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    NotFound,
}
