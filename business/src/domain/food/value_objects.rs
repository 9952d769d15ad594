use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    Veg,
    NonVeg,
}

impl std::fmt::Display for FoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodType::Veg => write!(f, "veg"),
            FoodType::NonVeg => write!(f, "non_veg"),
        }
    }
}

impl std::str::FromStr for FoodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(FoodType::Veg),
            "non_veg" => Ok(FoodType::NonVeg),
            _ => Err(format!("Invalid food type: {}", s)),
        }
    }
}

/// The closed set of food columns a restaurant may change.
///
/// Each variant maps to exactly one parameterized statement in the store
/// adapter; there is no way to address an arbitrary column.
#[derive(Debug, Clone, PartialEq)]
pub enum FoodUpdate {
    Name(String),
    Rate(f64),
    FoodType(FoodType),
    Quantity(i32),
}
