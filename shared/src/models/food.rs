//! Food Model

use serde::{Deserialize, Serialize};

/// Menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Food {
    pub food_id: i64,
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub food_type: Option<String>,
    pub status: Option<String>,
    /// Image path or URL
    pub image: Option<String>,
}

/// Create food payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub food_type: Option<String>,
    pub status: Option<String>,
    pub image: Option<String>,
}

/// Update food payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub discount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub food_type: Option<String>,
    pub status: Option<String>,
    pub image: Option<String>,
}

/// A price is usable when it is finite and not negative.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_defaults_discount() {
        let data: FoodCreate = serde_json::from_str(r#"{"name":"Fries","price":3.5}"#).unwrap();
        assert_eq!(data.name, "Fries");
        assert_eq!(data.price, 3.5);
        assert_eq!(data.discount, 0.0);
        assert!(data.category.is_none());
    }

    #[test]
    fn price_validation() {
        assert!(is_valid_price(0.0));
        assert!(is_valid_price(12.75));
        assert!(!is_valid_price(-1.0));
        assert!(!is_valid_price(f64::NAN));
        assert!(!is_valid_price(f64::INFINITY));
    }
}
