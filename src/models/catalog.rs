//! Catalog entities
//!
//! The records held by the catalog store and returned by the API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A product belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Serialized as a string to keep the decimal exact
    pub price: Decimal,
    /// Id of the owning category
    pub category: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated category fields, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryData {
    pub name: String,
    pub description: Option<String>,
}

/// Validated product fields, ready to persist.
///
/// The category reference is checked against the store on write.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_product_price_serializes_as_string() {
        let now = Utc::now();
        let product = Product {
            id: 1,
            name: "Sneaker".to_string(),
            description: None,
            price: Decimal::from_str("15.00").unwrap(),
            category: 2,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "15.00");
        assert_eq!(json["category"], 2);
    }

    #[test]
    fn test_category_survives_cache_encoding() {
        let category = Category {
            id: 4,
            name: "Shoes".to_string(),
            description: Some("Footwear".to_string()),
            created_at: Utc::now(),
        };

        let encoded = serde_json::to_string(&vec![category.clone()]).unwrap();
        let decoded: Vec<Category> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, vec![category]);
    }
}
