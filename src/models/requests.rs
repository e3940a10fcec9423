//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.
//! Payload fields are optional on the wire so that missing fields surface as
//! field-level validation errors rather than body-parse failures.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{FieldErrors, Result};
use crate::models::{CategoryData, ProductData};

/// Maximum length of a name field
pub const MAX_NAME_LENGTH: usize = 255;

/// Decimal places allowed on a price
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Total digits allowed on a price
pub const PRICE_MAX_DIGITS: u32 = 10;

const REQUIRED: &str = "This field is required.";

/// Request body for POST /categories and PUT /categories/:id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CategoryPayload {
    /// Validates the payload into persistable fields.
    pub fn validate(self) -> Result<CategoryData> {
        let mut errors = FieldErrors::new();
        let name = validate_name(self.name, &mut errors);
        errors.into_result()?;

        Ok(CategoryData {
            name: name.unwrap_or_default(),
            description: self.description,
        })
    }
}

/// Request body for POST /products and PUT /products/:id
///
/// `price` accepts a JSON number or a numeric string; `category` accepts a
/// category id as a number or numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
}

impl ProductPayload {
    /// Validates the payload into persistable fields.
    ///
    /// Whether `category` refers to an existing category is checked by the
    /// catalog store when the write happens.
    pub fn validate(self) -> Result<ProductData> {
        let mut errors = FieldErrors::new();
        let name = validate_name(self.name, &mut errors);
        let price = validate_price(self.price, &mut errors);
        let category = validate_category_ref(self.category, &mut errors);
        errors.into_result()?;

        match (name, price, category) {
            (Some(name), Some(price), Some(category)) => Ok(ProductData {
                name,
                description: self.description,
                price,
                category,
            }),
            // every None above recorded an error
            _ => Err(crate::error::CatalogError::Internal(
                "product validation lost a field error".to_string(),
            )),
        }
    }
}

/// Query string for GET /products
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
}

impl ProductListQuery {
    /// Picks the filter parameters out of decoded query pairs.
    ///
    /// A repeated parameter takes its last value; unknown parameters are
    /// ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (name, value) in pairs {
            match name.as_str() {
                "category" => query.category = Some(value),
                "price_min" => query.price_min = Some(value),
                "price_max" => query.price_max = Some(value),
                _ => {}
            }
        }
        query
    }
}

fn validate_name(name: Option<String>, errors: &mut FieldErrors) -> Option<String> {
    match name {
        None => {
            errors.add("name", REQUIRED);
            None
        }
        Some(name) if name.trim().is_empty() => {
            errors.add("name", "This field may not be blank.");
            None
        }
        Some(name) if name.chars().count() > MAX_NAME_LENGTH => {
            errors.add(
                "name",
                format!(
                    "Ensure this field has no more than {} characters.",
                    MAX_NAME_LENGTH
                ),
            );
            None
        }
        Some(name) => Some(name),
    }
}

/// Parses a decimal from user input, accepting plain and scientific notation.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn validate_price(price: Option<Value>, errors: &mut FieldErrors) -> Option<Decimal> {
    let parsed = match price {
        None | Some(Value::Null) => {
            errors.add("price", REQUIRED);
            return None;
        }
        Some(Value::Number(n)) => parse_decimal(&n.to_string()),
        Some(Value::String(s)) => parse_decimal(&s),
        Some(_) => None,
    };

    let Some(price) = parsed else {
        errors.add("price", "A valid number is required.");
        return None;
    };

    let mut valid = true;
    if price.is_sign_negative() && !price.is_zero() {
        errors.add("price", "Ensure this value is greater than or equal to 0.");
        valid = false;
    }

    let normalized = price.normalize();
    if normalized.scale() > PRICE_DECIMAL_PLACES {
        errors.add(
            "price",
            format!(
                "Ensure that there are no more than {} decimal places.",
                PRICE_DECIMAL_PLACES
            ),
        );
        valid = false;
    }

    let whole_digits = PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES;
    if normalized.abs().trunc() >= Decimal::from(10u64.pow(whole_digits)) {
        errors.add(
            "price",
            format!(
                "Ensure that there are no more than {} digits before the decimal point.",
                whole_digits
            ),
        );
        valid = false;
    }

    if !valid {
        return None;
    }

    let mut price = normalized;
    price.rescale(PRICE_DECIMAL_PLACES);
    Some(price)
}

fn validate_category_ref(category: Option<Value>, errors: &mut FieldErrors) -> Option<u64> {
    let id = match category {
        None | Some(Value::Null) => {
            errors.add("category", REQUIRED);
            return None;
        }
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    };

    if id.is_none() {
        errors.add("category", "Incorrect type. Expected pk value.");
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use serde_json::json;

    fn product_payload(value: Value) -> ProductPayload {
        serde_json::from_value(value).unwrap()
    }

    fn field_errors(result: Result<ProductData>) -> FieldErrors {
        match result {
            Err(CatalogError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_category_payload_valid() {
        let payload: CategoryPayload =
            serde_json::from_str(r#"{"name": "Shoes", "description": "Footwear"}"#).unwrap();
        let data = payload.validate().unwrap();
        assert_eq!(data.name, "Shoes");
        assert_eq!(data.description.as_deref(), Some("Footwear"));
    }

    #[test]
    fn test_category_payload_missing_name() {
        let payload: CategoryPayload = serde_json::from_str("{}").unwrap();
        match payload.validate() {
            Err(CatalogError::Validation(errors)) => {
                assert_eq!(errors.get("name").unwrap(), [REQUIRED.to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_category_payload_blank_or_long_name() {
        let blank = CategoryPayload {
            name: Some("   ".to_string()),
            description: None,
        };
        assert!(blank.validate().is_err());

        let long = CategoryPayload {
            name: Some("x".repeat(MAX_NAME_LENGTH + 1)),
            description: None,
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_product_payload_valid_number_price() {
        let data = product_payload(json!({"name": "Sneaker", "price": 15, "category": 1}))
            .validate()
            .unwrap();
        assert_eq!(data.price.to_string(), "15.00");
        assert_eq!(data.category, 1);
    }

    #[test]
    fn test_product_payload_valid_string_price_and_category() {
        let data = product_payload(json!({"name": "Boot", "price": "24.5", "category": "3"}))
            .validate()
            .unwrap();
        assert_eq!(data.price.to_string(), "24.50");
        assert_eq!(data.category, 3);
    }

    #[test]
    fn test_product_payload_reports_every_missing_field() {
        let errors = field_errors(product_payload(json!({})).validate());
        assert!(errors.contains("name"));
        assert!(errors.contains("price"));
        assert!(errors.contains("category"));
    }

    #[test]
    fn test_product_payload_negative_price() {
        let errors = field_errors(
            product_payload(json!({"name": "x", "price": -1, "category": 1})).validate(),
        );
        assert!(errors.contains("price"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_product_payload_too_many_decimal_places() {
        let errors = field_errors(
            product_payload(json!({"name": "x", "price": "1.999", "category": 1})).validate(),
        );
        assert!(errors.contains("price"));
    }

    #[test]
    fn test_product_payload_trailing_zeros_allowed() {
        let data = product_payload(json!({"name": "x", "price": "1.500", "category": 1}))
            .validate()
            .unwrap();
        assert_eq!(data.price.to_string(), "1.50");
    }

    #[test]
    fn test_product_payload_too_many_digits() {
        let errors = field_errors(
            product_payload(json!({"name": "x", "price": "123456789", "category": 1}))
                .validate(),
        );
        assert!(errors.contains("price"));
    }

    #[test]
    fn test_product_payload_bad_types() {
        let errors = field_errors(
            product_payload(json!({"name": "x", "price": "cheap", "category": "shoes"}))
                .validate(),
        );
        assert!(errors.contains("price"));
        assert!(errors.contains("category"));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_list_query_from_pairs() {
        let query = ProductListQuery::from_pairs(pairs(&[
            ("category", "shoe"),
            ("price_min", "10"),
            ("page", "2"),
        ]));
        assert_eq!(query.category.as_deref(), Some("shoe"));
        assert_eq!(query.price_min.as_deref(), Some("10"));
        assert!(query.price_max.is_none());
    }

    #[test]
    fn test_list_query_repeated_parameter_takes_last() {
        let query =
            ProductListQuery::from_pairs(pairs(&[("price_min", "1"), ("price_min", "2")]));
        assert_eq!(query.price_min.as_deref(), Some("2"));
    }
}
