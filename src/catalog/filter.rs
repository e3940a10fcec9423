//! Product listing filters
//!
//! Parsed form of `?category=&price_min=&price_max=`.

use rust_decimal::Decimal;

use crate::error::{FieldErrors, Result};
use crate::models::requests::parse_decimal;
use crate::models::{Product, ProductListQuery};

/// Optional filters for a product listing; all present filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductFilter {
    /// Case-insensitive substring of the owning category's name
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub price_min: Option<Decimal>,
    /// Inclusive upper price bound
    pub price_max: Option<Decimal>,
}

impl ProductFilter {
    /// Parses query parameters. Empty values count as absent.
    pub fn from_query(query: ProductListQuery) -> Result<Self> {
        let mut errors = FieldErrors::new();
        let price_min = parse_bound("price_min", query.price_min, &mut errors);
        let price_max = parse_bound("price_max", query.price_max, &mut errors);
        errors.into_result()?;

        Ok(Self {
            category: non_empty(query.category),
            price_min,
            price_max,
        })
    }

    /// Applies the filters in order: category name, lower bound, upper bound.
    pub fn matches(&self, product: &Product, category_name: &str) -> bool {
        if let Some(needle) = &self.category {
            if !category_name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_bound(field: &str, raw: Option<String>, errors: &mut FieldErrors) -> Option<Decimal> {
    let raw = non_empty(raw)?;
    let parsed = parse_decimal(&raw);
    if parsed.is_none() {
        errors.add(field, "A valid number is required.");
    }
    parsed
}
