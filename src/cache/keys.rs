//! Cache key scheme
//!
//! Category listings live under one fixed key. Product listings get one key
//! per filter combination, all under a shared prefix so a write can sweep
//! them together.

use crate::catalog::ProductFilter;

/// Key holding the full category listing
pub const CATEGORIES_KEY: &str = "store:categories";

/// Namespace shared by every product listing key
pub const PRODUCTS_PREFIX: &str = "store:products:";

/// Builds the key for a product listing.
///
/// Layout is `store:products:{category}:{price_min}:{price_max}` with empty
/// components for absent filters. Price bounds are normalized decimals and
/// never contain `:`, so the layout stays unambiguous even when the category
/// text does.
pub fn product_list_key(filter: &ProductFilter) -> String {
    let bound = |b: Option<rust_decimal::Decimal>| {
        b.map(|d| d.normalize().to_string()).unwrap_or_default()
    };

    format!(
        "{}{}:{}:{}",
        PRODUCTS_PREFIX,
        filter.category.as_deref().unwrap_or_default(),
        bound(filter.price_min),
        bound(filter.price_max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Option<Decimal> {
        Some(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_unfiltered_key() {
        assert_eq!(
            product_list_key(&ProductFilter::default()),
            "store:products:::"
        );
    }

    #[test]
    fn test_full_key() {
        let filter = ProductFilter {
            category: Some("shoe".to_string()),
            price_min: dec("10"),
            price_max: dec("20.50"),
        };
        assert_eq!(product_list_key(&filter), "store:products:shoe:10:20.5");
    }

    #[test]
    fn test_position_distinguishes_bounds() {
        let min_only = ProductFilter {
            price_min: dec("10"),
            ..ProductFilter::default()
        };
        let max_only = ProductFilter {
            price_max: dec("10"),
            ..ProductFilter::default()
        };
        assert_ne!(product_list_key(&min_only), product_list_key(&max_only));
    }

    #[test]
    fn test_equivalent_bounds_share_key() {
        let a = ProductFilter {
            price_min: dec("10"),
            ..ProductFilter::default()
        };
        let b = ProductFilter {
            price_min: dec("10.00"),
            ..ProductFilter::default()
        };
        assert_eq!(product_list_key(&a), product_list_key(&b));
    }

    #[test]
    fn test_every_product_key_is_under_prefix() {
        let filter = ProductFilter {
            category: Some("a:b".to_string()),
            ..ProductFilter::default()
        };
        assert!(product_list_key(&filter).starts_with(PRODUCTS_PREFIX));
        assert!(!CATEGORIES_KEY.starts_with(PRODUCTS_PREFIX));
    }
}
