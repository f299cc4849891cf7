//! Product list filtering and ordering.
//!
//! Filters combine conjunctively. Empty lists and `None` bounds do not
//! restrict the result.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use stylehub_core::{Price, Product};

/// Sort orders offered by the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    PriceLow,
    PriceHigh,
    Name,
    Rating,
    Newest,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PriceLow => write!(f, "price-low"),
            Self::PriceHigh => write!(f, "price-high"),
            Self::Name => write!(f, "name"),
            Self::Rating => write!(f, "rating"),
            Self::Newest => write!(f, "newest"),
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "name" => Ok(Self::Name),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

/// Shop page filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    pub categories: Vec<String>,
    pub search: Option<String>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub sale: bool,
    pub sort_by: Option<SortBy>,
}

impl ProductFilter {
    /// Whether `product` passes every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }

        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = [&product.name, &product.description, &product.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| product.price < min)
            || self.max_price.is_some_and(|max| product.price > max)
        {
            return false;
        }

        if !self.sizes.is_empty() && !product.sizes.iter().any(|s| self.sizes.contains(s)) {
            return false;
        }

        if !self.colors.is_empty()
            && !product.colors.iter().any(|c| self.colors.contains(&c.name))
        {
            return false;
        }

        !self.sale || product.on_sale()
    }

    /// Filter and sort `products`.
    #[must_use]
    pub fn apply<'a, I>(&self, products: I) -> Vec<Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut out: Vec<Product> = products
            .into_iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        if let Some(sort_by) = self.sort_by {
            sort_products(&mut out, sort_by);
        }
        out
    }
}

/// Stable in-place sort by `sort_by`.
pub fn sort_products(products: &mut [Product], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortBy::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortBy::Name => products.sort_by_cached_key(|p| p.name.to_lowercase()),
        SortBy::Rating => products.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0))
        }),
        SortBy::Newest => products.sort_by(|a, b| match (a.created_at, b.created_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn products() -> Vec<Product> {
        serde_json::from_value(json!([
            {
                "Id": 1, "name": "Linen Shirt", "description": "Breathable summer shirt",
                "category": "Shirts", "price": 40, "originalPrice": 60,
                "sizes": ["S", "M"], "colors": [{ "name": "White" }],
                "rating": 4.5, "createdAt": "2024-01-01T00:00:00Z"
            },
            {
                "Id": 2, "name": "denim jacket", "description": "Heavy cotton",
                "category": "Outerwear", "price": 120,
                "sizes": ["M", "L"], "colors": [{ "name": "Blue" }],
                "rating": 4.8, "createdAt": "2024-06-01T00:00:00Z"
            },
            {
                "Id": 3, "name": "Basic Tee", "description": "Everyday shirt",
                "category": "Shirts", "price": 15,
                "sizes": ["XS"], "colors": [{ "name": "Blue" }, { "name": "Black" }]
            }
        ]))
        .unwrap()
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let all = products();
        assert_eq!(ids(&ProductFilter::default().apply(&all)), ["1", "2", "3"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let all = products();
        let filter = ProductFilter {
            search: Some("SHIRT".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&all)), ["1", "3"]);

        let filter = ProductFilter {
            search: Some("outer".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&all)), ["2"]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let all = products();
        let filter = ProductFilter {
            min_price: Some(Price::from_cents(1500).unwrap()),
            max_price: Some(Price::from_cents(4000).unwrap()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&all)), ["1", "3"]);
    }

    #[test]
    fn test_filters_combine() {
        let all = products();
        let filter = ProductFilter {
            categories: vec!["Shirts".to_string()],
            colors: vec!["Blue".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&all)), ["3"]);

        let filter = ProductFilter {
            sizes: vec!["M".to_string()],
            sale: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&all)), ["1"]);
    }

    #[test]
    fn test_sort_orders() {
        let all = products();
        let sorted = |sort_by| {
            let filter = ProductFilter {
                sort_by: Some(sort_by),
                ..Default::default()
            };
            ids(&filter.apply(&all))
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        assert_eq!(sorted(SortBy::PriceLow), ["3", "1", "2"]);
        assert_eq!(sorted(SortBy::PriceHigh), ["2", "1", "3"]);
        assert_eq!(sorted(SortBy::Name), ["3", "2", "1"]);
        assert_eq!(sorted(SortBy::Rating), ["2", "1", "3"]);
        assert_eq!(sorted(SortBy::Newest), ["2", "1", "3"]);
    }

    #[test]
    fn test_sort_by_parse() {
        assert_eq!("price-low".parse::<SortBy>().unwrap(), SortBy::PriceLow);
        assert_eq!(SortBy::Newest.to_string(), "newest");
        assert!("cheapest".parse::<SortBy>().is_err());
    }
}
