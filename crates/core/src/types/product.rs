//! Catalog products and the structural id capability.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::ProductId;
use super::price::Price;

/// Field names a product record may carry its id under, in lookup order.
pub const ID_FIELDS: &[&str] = &["Id", "id"];

/// Anything that can name the product it describes.
///
/// The wishlist accepts any record passing this check; no other product field
/// is inspected.
pub trait Identified {
    /// The product id, or `None` if the record carries no usable id.
    fn product_id(&self) -> Option<ProductId>;
}

impl Identified for Map<String, Value> {
    fn product_id(&self) -> Option<ProductId> {
        ID_FIELDS
            .iter()
            .find_map(|field| self.get(*field).and_then(ProductId::from_json))
    }
}

impl Identified for Value {
    fn product_id(&self) -> Option<ProductId> {
        self.as_object().and_then(Identified::product_id)
    }
}

impl Identified for Product {
    fn product_id(&self) -> Option<ProductId> {
        Some(self.id.clone())
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn product_id(&self) -> Option<ProductId> {
        (**self).product_id()
    }
}

/// A colour option offered for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "Id", alias = "id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<ProductColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether the product is discounted below its original price.
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// First image, used as the cart thumbnail.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identified_for_records() {
        let upper = serde_json::json!({ "Id": 3, "name": "Tee" });
        let lower = serde_json::json!({ "id": "3" });
        assert_eq!(upper.product_id(), lower.product_id());
        assert_eq!(upper.product_id().unwrap().as_str(), "3");
    }

    #[test]
    fn test_identified_rejects_missing_or_blank_ids() {
        assert!(serde_json::json!({ "name": "Tee" }).product_id().is_none());
        assert!(serde_json::json!({ "Id": "" }).product_id().is_none());
        assert!(serde_json::json!({ "Id": null }).product_id().is_none());
        assert!(serde_json::json!([1, 2]).product_id().is_none());
    }

    #[test]
    fn test_product_from_record() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "Id": 1,
            "name": "Linen Shirt",
            "description": "Breathable",
            "category": "Shirts",
            "price": 39.99,
            "originalPrice": 59.99,
            "sizes": ["S", "M"],
            "colors": [{ "name": "White", "hex": "#fff" }],
            "images": ["/img/linen.jpg"],
            "createdAt": "2024-03-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(product.id.as_str(), "1");
        assert!(product.on_sale());
        assert_eq!(product.primary_image(), Some("/img/linen.jpg"));
        assert!(!product.featured);
    }
}
