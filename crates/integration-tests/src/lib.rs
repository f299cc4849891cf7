//! Integration tests for StyleHub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stylehub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart state surviving reconstruction on every backend
//! - `wishlist_persistence` - Wishlist state surviving reconstruction
//! - `session` - Full sessions composed from configuration
//! - `checkout` - Placing orders from the cart, order history, and reviews

use std::path::Path;

use stylehub_core::{NewCartItem, Price, ProductId, ShippingAddress};
use stylehub_storefront::config::{StorageBackend, StorefrontConfig};

/// A cart item built from plain test values.
///
/// # Panics
///
/// Panics if `cents` is negative.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn item(id: i64, name: &str, cents: i64) -> NewCartItem {
    NewCartItem::new(ProductId::from(id), name, Price::from_cents(cents).unwrap())
}

/// File-backed configuration rooted at `dir`.
#[must_use]
pub fn file_config(dir: &Path) -> StorefrontConfig {
    StorefrontConfig {
        storage: StorageBackend::File,
        data_dir: dir.to_path_buf(),
        ..StorefrontConfig::default()
    }
}

/// A small catalog in the record API's shape.
pub const CATALOG_JSON: &str = r#"[
    {"Id": 1, "name": "Linen Shirt", "description": "Breathable", "category": "Shirts",
     "price": 39.99, "originalPrice": 59.99, "sizes": ["S", "M", "L"],
     "colors": [{"name": "White"}, {"name": "Blue"}], "featured": true,
     "images": "[\"/img/linen-1.jpg\", \"/img/linen-2.jpg\"]"},
    {"Id": 2, "name": "Oxford Shirt", "category": "Shirts", "price": 49.5,
     "sizes": ["M"], "colors": [{"name": "Blue"}], "images": "/img/oxford.jpg"},
    {"Id": 3, "name": "Chinos", "category": "Pants", "price": 60,
     "sizes": ["30", "32"], "colors": [{"name": "Khaki"}], "images": null}
]"#;

/// A complete US shipping address for `email`.
#[must_use]
pub fn shipping_address(email: &str) -> ShippingAddress {
    ShippingAddress {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        phone: None,
        address: "1 Analytical Way".to_string(),
        apartment: Some("Apt 2".to_string()),
        city: "New York".to_string(),
        state: "NY".to_string(),
        zip_code: "10001".to_string(),
        country: "US".to_string(),
    }
}

/// Past orders for two customers, in the shape the order book stores.
pub const ORDERS_JSON: &str = r#"[
    {"Id": 1, "orderNumber": "ORD-2024-00001", "userEmail": "ada@example.com",
     "items": [{"productId": 3, "name": "Chinos", "price": "60.00", "quantity": 1}],
     "subtotal": "60.00", "shipping": "8.99", "tax": "5.40", "total": "74.39",
     "status": "delivered", "paymentMethod": "Credit Card",
     "createdAt": "2024-01-05T09:00:00Z", "deliveredAt": "2024-01-09T15:30:00Z"},
    {"Id": 2, "orderNumber": "ORD-2024-00002", "userEmail": "grace@example.com",
     "items": [{"productId": 2, "name": "Oxford Shirt", "price": "49.50", "quantity": 1}],
     "subtotal": "49.50", "shipping": "8.99", "tax": "4.46", "total": "62.95",
     "status": "shipped", "createdAt": "2024-02-01T09:00:00Z"}
]"#;

/// Existing reviews of the catalog products.
pub const REVIEWS_JSON: &str = r#"[
    {"Id": 1, "productId": 2, "userEmail": "grace@example.com", "userName": "Grace",
     "rating": 4, "comment": "Crisp collar", "createdAt": "2024-02-10T09:00:00Z",
     "verified": true},
    {"Id": 2, "productId": 2, "userEmail": "alan@example.com",
     "rating": 5, "createdAt": "2024-02-12T09:00:00Z"},
    {"Id": 3, "productId": 2, "userEmail": "edsger@example.com",
     "rating": 4, "createdAt": "2024-02-14T09:00:00Z"}
]"#;
