//! Cart line items and their identity key.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Identity of a cart line: the product plus its optional variant
/// discriminators.
///
/// Two lines with the same product but different sizes or colours are
/// distinct. An absent size only matches another absent size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl LineKey {
    /// Key for a product without variant discriminators.
    #[must_use]
    pub const fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            size: None,
            color: None,
        }
    }

    /// Set the size discriminator.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the colour discriminator.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Whether `item` carries this identity.
    #[must_use]
    pub fn matches(&self, item: &CartLineItem) -> bool {
        self.product_id == item.product_id && self.size == item.size && self.color == item.color
    }
}

/// A product line in the shopping cart, as persisted.
///
/// Serialized with camelCase keys; absent variant fields and image are
/// omitted rather than written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLineItem {
    /// The identity key of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// `price * quantity`, saturating at [`Price::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    /// `price * quantity`, or `None` if the line total is not representable.
    #[must_use]
    pub fn checked_line_total(&self) -> Option<Price> {
        self.price.checked_times(self.quantity)
    }
}

/// Request to put one unit of a product into the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub size: Option<String>,
    pub color: Option<String>,
    pub image: Option<String>,
}

impl NewCartItem {
    /// A new item without variants or image.
    #[must_use]
    pub fn new(product_id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            size: None,
            color: None,
            image: None,
        }
    }

    /// Set the size discriminator.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the colour discriminator.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The identity key this item will be stored under.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// Convert into a stored line with quantity 1.
    #[must_use]
    pub fn into_line(self) -> CartLineItem {
        CartLineItem {
            product_id: self.product_id,
            name: self.name,
            price: self.price,
            quantity: 1,
            size: self.size,
            color: self.color,
            image: self.image,
        }
    }
}
