//! Placed orders and their shipping details.
//!
//! An order freezes the cart lines and the checkout totals at the moment it
//! was placed. Later price changes in the catalog never touch it.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::error::InvalidInputError;
use super::id::{OrderId, ProductId};
use super::line::CartLineItem;
use super::price::Price;

/// Order fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The wire name of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Position on the processing, shipped, delivered track. Cancelled
    /// orders are off the track.
    const fn stage(self) -> Option<usize> {
        match self {
            Self::Processing => Some(0),
            Self::Shipped => Some(1),
            Self::Delivered => Some(2),
            Self::Cancelled => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

/// Money owed for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

fn default_country() -> String {
    "US".to_owned()
}

/// Where an order ships to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default = "default_country")]
    pub country: String,
}

impl ShippingAddress {
    /// Check that every required field is filled in and the email parses.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::MissingField`] naming the first blank
    /// required field, or [`InvalidInputError::InvalidEmail`].
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(InvalidInputError::MissingField(*field));
        }
        Email::parse(&self.email)?;
        Ok(())
    }

    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }
}

/// A placed order, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "Id", alias = "id")]
    pub id: OrderId,
    pub order_number: String,
    pub user_email: Email,
    pub items: Vec<CartLineItem>,
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Order {
    /// The money fields of this order.
    #[must_use]
    pub const fn totals(&self) -> OrderTotals {
        OrderTotals {
            subtotal: self.subtotal,
            shipping: self.shipping,
            tax: self.tax,
            total: self.total,
        }
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Whether any line of this order is for `product_id`.
    #[must_use]
    pub fn contains_product(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.product_id == product_id)
    }

    /// Case-insensitive match of `query` against the order number or any
    /// item name. A blank query matches everything.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.order_number.to_lowercase().contains(&query)
            || self
                .items
                .iter()
                .any(|item| item.name.to_lowercase().contains(&query))
    }

    /// Progress along the processing, shipped, delivered track.
    ///
    /// Every stage up to the current status is complete. A cancelled order
    /// has no completed stages.
    #[must_use]
    pub fn tracking_steps(&self) -> [TrackingStep; 3] {
        let reached = self.status.stage();
        let done = |stage: usize| reached.is_some_and(|r| stage <= r);
        let shipped_at = (self.status == OrderStatus::Shipped && self.delivered_at.is_none())
            .then_some(self.created_at);
        [
            TrackingStep {
                status: OrderStatus::Processing,
                completed: done(0),
                date: Some(self.created_at),
            },
            TrackingStep {
                status: OrderStatus::Shipped,
                completed: done(1),
                date: shipped_at,
            },
            TrackingStep {
                status: OrderStatus::Delivered,
                completed: done(2),
                date: self.delivered_at,
            },
        ]
    }
}

/// One stage of an order's delivery track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackingStep {
    pub status: OrderStatus,
    pub completed: bool,
    pub date: Option<DateTime<Utc>>,
}

/// Everything needed to place an order; the store assigns the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_email: Email,
    pub items: Vec<CartLineItem>,
    pub totals: OrderTotals,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
}
