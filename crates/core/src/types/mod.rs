//! Core types for the StyleHub storefront.
//!
//! This module provides type-safe wrappers for product identity, prices, cart
//! lines, wishlist snapshots, orders, and reviews.

pub mod email;
pub mod error;
pub mod id;
pub mod line;
pub mod order;
pub mod price;
pub mod product;
pub mod review;
pub mod wishlist;

pub use email::{Email, EmailError};
pub use error::InvalidInputError;
pub use id::{OrderId, ProductId, ReviewId};
pub use line::{CartLineItem, LineKey, NewCartItem};
pub use order::{NewOrder, Order, OrderStatus, OrderTotals, ShippingAddress, TrackingStep};
pub use price::Price;
pub use product::{ID_FIELDS, Identified, Product, ProductColor};
pub use review::{NewReview, Rating, Review, ReviewStats, ReviewUpdate};
pub use wishlist::WishlistEntry;
