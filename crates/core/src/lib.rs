//! StyleHub Core - Shared types library.
//!
//! This crate provides common types used across all StyleHub components:
//! - `storefront` - Cart and wishlist state, persistence, and the catalog gateway
//! - `cli` - Command-line entry point driving the storefront state
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no gateways. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, cart lines, products, wishlist entries,
//!   orders, and reviews

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
