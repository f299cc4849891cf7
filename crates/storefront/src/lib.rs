//! StyleHub Storefront - cart, wishlist, checkout, and gateway state.
//!
//! # Architecture
//!
//! - [`storage`] - Fail-open JSON persistence over a key-value backend
//! - [`cart`] - Cart lines, derived totals, and the sidebar flag
//! - [`wishlist`] - Saved product snapshots
//! - [`checkout`] - Shipping and tax rules over the cart
//! - [`catalog`] - Product gateway trait and the in-memory mock
//! - [`orders`] - Order gateway trait and the in-memory order book
//! - [`reviews`] - Review gateway trait and the in-memory review store
//! - [`fixture`] - JSON fixture loading shared by the mocks
//! - [`state`] - Composition of the above for one session
//!
//! State modules are synchronous and single-owner: mutations take `&mut self`
//! and write through to storage before returning. Only the gateways are
//! async.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod fixture;
pub mod orders;
pub mod reviews;
pub mod state;
pub mod storage;
pub mod wishlist;

pub use cart::CartState;
pub use checkout::CheckoutRules;
pub use config::StorefrontConfig;
pub use error::AppError;
pub use state::{AppState, AppStore};
pub use wishlist::WishlistState;
