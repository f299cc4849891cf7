//! Order gateway.
//!
//! Orders are placed from the cart at checkout and read back by the order
//! history and tracking views. [`MockOrders`] keeps them in memory, seeded
//! from an optional fixture file.

mod mock;

use std::future::Future;

use stylehub_core::{Email, InvalidInputError, NewOrder, Order, OrderId, OrderStatus, ProductId};
use thiserror::Error;

use crate::fixture::FixtureError;

pub use mock::MockOrders;

/// Days from placement to the estimated delivery date.
pub const ESTIMATED_DELIVERY_DAYS: u64 = 7;

/// Errors raised by an order gateway.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order with this id.
    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// Checkout was attempted with nothing in the cart.
    #[error("cannot place an order for an empty cart")]
    EmptyCart,

    /// The order is missing required details.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// The order source could not be loaded.
    #[error("orders: {0}")]
    Fixture(#[from] FixtureError),
}

/// Order history filter: free-text search plus an optional status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub search: String,
    pub status: Option<OrderStatus>,
}

impl OrderQuery {
    /// Whether `order` passes both the search and the status filter.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        self.status.is_none_or(|status| order.status == status) && order.matches_search(&self.search)
    }
}

/// Read and place orders.
pub trait OrderGateway: Send + Sync {
    /// Orders placed by `email`, newest first.
    fn user_orders(
        &self,
        email: &Email,
    ) -> impl Future<Output = Result<Vec<Order>, OrderError>> + Send;

    /// A single order.
    ///
    /// Fails with [`OrderError::NotFound`] for unknown ids.
    fn order(&self, id: OrderId) -> impl Future<Output = Result<Order, OrderError>> + Send;

    /// Record a new order and return it with its assigned id and number.
    fn place(&self, order: NewOrder) -> impl Future<Output = Result<Order, OrderError>> + Send;

    /// Orders placed by `email` passing `query`, newest first.
    fn search(
        &self,
        email: &Email,
        query: &OrderQuery,
    ) -> impl Future<Output = Result<Vec<Order>, OrderError>> + Send {
        async move {
            let mut orders = self.user_orders(email).await?;
            orders.retain(|order| query.matches(order));
            Ok(orders)
        }
    }

    /// Whether any order placed by `email` contains `product_id`.
    fn has_purchased(
        &self,
        email: &Email,
        product_id: &ProductId,
    ) -> impl Future<Output = Result<bool, OrderError>> + Send {
        async move {
            let orders = self.user_orders(email).await?;
            Ok(orders.iter().any(|order| order.contains_product(product_id)))
        }
    }
}
