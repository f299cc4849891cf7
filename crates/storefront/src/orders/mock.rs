//! In-memory order book.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Days, Utc};
use stylehub_core::{Email, NewOrder, Order, OrderId, OrderStatus};
use tokio::sync::RwLock;

use super::{ESTIMATED_DELIVERY_DAYS, OrderError, OrderGateway};
use crate::fixture::{decode_records, read_fixture};

/// Orders held in memory.
///
/// Clones share the same order list, so an order placed through one handle
/// is visible through every other.
#[derive(Debug, Clone, Default)]
pub struct MockOrders {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl MockOrders {
    /// Build an order book from existing orders.
    #[must_use]
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: Arc::new(RwLock::new(orders)),
        }
    }

    /// Parse a JSON array of order records.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Fixture`] if the input is not an array of
    /// orders.
    pub fn from_json(raw: &str) -> Result<Self, OrderError> {
        Ok(Self::new(decode_records(raw, |_| {})?))
    }

    /// Load an order fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Fixture`] if the file cannot be read or parsed.
    pub async fn from_path(path: &Path) -> Result<Self, OrderError> {
        let orders = Self::from_json(&read_fixture(path).await?)?;
        let count = orders.len().await;
        tracing::info!(path = %path.display(), orders = count, "Orders loaded");
        Ok(orders)
    }

    /// Number of orders.
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Whether no orders have been placed.
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

fn order_number(id: OrderId, placed_at: DateTime<Utc>) -> String {
    format!("ORD-{}-{:05}", placed_at.year(), id.as_u32())
}

impl OrderGateway for MockOrders {
    async fn user_orders(&self, email: &Email) -> Result<Vec<Order>, OrderError> {
        let mut orders: Vec<Order> = self
            .orders
            .read()
            .await
            .iter()
            .filter(|order| &order.user_email == email)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .read()
            .await
            .iter()
            .find(|order| order.id == id)
            .cloned()
            .ok_or(OrderError::NotFound(id))
    }

    async fn place(&self, order: NewOrder) -> Result<Order, OrderError> {
        if order.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        order.shipping_address.validate()?;

        let mut orders = self.orders.write().await;
        let id = orders
            .iter()
            .map(|o| o.id)
            .max()
            .map_or(OrderId::new(1), |last| last.next());
        let now = Utc::now();

        let placed = Order {
            id,
            order_number: order_number(id, now),
            user_email: order.user_email,
            items: order.items,
            subtotal: order.totals.subtotal,
            shipping: order.totals.shipping,
            tax: order.totals.tax,
            total: order.totals.total,
            status: OrderStatus::Processing,
            shipping_address: Some(order.shipping_address),
            payment_method: Some(order.payment_method),
            created_at: now,
            estimated_delivery: now.checked_add_days(Days::new(ESTIMATED_DELIVERY_DAYS)),
            delivered_at: None,
        };
        orders.push(placed.clone());

        tracing::info!(
            order_id = %placed.id,
            order_number = %placed.order_number,
            total = %placed.total,
            "Order placed"
        );
        Ok(placed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stylehub_core::{OrderTotals, Price, ProductId, ShippingAddress};

    use super::*;
    use crate::fixture::FixtureError;
    use crate::orders::OrderQuery;

    const ORDERS_JSON: &str = r#"[
        {"Id": 1, "orderNumber": "ORD-2024-00001", "userEmail": "ada@example.com",
         "items": [{"productId": 7, "name": "Linen Shirt", "price": "40.00", "quantity": 1}],
         "subtotal": "40.00", "shipping": "8.99", "tax": "3.60", "total": "52.59",
         "status": "delivered", "createdAt": "2024-01-05T09:00:00Z",
         "deliveredAt": "2024-01-09T15:30:00Z"},
        {"Id": 2, "orderNumber": "ORD-2024-00002", "userEmail": "bob@example.com",
         "items": [{"productId": 9, "name": "Wool Scarf", "price": "15.00", "quantity": 2}],
         "subtotal": "30.00", "shipping": "8.99", "tax": "2.70", "total": "41.69",
         "createdAt": "2024-02-01T09:00:00Z"},
        {"Id": 4, "orderNumber": "ORD-2024-00004", "userEmail": "ada@example.com",
         "items": [{"productId": 12, "name": "Denim Jacket", "price": "120.00", "quantity": 1}],
         "subtotal": "120.00", "shipping": "0", "tax": "10.80", "total": "130.80",
         "status": "shipped", "createdAt": "2024-03-10T12:00:00Z"}
    ]"#;

    fn ada() -> Email {
        Email::parse("ada@example.com").unwrap()
    }

    fn address() -> ShippingAddress {
        serde_json::from_value(serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "address": "1 Analytical Way",
            "city": "London",
            "state": "NY",
            "zipCode": "10001"
        }))
        .unwrap()
    }

    fn new_order(address: ShippingAddress) -> NewOrder {
        let price: Price = "25.00".parse().unwrap();
        NewOrder {
            user_email: ada(),
            items: vec![serde_json::from_value(serde_json::json!({
                "productId": 3, "name": "Canvas Tote", "price": "25.00", "quantity": 2
            }))
            .unwrap()],
            totals: OrderTotals {
                subtotal: price.times(2),
                ..OrderTotals::default()
            },
            shipping_address: address,
            payment_method: "Credit Card".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_user_orders_newest_first() {
        let orders = MockOrders::from_json(ORDERS_JSON).unwrap();
        let mine = orders.user_orders(&ada()).await.unwrap();
        let ids: Vec<u32> = mine.iter().map(|o| o.id.as_u32()).collect();
        assert_eq!(ids, [4, 1]);

        let nobody = Email::parse("nobody@example.com").unwrap();
        assert!(orders.user_orders(&nobody).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_order_not_found() {
        let orders = MockOrders::from_json(ORDERS_JSON).unwrap();
        assert_eq!(orders.order(OrderId::new(2)).await.unwrap().total.to_string(), "$41.69");
        assert!(matches!(
            orders.order(OrderId::new(3)).await,
            Err(OrderError::NotFound(id)) if id == OrderId::new(3)
        ));
    }

    #[tokio::test]
    async fn test_has_purchased() {
        let orders = MockOrders::from_json(ORDERS_JSON).unwrap();
        assert!(orders.has_purchased(&ada(), &ProductId::from(12)).await.unwrap());
        // bought by someone else
        assert!(!orders.has_purchased(&ada(), &ProductId::from(9)).await.unwrap());
    }

    #[tokio::test]
    async fn test_search_by_text_and_status() {
        let orders = MockOrders::from_json(ORDERS_JSON).unwrap();
        let query = OrderQuery {
            search: "denim".to_owned(),
            status: None,
        };
        assert_eq!(orders.search(&ada(), &query).await.unwrap().len(), 1);

        let query = OrderQuery {
            search: String::new(),
            status: Some(OrderStatus::Delivered),
        };
        let found = orders.search(&ada(), &query).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, OrderId::new(1));
    }

    #[tokio::test]
    async fn test_place_assigns_next_id() {
        let orders = MockOrders::from_json(ORDERS_JSON).unwrap();
        let placed = orders.place(new_order(address())).await.unwrap();

        assert_eq!(placed.id, OrderId::new(5));
        assert!(placed.order_number.starts_with("ORD-"));
        assert!(placed.order_number.ends_with("-00005"));
        assert_eq!(placed.status, OrderStatus::Processing);
        assert_eq!(placed.payment_method.as_deref(), Some("Credit Card"));
        assert!(placed.estimated_delivery.is_some_and(|d| d > placed.created_at));

        let shared = orders.clone();
        assert_eq!(shared.len().await, 4);
        assert_eq!(shared.user_orders(&ada()).await.unwrap()[0].id, placed.id);
    }

    #[tokio::test]
    async fn test_place_rejects_empty_and_incomplete_orders() {
        let orders = MockOrders::default();

        let mut empty = new_order(address());
        empty.items.clear();
        assert!(matches!(orders.place(empty).await, Err(OrderError::EmptyCart)));

        let mut addr = address();
        addr.zip_code.clear();
        assert!(matches!(
            orders.place(new_order(addr)).await,
            Err(OrderError::InvalidInput(_))
        ));
        assert!(orders.is_empty().await);

        let first = orders.place(new_order(address())).await.unwrap();
        assert_eq!(first.id, OrderId::new(1));
    }

    #[test]
    fn test_fixture_errors() {
        let err = MockOrders::from_json(r#"[{"Id": 1}]"#).unwrap_err();
        assert!(matches!(
            err,
            OrderError::Fixture(FixtureError::InvalidRecord { index: 0, .. })
        ));
    }
}
