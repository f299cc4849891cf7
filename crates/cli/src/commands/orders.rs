//! Order commands.
//!
//! # Usage
//!
//! ```bash
//! stylehub orders place --email ada@example.com --first-name Ada --last-name Lovelace \
//!     --address "1 Analytical Way" --city London --state NY --zip-code 10001
//! stylehub orders list --email ada@example.com --status shipped
//! stylehub orders show 3 --email ada@example.com
//! stylehub orders to-review --email ada@example.com
//! ```

use stylehub_core::Order;
use stylehub_storefront::AppState;
use stylehub_storefront::orders::{OrderGateway, OrderQuery};

use super::{CommandError, OrderAction};

/// Run an order subcommand.
#[allow(clippy::print_stdout)]
pub async fn run(state: &mut AppState, action: OrderAction, json: bool) -> Result<(), CommandError> {
    match action {
        OrderAction::List {
            email,
            search,
            status,
        } => {
            let query = OrderQuery {
                search: search.unwrap_or_default(),
                status,
            };
            let orders = state.orders().search(&email, &query).await?;
            print_orders(&orders, json)
        }
        OrderAction::Show { order_id, email } => {
            let order = state.order_for(&email, order_id).await?;
            print_order(&order, json)
        }
        OrderAction::Place {
            email,
            address,
            payment_method,
        } => {
            let address = address.into_address(&email);
            let order = state.place_order(email, address, payment_method).await?;
            print_order(&order, json)
        }
        OrderAction::Purchased { product_id, email } => {
            let purchased = state.orders().has_purchased(&email, &product_id).await?;
            if json {
                println!("{}", serde_json::json!({ "purchased": purchased }));
            } else {
                println!("{}", if purchased { "yes" } else { "no" });
            }
            Ok(())
        }
        OrderAction::ToReview { email } => {
            let pending = state.unreviewed_purchases(&email).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pending)?);
            } else if pending.is_empty() {
                println!("Nothing left to review");
            } else {
                for product_id in pending {
                    println!("{product_id}");
                }
            }
            Ok(())
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_orders(orders: &[Order], json: bool) -> Result<(), CommandError> {
    if json {
        println!("{}", serde_json::to_string_pretty(orders)?);
        return Ok(());
    }
    if orders.is_empty() {
        println!("No orders");
        return Ok(());
    }
    for order in orders {
        println!(
            "#{:<4} {}  {:<10}  {:>3} items  {}  {}",
            order.id,
            order.order_number,
            order.status,
            order.item_count(),
            order.total,
            order.created_at.format("%Y-%m-%d"),
        );
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_order(order: &Order, json: bool) -> Result<(), CommandError> {
    if json {
        let out = serde_json::json!({
            "order": order,
            "tracking": order.tracking_steps(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{} ({})", order.order_number, order.status);
    for item in &order.items {
        println!(
            "{:>3} x {} [{}] @ {} = {}",
            item.quantity,
            item.name,
            item.product_id,
            item.price,
            item.line_total()
        );
    }
    println!(
        "Subtotal: {}  Shipping: {}  Tax: {}  Total: {}",
        order.subtotal, order.shipping, order.tax, order.total
    );
    if let Some(address) = &order.shipping_address {
        println!(
            "Ship to: {}, {}, {} {} {}",
            address.full_name(),
            address.address,
            address.city,
            address.state,
            address.zip_code
        );
    }
    for step in order.tracking_steps() {
        let mark = if step.completed { "x" } else { " " };
        let date = step
            .date
            .map(|d| d.format("%b %d, %Y").to_string())
            .unwrap_or_default();
        println!("[{mark}] {:<10} {date}", step.status);
    }
    Ok(())
}
