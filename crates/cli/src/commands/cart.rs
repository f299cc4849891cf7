//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! stylehub cart add 42 --name Shirt --price 29.99 --size M --color Blue
//! stylehub cart set-qty 42 3 --size M --color Blue
//! stylehub cart remove 42 --size M --color Blue
//! stylehub cart show --json
//! ```

use stylehub_core::{LineKey, NewCartItem};
use stylehub_storefront::AppState;
use stylehub_storefront::cart::CartState;

use super::{CartAction, CommandError};

/// Run a cart subcommand.
pub async fn run(state: &mut AppState, action: CartAction, json: bool) -> Result<(), CommandError> {
    match action {
        CartAction::Add {
            product_id,
            name,
            price,
            size,
            color,
            image,
        } => match (name, price) {
            (Some(name), Some(price)) => {
                let mut item = NewCartItem::new(product_id, name, price);
                item.size = size;
                item.color = color;
                item.image = image;
                state.cart_mut().add_item(item);
            }
            (None, None) => {
                if !state.add_product_to_cart(&product_id, size, color).await? {
                    return Err(CommandError::MissingProductDetails);
                }
            }
            _ => return Err(CommandError::MissingProductDetails),
        },
        CartAction::Remove {
            product_id,
            size,
            color,
        } => state.cart_mut().remove_item(&LineKey {
            product_id,
            size,
            color,
        }),
        CartAction::SetQty {
            product_id,
            quantity,
            size,
            color,
        } => state.cart_mut().set_quantity(
            &LineKey {
                product_id,
                size,
                color,
            },
            quantity,
        ),
        CartAction::Clear => state.cart_mut().clear(),
        CartAction::Show => {}
    }

    print_cart(state.cart(), json)
}

#[allow(clippy::print_stdout)]
fn print_cart<S>(cart: &CartState<S>, json: bool) -> Result<(), CommandError> {
    if json {
        let out = serde_json::json!({
            "items": cart.items(),
            "itemCount": cart.item_count(),
            "total": cart.total(),
            "checkout": cart.checkout_summary(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if cart.is_empty() {
        println!("Cart is empty");
        return Ok(());
    }
    for item in cart.items() {
        let variant: Vec<&str> = [item.size.as_deref(), item.color.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        let variant = if variant.is_empty() {
            String::new()
        } else {
            format!(" ({})", variant.join(", "))
        };
        println!(
            "{:>3} x {}{} [{}] @ {} = {}",
            item.quantity,
            item.name,
            variant,
            item.product_id,
            item.price,
            item.line_total()
        );
    }
    let summary = cart.checkout_summary();
    println!("Items: {}  Subtotal: {}", cart.item_count(), summary.subtotal);
    println!(
        "Shipping: {}  Tax: {}  Order total: {}",
        summary.shipping, summary.tax, summary.total
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stylehub_core::ProductId;
    use stylehub_storefront::AppStore;
    use stylehub_storefront::storage::MemoryStore;

    use super::*;

    fn add(name: Option<&str>, price: Option<&str>) -> CartAction {
        CartAction::Add {
            product_id: ProductId::from(42),
            name: name.map(str::to_string),
            price: price.map(|p| p.parse().unwrap()),
            size: None,
            color: None,
            image: None,
        }
    }

    fn state() -> AppState {
        AppState::new(AppStore::Memory(MemoryStore::new()), "cart", "wishlist").unwrap()
    }

    #[tokio::test]
    async fn test_partial_product_details_are_rejected() {
        let mut state = state();

        let err = run(&mut state, add(Some("Shirt"), None), true).await.unwrap_err();
        assert!(matches!(err, CommandError::MissingProductDetails));
        let err = run(&mut state, add(None, Some("9.99")), true).await.unwrap_err();
        assert!(matches!(err, CommandError::MissingProductDetails));
        assert!(state.cart().is_empty());
    }

    #[tokio::test]
    async fn test_manual_and_catalog_less_add() {
        let mut state = state();
        run(&mut state, add(Some("Shirt"), Some("9.99")), true).await.unwrap();
        assert_eq!(state.cart().item_count(), 1);

        // no catalog to fall back on
        let err = run(&mut state, add(None, None), true).await.unwrap_err();
        assert!(matches!(err, CommandError::MissingProductDetails));
    }
}
