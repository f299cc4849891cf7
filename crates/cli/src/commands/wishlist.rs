//! Wishlist commands.
//!
//! # Usage
//!
//! ```bash
//! stylehub wishlist add 42
//! stylehub wishlist move-to-cart 42 --size M
//! stylehub wishlist show
//! ```

use stylehub_storefront::AppState;

use super::{CommandError, WishlistAction};

/// Run a wishlist subcommand.
pub async fn run(
    state: &mut AppState,
    action: WishlistAction,
    json: bool,
) -> Result<(), CommandError> {
    match action {
        WishlistAction::Add { product_id } => {
            if !state.save_product_to_wishlist(&product_id).await? {
                tracing::info!(%product_id, "Already in wishlist");
            }
        }
        WishlistAction::Remove { product_id } => state.wishlist_mut().remove(&product_id),
        WishlistAction::MoveToCart {
            product_id,
            size,
            color,
        } => {
            if state.catalog().is_none() {
                return Err(CommandError::NoCatalog);
            }
            if !state.move_wishlist_to_cart(&product_id, size, color).await? {
                tracing::info!(%product_id, "Not in wishlist");
            }
        }
        WishlistAction::Clear => state.wishlist_mut().clear(),
        WishlistAction::Show => {}
    }

    print_wishlist(state, json)
}

#[allow(clippy::print_stdout)]
fn print_wishlist(state: &AppState, json: bool) -> Result<(), CommandError> {
    let wishlist = state.wishlist();
    if json {
        println!("{}", serde_json::to_string_pretty(wishlist.items())?);
        return Ok(());
    }

    if wishlist.count() == 0 {
        println!("Wishlist is empty");
        return Ok(());
    }
    for entry in wishlist.items() {
        let name = entry.field_str("name").unwrap_or("(unnamed)");
        println!("[{}] {}", entry.id(), name);
    }
    println!("Saved: {}", wishlist.count());
    Ok(())
}
