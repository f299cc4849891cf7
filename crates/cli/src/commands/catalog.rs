//! Catalog commands.
//!
//! # Usage
//!
//! ```bash
//! stylehub catalog list --category Shirts --size M --sort price-low
//! stylehub catalog show 42
//! stylehub catalog related 42 --limit 2
//! ```

use stylehub_core::Product;
use stylehub_storefront::AppState;
use stylehub_storefront::catalog::{CatalogGateway, ProductFilter};

use super::{CatalogAction, CommandError};

/// Run a catalog subcommand.
pub async fn run(state: &AppState, action: CatalogAction, json: bool) -> Result<(), CommandError> {
    let catalog = state.catalog().ok_or(CommandError::NoCatalog)?;

    let products = match action {
        CatalogAction::List {
            search,
            categories,
            min_price,
            max_price,
            sizes,
            colors,
            sale,
            sort,
        } => {
            let filter = ProductFilter {
                categories,
                search,
                min_price,
                max_price,
                sizes,
                colors,
                sale,
                sort_by: sort,
            };
            catalog.products(&filter).await?
        }
        CatalogAction::Show { product_id } => vec![catalog.product(&product_id).await?],
        CatalogAction::Featured => catalog.featured().await?,
        CatalogAction::Related { product_id, limit } => {
            catalog.related(&product_id, limit).await?
        }
    };

    print_products(&products, json)
}

#[allow(clippy::print_stdout)]
fn print_products(products: &[Product], json: bool) -> Result<(), CommandError> {
    if json {
        println!("{}", serde_json::to_string_pretty(products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!("No products found");
        return Ok(());
    }
    for product in products {
        let sale = match product.original_price {
            Some(original) if product.on_sale() => format!(" (was {original})"),
            _ => String::new(),
        };
        println!(
            "[{}] {} - {}{} [{}]",
            product.id, product.name, product.price, sale, product.category
        );
    }
    Ok(())
}
