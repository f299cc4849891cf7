//! StyleHub CLI - drive the storefront cart, wishlist, and catalog.
//!
//! # Usage
//!
//! ```bash
//! # Add a product variant to the cart
//! stylehub cart add 42 --name Shirt --price 29.99 --size M --color Blue
//!
//! # Add a catalog product (name and price come from STYLEHUB_CATALOG_PATH)
//! stylehub cart add 42 --size M
//!
//! # Show the cart with totals
//! stylehub cart show
//!
//! # Save a product to the wishlist
//! stylehub wishlist add 42
//!
//! # Search the catalog
//! stylehub catalog list --search shirt --max-price 50 --sort price-low
//!
//! # Review a product and see its rating summary
//! stylehub reviews add 42 --email ada@example.com --rating 5
//! stylehub reviews stats 42
//! ```
//!
//! # Commands
//!
//! - `cart` - Add, remove, and re-quantify cart lines
//! - `wishlist` - Save and remove products
//! - `catalog` - Browse the mock catalog
//! - `orders` - Check out the cart and browse order history
//! - `reviews` - Write and read product reviews
//!
//! Orders and reviews live in memory for the length of one command, seeded
//! from `STYLEHUB_ORDERS_PATH` and `STYLEHUB_REVIEWS_PATH` when set.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use stylehub_storefront::{AppState, StorefrontConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{CartAction, CatalogAction, OrderAction, ReviewAction, WishlistAction};

#[derive(Parser)]
#[command(name = "stylehub")]
#[command(author, version, about = "StyleHub storefront tools")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Browse the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Check out and browse orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Write and read product reviews
    Reviews {
        #[command(subcommand)]
        action: ReviewAction,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stylehub_storefront=info,stylehub_cli=info".into());

    // JSON lines when STYLEHUB_LOG_FORMAT=json, human-readable text otherwise
    let json_logs =
        std::env::var("STYLEHUB_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut state = AppState::from_config(&config).await?;

    match cli.command {
        Commands::Cart { action } => commands::cart::run(&mut state, action, cli.json).await?,
        Commands::Wishlist { action } => {
            commands::wishlist::run(&mut state, action, cli.json).await?;
        }
        Commands::Catalog { action } => commands::catalog::run(&state, action, cli.json).await?,
        Commands::Orders { action } => commands::orders::run(&mut state, action, cli.json).await?,
        Commands::Reviews { action } => commands::reviews::run(&state, action, cli.json).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cart_add_needs_name_and_price_together() {
        let lone_name = ["stylehub", "cart", "add", "42", "--name", "Shirt"];
        let lone_price = ["stylehub", "cart", "add", "42", "--price", "9.99"];
        assert!(Cli::try_parse_from(lone_name).is_err());
        assert!(Cli::try_parse_from(lone_price).is_err());

        let both = ["stylehub", "cart", "add", "42", "--name", "Shirt", "--price", "9.99"];
        assert!(Cli::try_parse_from(both).is_ok());
        assert!(Cli::try_parse_from(["stylehub", "cart", "add", "42"]).is_ok());
    }

    #[test]
    fn test_review_rating_is_validated_at_parse() {
        let args = |rating: &'static str| {
            [
                "stylehub", "reviews", "add", "42", "--email", "ada@example.com", "--rating",
                rating,
            ]
        };
        assert!(Cli::try_parse_from(args("5")).is_ok());
        assert!(Cli::try_parse_from(args("6")).is_err());
        assert!(Cli::try_parse_from(args("0")).is_err());
    }

    #[test]
    fn test_order_commands_parse() {
        let list = ["stylehub", "orders", "list", "--email", "ada@example.com", "--status", "Shipped"];
        assert!(Cli::try_parse_from(list).is_ok());

        let bad_email = ["stylehub", "orders", "list", "--email", "not-an-email"];
        assert!(Cli::try_parse_from(bad_email).is_err());

        let place = [
            "stylehub",
            "orders",
            "place",
            "--email",
            "ada@example.com",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--address",
            "1 Analytical Way",
            "--city",
            "London",
            "--state",
            "NY",
            "--zip-code",
            "10001",
        ];
        assert!(Cli::try_parse_from(place).is_ok());
        assert!(Cli::try_parse_from(&place[..place.len() - 2]).is_err());
    }
}
