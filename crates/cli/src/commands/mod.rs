//! Subcommand definitions and handlers.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod reviews;
pub mod wishlist;

use clap::{Args, Subcommand};
use stylehub_core::{
    Email, OrderId, OrderStatus, Price, ProductId, Rating, ReviewId, ShippingAddress,
};
use stylehub_storefront::AppError;
use stylehub_storefront::catalog::{CatalogError, SortBy};
use stylehub_storefront::orders::OrderError;
use stylehub_storefront::reviews::ReviewError;
use thiserror::Error;

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The storefront rejected the operation.
    #[error(transparent)]
    App(#[from] AppError),

    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Order lookup failed.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Review lookup or change failed.
    #[error(transparent)]
    Review(#[from] ReviewError),

    /// `cart add` needs both of name and price, or a catalog to look them up.
    #[error(
        "--name and --price must be given together, or both omitted with STYLEHUB_CATALOG_PATH set"
    )]
    MissingProductDetails,

    /// Catalog commands need a catalog.
    #[error("no catalog configured (set STYLEHUB_CATALOG_PATH)")]
    NoCatalog,

    /// Output could not be encoded.
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Subcommand)]
pub enum CartAction {
    /// Add one unit of a product variant
    Add {
        /// Product id
        product_id: ProductId,
        /// Display name (looked up in the catalog if omitted)
        #[arg(long, requires = "price")]
        name: Option<String>,
        /// Unit price (looked up in the catalog if omitted)
        #[arg(long, requires = "name")]
        price: Option<Price>,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        color: Option<String>,
        /// Image reference
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove a product variant
    Remove {
        product_id: ProductId,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Set the quantity of a product variant (0 or less removes it)
    SetQty {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove every line
    Clear,
    /// Show lines, totals, and the checkout breakdown
    Show,
}

#[derive(Subcommand)]
pub enum WishlistAction {
    /// Save a product
    Add { product_id: ProductId },
    /// Remove a product
    Remove { product_id: ProductId },
    /// Move a saved product into the cart
    MoveToCart {
        product_id: ProductId,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove every saved product
    Clear,
    /// Show saved products
    Show,
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List products matching filters
    List {
        /// Case-insensitive substring of name, description, or category
        #[arg(long)]
        search: Option<String>,
        /// Restrict to categories (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long)]
        min_price: Option<Price>,
        #[arg(long)]
        max_price: Option<Price>,
        /// Restrict to sizes (repeatable)
        #[arg(long = "size")]
        sizes: Vec<String>,
        /// Restrict to colour names (repeatable)
        #[arg(long = "color")]
        colors: Vec<String>,
        /// Only discounted products
        #[arg(long)]
        sale: bool,
        /// price-low, price-high, name, rating, or newest
        #[arg(long)]
        sort: Option<SortBy>,
    },
    /// Show one product
    Show { product_id: ProductId },
    /// Show featured products
    Featured,
    /// Show products related to one product
    Related {
        product_id: ProductId,
        #[arg(long, default_value_t = stylehub_storefront::catalog::RELATED_LIMIT)]
        limit: usize,
    },
}

/// Where an order ships to; the contact email comes from `--email`.
#[derive(Args)]
pub struct AddressArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub phone: Option<String>,
    /// Street address
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub apartment: Option<String>,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub zip_code: String,
    #[arg(long, default_value = "US")]
    pub country: String,
}

impl AddressArgs {
    /// The shipping address for an order placed by `email`.
    pub fn into_address(self, email: &Email) -> ShippingAddress {
        ShippingAddress {
            first_name: self.first_name,
            last_name: self.last_name,
            email: email.to_string(),
            phone: self.phone,
            address: self.address,
            apartment: self.apartment,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
        }
    }
}

#[derive(Subcommand)]
pub enum OrderAction {
    /// List a customer's orders, newest first
    List {
        #[arg(long)]
        email: Email,
        /// Case-insensitive substring of the order number or an item name
        #[arg(long)]
        search: Option<String>,
        /// processing, shipped, delivered, or cancelled
        #[arg(long)]
        status: Option<OrderStatus>,
    },
    /// Show one order with its delivery track
    Show {
        order_id: OrderId,
        #[arg(long)]
        email: Email,
    },
    /// Place an order for the cart and empty it
    Place {
        #[arg(long)]
        email: Email,
        #[command(flatten)]
        address: AddressArgs,
        #[arg(long, default_value = stylehub_storefront::checkout::DEFAULT_PAYMENT_METHOD)]
        payment_method: String,
    },
    /// Whether a customer has bought a product
    Purchased {
        product_id: ProductId,
        #[arg(long)]
        email: Email,
    },
    /// Products a customer has bought but not reviewed
    ToReview {
        #[arg(long)]
        email: Email,
    },
}

#[derive(Subcommand)]
pub enum ReviewAction {
    /// Show a product's rating summary and reviews
    List { product_id: ProductId },
    /// Show a customer's reviews
    Mine {
        #[arg(long)]
        email: Email,
    },
    /// Review a product (once per customer)
    Add {
        product_id: ProductId,
        #[arg(long)]
        email: Email,
        /// 1 to 5
        #[arg(long)]
        rating: Rating,
        /// Display name (default: Anonymous)
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Change a review's rating or comment
    Update {
        review_id: ReviewId,
        #[arg(long)]
        rating: Option<Rating>,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Delete a review
    Delete { review_id: ReviewId },
    /// Show a product's rating summary
    Stats { product_id: ProductId },
}
