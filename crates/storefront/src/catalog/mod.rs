//! Catalog gateway.
//!
//! The storefront reads products through [`CatalogGateway`]. The in-memory
//! [`MockCatalog`] is the only implementation shipped here; a remote
//! record-API client plugs in behind the same trait. The cart and wishlist
//! never call the gateway: the entry point fetches a product and hands the
//! relevant fields to the state modules.

mod filter;
mod images;
mod mock;

use std::future::Future;

use stylehub_core::{Product, ProductId};
use thiserror::Error;

use crate::fixture::FixtureError;

pub use filter::{ProductFilter, SortBy, sort_products};
pub use images::parse_images;
pub use mock::MockCatalog;

/// Number of products returned by [`CatalogGateway::featured`].
pub const FEATURED_LIMIT: usize = 8;

/// Default number of products returned by [`CatalogGateway::related`].
pub const RELATED_LIMIT: usize = 4;

/// Errors raised by a catalog gateway.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with this id.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// The catalog source could not be loaded.
    #[error("catalog: {0}")]
    Fixture(#[from] FixtureError),
}

/// Read access to the product catalog.
pub trait CatalogGateway: Send + Sync {
    /// Products passing `filter`, ordered by its sort.
    fn products(
        &self,
        filter: &ProductFilter,
    ) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;

    /// A single product.
    ///
    /// Fails with [`CatalogError::NotFound`] for unknown ids.
    fn product(&self, id: &ProductId)
    -> impl Future<Output = Result<Product, CatalogError>> + Send;

    /// Up to [`FEATURED_LIMIT`] featured products.
    fn featured(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send {
        async move {
            let mut products = self.products(&ProductFilter::default()).await?;
            products.retain(|p| p.featured);
            products.truncate(FEATURED_LIMIT);
            Ok(products)
        }
    }

    /// Products in `category`.
    fn by_category(
        &self,
        category: &str,
    ) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send {
        let filter = ProductFilter {
            categories: vec![category.to_string()],
            ..ProductFilter::default()
        };
        async move { self.products(&filter).await }
    }

    /// Up to `limit` other products in the same category as `id`.
    ///
    /// Unknown ids yield an empty list.
    fn related(
        &self,
        id: &ProductId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send {
        async move {
            let current = match self.product(id).await {
                Ok(product) => product,
                Err(CatalogError::NotFound(_)) => return Ok(Vec::new()),
                Err(e) => return Err(e),
            };
            let mut products = self.by_category(&current.category).await?;
            products.retain(|p| p.id != current.id);
            products.truncate(limit);
            Ok(products)
        }
    }
}
