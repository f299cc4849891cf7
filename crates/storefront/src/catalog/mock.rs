//! In-memory catalog backed by a fixed product list.

use std::path::Path;

use stylehub_core::{Product, ProductId};

use super::images::normalize_record_images;
use super::{CatalogError, CatalogGateway, ProductFilter};
use crate::fixture::{decode_records, read_fixture};

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    products: Vec<Product>,
}

impl MockCatalog {
    /// Build a catalog from products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a JSON array of product records.
    ///
    /// String-encoded `images` fields are normalized to arrays before the
    /// record is decoded.
    ///
    /// # Errors
    ///
    /// Returns [`crate::fixture::FixtureError::Parse`] if the input is not a JSON array, or
    /// [`crate::fixture::FixtureError::InvalidRecord`] if an element is not a product.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products = decode_records(raw, normalize_record_images)?;
        Ok(Self::new(products))
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::fixture::FixtureError::Io`] if the file cannot be read, otherwise the
    /// errors of [`MockCatalog::from_json`].
    pub async fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let catalog = Self::from_json(&read_fixture(path).await?)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogGateway for MockCatalog {
    async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CatalogError> {
        Ok(filter.apply(&self.products))
    }

    async fn product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::{FEATURED_LIMIT, RELATED_LIMIT};
    use crate::fixture::FixtureError;

    fn catalog() -> MockCatalog {
        let mut records = Vec::new();
        for i in 1..=12 {
            records.push(serde_json::json!({
                "Id": i,
                "name": format!("Item {i}"),
                "category": if i % 2 == 0 { "Shirts" } else { "Pants" },
                "price": i * 10,
                "featured": i <= 10,
                "images": format!("[\"/img/{i}.jpg\"]"),
            }));
        }
        MockCatalog::from_json(&serde_json::to_string(&records).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_product_lookup() {
        let catalog = catalog();
        let product = catalog.product(&ProductId::from(3)).await.unwrap();
        assert_eq!(product.name, "Item 3");
        assert_eq!(product.images, ["/img/3.jpg"]);

        assert!(matches!(
            catalog.product(&ProductId::from(99)).await,
            Err(CatalogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_featured_is_capped() {
        let featured = catalog().featured().await.unwrap();
        assert_eq!(featured.len(), FEATURED_LIMIT);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[tokio::test]
    async fn test_by_category() {
        let shirts = catalog().by_category("Shirts").await.unwrap();
        assert_eq!(shirts.len(), 6);
        assert!(shirts.iter().all(|p| p.category == "Shirts"));
    }

    #[tokio::test]
    async fn test_related_excludes_self() {
        let catalog = catalog();
        let related = catalog
            .related(&ProductId::from(2), RELATED_LIMIT)
            .await
            .unwrap();
        assert_eq!(related.len(), RELATED_LIMIT);
        assert!(related.iter().all(|p| p.category == "Shirts"));
        assert!(related.iter().all(|p| p.id != ProductId::from(2)));

        let unknown = catalog.related(&ProductId::from(99), 4).await.unwrap();
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_invalid_record_reports_index() {
        let err = MockCatalog::from_json(r#"[{"Id":1,"name":"A","price":1},{"name":"B"}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Fixture(FixtureError::InvalidRecord { index: 1, .. })
        ));
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MockCatalog::from_path(&dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Fixture(FixtureError::Io { .. })));
    }
}
