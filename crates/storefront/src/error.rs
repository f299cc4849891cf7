//! Unified error type for storefront operations.
//!
//! Storage failures never appear here: the persistence layer absorbs them.
//! Only caller input, gateway calls, and start-up configuration can fail.

use stylehub_core::InvalidInputError;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::orders::OrderError;
use crate::reviews::ReviewError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The caller supplied a record without identity fields.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Catalog lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Order lookup or placement failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Review lookup or change failed.
    #[error("Review error: {0}")]
    Review(#[from] ReviewError),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Whether the error was caused by the caller rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::Catalog(CatalogError::NotFound(_))
                | Self::Order(
                    OrderError::NotFound(_) | OrderError::EmptyCart | OrderError::InvalidInput(_)
                )
                | Self::Review(
                    ReviewError::NotFound(_)
                        | ReviewError::AlreadyReviewed { .. }
                        | ReviewError::InvalidInput(_)
                )
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stylehub_core::{OrderId, ProductId};

    use super::*;
    use crate::fixture::FixtureError;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(InvalidInputError::MissingProductId);
        assert_eq!(err.to_string(), "Invalid input: product record has no id");

        let err = AppError::from(CatalogError::NotFound(ProductId::from(7)));
        assert_eq!(err.to_string(), "Catalog error: product not found: 7");
    }

    #[test]
    fn test_user_errors() {
        assert!(AppError::from(InvalidInputError::EmptyProductId).is_user_error());
        assert!(AppError::from(CatalogError::NotFound(ProductId::from(1))).is_user_error());
        assert!(AppError::from(OrderError::EmptyCart).is_user_error());
        assert!(AppError::from(OrderError::NotFound(OrderId::new(1))).is_user_error());
        assert!(
            !AppError::from(OrderError::Fixture(FixtureError::Parse(
                serde_json::from_str::<u8>("x").unwrap_err()
            )))
            .is_user_error()
        );
        assert!(
            !AppError::from(ConfigError::InvalidEnvVar("X".to_string(), "bad".to_string()))
                .is_user_error()
        );
    }
}
