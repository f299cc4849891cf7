//! Review gateway.
//!
//! Customers leave one review per product. [`MockReviews`] keeps reviews in
//! memory, seeded from an optional fixture file.

mod mock;

use std::future::Future;

use stylehub_core::{
    Email, InvalidInputError, NewReview, ProductId, Review, ReviewId, ReviewStats, ReviewUpdate,
};
use thiserror::Error;

use crate::fixture::FixtureError;

pub use mock::MockReviews;

/// Errors raised by a review gateway.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// No review with this id.
    #[error("review not found: {0}")]
    NotFound(ReviewId),

    /// The customer has already reviewed this product.
    #[error("{user_email} has already reviewed product {product_id}")]
    AlreadyReviewed {
        product_id: ProductId,
        user_email: Email,
    },

    /// The review is missing required details.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// The review source could not be loaded.
    #[error("reviews: {0}")]
    Fixture(#[from] FixtureError),
}

/// Read and write product reviews.
pub trait ReviewGateway: Send + Sync {
    /// Reviews of `product_id`, newest first.
    fn for_product(
        &self,
        product_id: &ProductId,
    ) -> impl Future<Output = Result<Vec<Review>, ReviewError>> + Send;

    /// Reviews written by `email`, newest first.
    fn by_user(&self, email: &Email)
    -> impl Future<Output = Result<Vec<Review>, ReviewError>> + Send;

    /// Store a new review.
    ///
    /// Fails with [`ReviewError::AlreadyReviewed`] if the customer has
    /// reviewed this product before.
    fn create(&self, review: NewReview)
    -> impl Future<Output = Result<Review, ReviewError>> + Send;

    /// Change the rating or comment of a review.
    fn update(
        &self,
        id: ReviewId,
        update: ReviewUpdate,
    ) -> impl Future<Output = Result<Review, ReviewError>> + Send;

    /// Remove a review, returning it.
    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<Review, ReviewError>> + Send;

    /// Rating summary for `product_id`.
    fn stats(
        &self,
        product_id: &ProductId,
    ) -> impl Future<Output = Result<ReviewStats, ReviewError>> + Send {
        async move {
            let reviews = self.for_product(product_id).await?;
            Ok(ReviewStats::from_ratings(reviews.iter().map(|r| r.rating)))
        }
    }
}
