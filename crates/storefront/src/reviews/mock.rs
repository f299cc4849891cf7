//! In-memory review store.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use stylehub_core::{Email, NewReview, ProductId, Review, ReviewId, ReviewUpdate};
use tokio::sync::RwLock;

use super::{ReviewError, ReviewGateway};
use crate::fixture::{decode_records, read_fixture};

/// Reviews held in memory. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct MockReviews {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl MockReviews {
    /// Build a store from existing reviews.
    #[must_use]
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Arc::new(RwLock::new(reviews)),
        }
    }

    /// Parse a JSON array of review records.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Fixture`] if the input is not an array of
    /// reviews.
    pub fn from_json(raw: &str) -> Result<Self, ReviewError> {
        Ok(Self::new(decode_records(raw, |_| {})?))
    }

    /// Load a review fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Fixture`] if the file cannot be read or parsed.
    pub async fn from_path(path: &Path) -> Result<Self, ReviewError> {
        let reviews = Self::from_json(&read_fixture(path).await?)?;
        let count = reviews.len().await;
        tracing::info!(path = %path.display(), reviews = count, "Reviews loaded");
        Ok(reviews)
    }

    /// Number of reviews.
    pub async fn len(&self) -> usize {
        self.reviews.read().await.len()
    }

    /// Whether there are no reviews.
    pub async fn is_empty(&self) -> bool {
        self.reviews.read().await.is_empty()
    }

    async fn matching(&self, pred: impl Fn(&Review) -> bool + Send) -> Vec<Review> {
        let mut found: Vec<Review> = self
            .reviews
            .read()
            .await
            .iter()
            .filter(|&review| pred(review))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }
}

impl ReviewGateway for MockReviews {
    async fn for_product(&self, product_id: &ProductId) -> Result<Vec<Review>, ReviewError> {
        Ok(self.matching(|r| &r.product_id == product_id).await)
    }

    async fn by_user(&self, email: &Email) -> Result<Vec<Review>, ReviewError> {
        Ok(self.matching(|r| &r.user_email == email).await)
    }

    async fn create(&self, review: NewReview) -> Result<Review, ReviewError> {
        let mut reviews = self.reviews.write().await;
        if reviews
            .iter()
            .any(|r| r.product_id == review.product_id && r.user_email == review.user_email)
        {
            return Err(ReviewError::AlreadyReviewed {
                product_id: review.product_id,
                user_email: review.user_email,
            });
        }

        let id = reviews
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(ReviewId::new(1), |last| last.next());
        let created = review.into_review(id, Utc::now());
        reviews.push(created.clone());

        tracing::info!(
            review_id = %created.id,
            product_id = %created.product_id,
            rating = created.rating.stars(),
            "Review created"
        );
        Ok(created)
    }

    async fn update(&self, id: ReviewId, update: ReviewUpdate) -> Result<Review, ReviewError> {
        let mut reviews = self.reviews.write().await;
        let review = reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReviewError::NotFound(id))?;
        update.apply(review, Utc::now());
        tracing::debug!(review_id = %id, "Review updated");
        Ok(review.clone())
    }

    async fn delete(&self, id: ReviewId) -> Result<Review, ReviewError> {
        let mut reviews = self.reviews.write().await;
        let index = reviews
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReviewError::NotFound(id))?;
        let removed = reviews.remove(index);
        tracing::debug!(review_id = %id, "Review deleted");
        Ok(removed)
    }
}
