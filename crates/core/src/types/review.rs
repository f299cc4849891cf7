//! Product reviews and their per-product summary.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::error::InvalidInputError;
use super::id::{ProductId, ReviewId};

/// A star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a rating.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::RatingOutOfRange`] outside 1 to 5.
    pub fn new(stars: i64) -> Result<Self, InvalidInputError> {
        u8::try_from(stars)
            .ok()
            .filter(|s| (Self::MIN..=Self::MAX).contains(s))
            .map(Self)
            .ok_or(InvalidInputError::RatingOutOfRange(stars))
    }

    /// Number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = InvalidInputError;

    fn try_from(stars: i64) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::str::FromStr for Rating {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stars = s
            .trim()
            .parse::<i64>()
            .map_err(|_| InvalidInputError::MissingField("rating"))?;
        Self::new(stars)
    }
}

fn anonymous() -> String {
    "Anonymous".to_owned()
}

/// A stored review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "Id", alias = "id")]
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_email: Email,
    #[serde(default = "anonymous")]
    pub user_name: String,
    pub rating: Rating,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub verified: bool,
}

/// A review as submitted by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub product_id: ProductId,
    pub user_email: Email,
    pub user_name: Option<String>,
    pub rating: Rating,
    pub comment: Option<String>,
}

impl NewReview {
    #[must_use]
    pub const fn new(product_id: ProductId, user_email: Email, rating: Rating) -> Self {
        Self {
            product_id,
            user_email,
            user_name: None,
            rating,
            comment: None,
        }
    }

    #[must_use]
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Build the stored review. A blank user name becomes "Anonymous" and
    /// the comment is trimmed.
    #[must_use]
    pub fn into_review(self, id: ReviewId, now: DateTime<Utc>) -> Review {
        let user_name = self
            .user_name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(anonymous);
        Review {
            id,
            product_id: self.product_id,
            user_email: self.user_email,
            user_name,
            rating: self.rating,
            comment: self.comment.map(|c| c.trim().to_owned()).unwrap_or_default(),
            created_at: now,
            updated_at: None,
            verified: true,
        }
    }
}

/// Changes to an existing review. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub rating: Option<Rating>,
    pub comment: Option<String>,
}

impl ReviewUpdate {
    /// Apply the changes and stamp `updated_at`.
    pub fn apply(self, review: &mut Review, now: DateTime<Utc>) {
        if let Some(rating) = self.rating {
            review.rating = rating;
        }
        if let Some(comment) = self.comment {
            review.comment = comment.trim().to_owned();
        }
        review.updated_at = Some(now);
    }
}

/// Rating summary for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    /// Mean rating rounded to one decimal place, zero without reviews.
    pub average_rating: Decimal,
    pub total_reviews: usize,
    /// Review count per star value, every value from 1 to 5 present.
    pub rating_breakdown: BTreeMap<u8, usize>,
}

impl ReviewStats {
    /// Summarize a set of ratings.
    pub fn from_ratings(ratings: impl IntoIterator<Item = Rating>) -> Self {
        let mut rating_breakdown: BTreeMap<u8, usize> =
            (Rating::MIN..=Rating::MAX).map(|s| (s, 0)).collect();
        let mut total_reviews = 0_usize;
        let mut sum = 0_u64;
        for rating in ratings {
            *rating_breakdown.entry(rating.stars()).or_default() += 1;
            total_reviews += 1;
            sum += u64::from(rating.stars());
        }

        let average_rating = if total_reviews == 0 {
            Decimal::ZERO
        } else {
            (Decimal::from(sum) / Decimal::from(total_reviews))
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        };

        Self {
            average_rating,
            total_reviews,
            rating_breakdown,
        }
    }

    /// `(stars, count)` pairs from 5 stars down to 1.
    pub fn breakdown_desc(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.rating_breakdown.iter().rev().map(|(s, c)| (*s, *c))
    }
}
