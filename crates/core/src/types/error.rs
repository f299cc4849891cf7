//! Caller-input validation errors.

use super::email::EmailError;

/// Errors raised when a caller hands the storefront a record without the
/// fields needed to identify or accept it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The product id is present but blank.
    #[error("product id cannot be empty")]
    EmptyProductId,
    /// The record carries no usable id field.
    #[error("product record has no id")]
    MissingProductId,
    /// The record is not a JSON object.
    #[error("product record must be an object, got {0}")]
    NotAnObject(&'static str),
    /// The price is negative.
    #[error("price cannot be negative: {0}")]
    NegativePrice(rust_decimal::Decimal),
    /// A required field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// The email address is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
    /// A review rating outside 1 to 5.
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),
}
