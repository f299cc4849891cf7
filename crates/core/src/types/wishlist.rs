//! Wishlist entries: verbatim product snapshots keyed by product id.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::InvalidInputError;
use super::id::ProductId;
use super::product::Identified;

/// A product snapshot saved to the wishlist.
///
/// The record is kept exactly as it was handed in; only its id is extracted.
/// Serializes as the bare record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct WishlistEntry {
    id: ProductId,
    record: Map<String, Value>,
}

impl WishlistEntry {
    /// Snapshot a product.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::NotAnObject`] if the product does not
    /// serialize to a JSON object, or [`InvalidInputError::MissingProductId`]
    /// if it carries no usable id.
    pub fn snapshot<P: Identified + Serialize>(product: &P) -> Result<Self, InvalidInputError> {
        let id = product
            .product_id()
            .ok_or(InvalidInputError::MissingProductId)?;
        let record = match serde_json::to_value(product) {
            Ok(Value::Object(record)) => record,
            Ok(other) => return Err(InvalidInputError::NotAnObject(json_kind(&other))),
            Err(_) => return Err(InvalidInputError::NotAnObject("unserializable")),
        };
        Ok(Self { id, record })
    }

    /// The product id.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    /// The stored record.
    #[must_use]
    pub const fn record(&self) -> &Map<String, Value> {
        &self.record
    }

    /// Convenience accessor for a string field of the record.
    #[must_use]
    pub fn field_str(&self, field: &str) -> Option<&str> {
        self.record.get(field).and_then(Value::as_str)
    }
}

impl Identified for WishlistEntry {
    fn product_id(&self) -> Option<ProductId> {
        Some(self.id.clone())
    }
}

impl TryFrom<Map<String, Value>> for WishlistEntry {
    type Error = InvalidInputError;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = record
            .product_id()
            .ok_or(InvalidInputError::MissingProductId)?;
        Ok(Self { id, record })
    }
}

impl From<WishlistEntry> for Map<String, Value> {
    fn from(entry: WishlistEntry) -> Self {
        entry.record
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
