//! Identifiers for catalog, order, and review records.
//!
//! Catalog keys arrive from the record API as integers (`"Id": 42`) and from
//! form fields as strings (`"42"`). Both collapse into the same [`ProductId`]
//! so that cart and wishlist identity comparisons never depend on the wire
//! representation.
//!
//! Orders and reviews are numbered by the store itself, so their ids are
//! plain integers wrapped with [`define_id!`](crate::define_id).

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::InvalidInputError;

/// Macro to define a type-safe numeric ID wrapper.
///
/// Creates a newtype wrapper around `u32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_u32()`, `next()`
/// - `From<u32>`, `Into<u32>`, `Display`, and `FromStr` implementations
///
/// # Example
///
/// ```rust
/// # use stylehub_core::define_id;
/// define_id!(InvoiceId);
/// define_id!(ShipmentId);
///
/// let invoice = InvoiceId::new(1);
/// let shipment: ShipmentId = "1".parse().unwrap();
///
/// // These are different types, so this won't compile:
/// // let _: InvoiceId = shipment;
/// assert_eq!(invoice.as_u32(), shipment.as_u32());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new ID from a u32 value.
            #[must_use]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the underlying u32 value.
            #[must_use]
            pub const fn as_u32(&self) -> u32 {
                self.0
            }

            /// The id following this one, saturating at `u32::MAX`.
            #[must_use]
            pub const fn next(&self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(OrderId);
define_id!(ReviewId);

/// An opaque, non-empty product identifier.
///
/// ## Examples
///
/// ```
/// use stylehub_core::ProductId;
///
/// let id = ProductId::parse("42").unwrap();
/// assert_eq!(id, ProductId::from(42_i64));
///
/// assert!(ProductId::parse("").is_err());
/// assert!(ProductId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Parse a `ProductId` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::EmptyProductId`] if the input is empty
    /// after trimming.
    pub fn parse(s: &str) -> Result<Self, InvalidInputError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidInputError::EmptyProductId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Interpret a JSON value as a product id.
    ///
    /// Accepts non-empty strings and integers; everything else (including
    /// `null`, floats, and empty strings) yields `None`.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Self::parse(s).ok(),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::from)
                .or_else(|| n.as_u64().map(|v| Self(v.to_string()))),
            _ => None,
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid product id: {value}"))
        })
    }
}
