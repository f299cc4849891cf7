//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as [`Decimal`] so that `29.99 * 2` is exactly `59.98`.
//! On the wire they serialize as decimal strings and deserialize from either
//! strings or JSON numbers.

use core::fmt;
use core::iter::Sum;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::InvalidInputError;

/// A non-negative amount in the store currency's standard unit (dollars, not cents).
///
/// ```
/// use rust_decimal::Decimal;
/// use stylehub_core::Price;
///
/// let shirt = Price::new(Decimal::new(2999, 2)).unwrap();
/// assert_eq!(shirt.times(2).to_string(), "$59.98");
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The largest representable price. Saturating arithmetic stops here.
    pub const MAX: Self = Self(Decimal::MAX);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::NegativePrice`] for amounts below zero.
    pub fn new(amount: Decimal) -> Result<Self, InvalidInputError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(InvalidInputError::NegativePrice(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from an integer number of cents.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::NegativePrice`] for negative cents.
    pub fn from_cents(cents: i64) -> Result<Self, InvalidInputError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Build a price from an amount that is non-negative by construction,
    /// clamping anything below zero to [`Price::ZERO`].
    #[must_use]
    pub fn non_negative(amount: Decimal) -> Self {
        if amount.is_sign_negative() {
            Self::ZERO
        } else {
            Self(amount)
        }
    }

    /// Price multiplied by a quantity, or `None` if the product overflows.
    #[must_use]
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// Price multiplied by a quantity (a line total), saturating at
    /// [`Price::MAX`].
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        self.checked_times(quantity).unwrap_or(Self::MAX)
    }

    /// Sum of two prices, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum of two prices, saturating at [`Price::MAX`].
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        self.checked_add(other).unwrap_or(Self::MAX)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Price {
    type Error = InvalidInputError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::str::FromStr for Price {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .trim()
            .trim_start_matches('$')
            .parse::<Decimal>()
            .map_err(|e| format!("invalid price {s:?}: {e}"))?;
        Self::new(amount).map_err(|e| e.to_string())
    }
}

/// Saturates at [`Price::MAX`] instead of overflowing.
impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
