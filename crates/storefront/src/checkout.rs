//! Checkout pricing.
//!
//! Shipping is free above a subtotal threshold and flat otherwise; tax is a
//! fixed rate on the subtotal, rounded to the cent. An empty cart owes
//! nothing.

use rust_decimal::{Decimal, RoundingStrategy};
use stylehub_core::{OrderTotals, Price};

use crate::cart::CartState;

/// Payment method recorded when the customer does not pick one.
pub const DEFAULT_PAYMENT_METHOD: &str = "Credit Card";

/// Shipping and tax rules applied at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutRules {
    /// Subtotals strictly above this ship free.
    pub free_shipping_over: Price,
    pub flat_shipping: Price,
    /// Fraction of the subtotal charged as tax.
    pub tax_rate: Decimal,
}

impl Default for CheckoutRules {
    fn default() -> Self {
        Self {
            free_shipping_over: Price::non_negative(Decimal::ONE_HUNDRED),
            flat_shipping: Price::non_negative(Decimal::new(899, 2)),
            tax_rate: Decimal::new(9, 2),
        }
    }
}

impl CheckoutRules {
    /// Shipping owed on `subtotal`.
    #[must_use]
    pub fn shipping(&self, subtotal: Price) -> Price {
        if subtotal > self.free_shipping_over {
            Price::ZERO
        } else {
            self.flat_shipping
        }
    }

    /// Tax owed on `subtotal`, rounded half away from zero to the cent and
    /// saturating at [`Price::MAX`].
    #[must_use]
    pub fn tax(&self, subtotal: Price) -> Price {
        subtotal
            .amount()
            .checked_mul(self.tax_rate)
            .map_or(Price::MAX, |tax| {
                Price::non_negative(
                    tax.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                )
            })
    }

    /// Full breakdown for a non-empty order with `subtotal`.
    #[must_use]
    pub fn totals(&self, subtotal: Price) -> OrderTotals {
        let shipping = self.shipping(subtotal);
        let tax = self.tax(subtotal);
        OrderTotals {
            subtotal,
            shipping,
            tax,
            total: subtotal.saturating_add(shipping).saturating_add(tax),
        }
    }
}

impl<S> CartState<S> {
    /// Checkout breakdown of the current cart under the default rules.
    #[must_use]
    pub fn checkout_summary(&self) -> OrderTotals {
        self.checkout_summary_with(&CheckoutRules::default())
    }

    /// Checkout breakdown of the current cart under `rules`.
    #[must_use]
    pub fn checkout_summary_with(&self, rules: &CheckoutRules) -> OrderTotals {
        if self.is_empty() {
            return OrderTotals::default();
        }
        rules.totals(self.total())
    }
}
