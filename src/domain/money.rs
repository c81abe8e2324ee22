//! Monetary types for nightly rates and stay totals.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Half of a nightly price, used for half-day check-in/check-out discounts.
#[must_use]
pub fn half(price: Price) -> Price {
    price / Decimal::TWO
}
