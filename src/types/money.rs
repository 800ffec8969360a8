//! Display helpers for monetary values
//!
//! Balances are kept at full `Decimal` precision. Rounding only happens when a
//! value is rendered for humans.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places used for currency amounts in renderings
pub const CURRENCY_PLACES: u32 = 2;

/// Decimal places used for interest rates in renderings
pub const RATE_PLACES: u32 = 1;

/// Round a value to `places` decimal places for display
///
/// Midpoints round away from zero, so 12.345 renders as 12.35. Callers still
/// format with an explicit precision (e.g. `{:.2}`) to pad short scales.
pub fn round_for_display(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}
